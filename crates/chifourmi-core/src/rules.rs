//! Round rules: the beats relation and score comparison.

use std::collections::BTreeMap;

use chifourmi_types::{Choice, Slot, Winner};

/// Rounds in a match.
pub const MAX_ROUNDS: u32 = 3;

/// Result of comparing two choices, relative to argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The first choice wins.
    First,
    /// The second choice wins.
    Second,
    /// Both choices are equal.
    Tie,
}

/// Whether `a` beats `b`: rock beats scissors, scissors beats paper,
/// paper beats rock.
pub const fn beats(a: Choice, b: Choice) -> bool {
    matches!(
        (a, b),
        (Choice::Rock, Choice::Scissors)
            | (Choice::Scissors, Choice::Paper)
            | (Choice::Paper, Choice::Rock)
    )
}

/// Compare two choices. Equal choices always tie.
pub const fn resolve(first: Choice, second: Choice) -> RoundOutcome {
    if beats(first, second) {
        RoundOutcome::First
    } else if beats(second, first) {
        RoundOutcome::Second
    } else {
        RoundOutcome::Tie
    }
}

/// Round winner for a side A choice against a side B choice.
pub const fn round_winner(side_a: Choice, side_b: Choice) -> Winner {
    match resolve(side_a, side_b) {
        RoundOutcome::First => Winner::SideA,
        RoundOutcome::Second => Winner::SideB,
        RoundOutcome::Tie => Winner::Tie,
    }
}

/// Match winner from cumulative scores. A missing slot counts as zero.
pub fn final_verdict(scores: &BTreeMap<Slot, u32>) -> Winner {
    let a = scores.get(&Slot::SideA).copied().unwrap_or(0);
    let b = scores.get(&Slot::SideB).copied().unwrap_or(0);
    match a.cmp(&b) {
        core::cmp::Ordering::Greater => Winner::SideA,
        core::cmp::Ordering::Less => Winner::SideB,
        core::cmp::Ordering::Equal => Winner::Tie,
    }
}
