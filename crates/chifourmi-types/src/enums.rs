//! Enumeration types for the Chifourmi match.
//!
//! Wire labels are fixed here through `serde` renames so the browser
//! client and the generated `TypeScript` bindings agree on them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// One of the two sides a player can occupy.
///
/// The slot set is fixed at two. Display themes may rename the sides on
/// screen, but the wire label is always `sideA` or `sideB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum Slot {
    /// The first side.
    SideA,
    /// The second side.
    SideB,
}

impl Slot {
    /// Every slot, in resolution order.
    pub const ALL: [Self; 2] = [Self::SideA, Self::SideB];

    /// The wire label for this slot.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SideA => "sideA",
            Self::SideB => "sideB",
        }
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Choices
// ---------------------------------------------------------------------------

/// A player's selection for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Choice {
    /// Rock. Beats scissors.
    #[serde(rename = "pierre")]
    Rock,
    /// Paper. Beats rock.
    #[serde(rename = "papier")]
    Paper,
    /// Scissors. Beats paper.
    #[serde(rename = "ciseaux")]
    Scissors,
}

impl Choice {
    /// Every choice.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The wire label for this choice.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rock => "pierre",
            Self::Paper => "papier",
            Self::Scissors => "ciseaux",
        }
    }
}

impl core::fmt::Display for Choice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Winners
// ---------------------------------------------------------------------------

/// Outcome of a round or of the whole match: a winning side or a tie.
///
/// Serialized as the winning slot's label or `"tie"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum Winner {
    /// [`Slot::SideA`] won.
    SideA,
    /// [`Slot::SideB`] won.
    SideB,
    /// Nobody won.
    Tie,
}

impl Winner {
    /// The winning slot, or `None` on a tie.
    pub const fn slot(self) -> Option<Slot> {
        match self {
            Self::SideA => Some(Slot::SideA),
            Self::SideB => Some(Slot::SideB),
            Self::Tie => None,
        }
    }
}

impl core::fmt::Display for Winner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.slot() {
            Some(slot) => f.write_str(slot.label()),
            None => f.write_str("tie"),
        }
    }
}
