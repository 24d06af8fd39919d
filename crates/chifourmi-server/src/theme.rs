//! Display themes: cosmetic side names picked from player names.
//!
//! Themes only rename the sides for display. Slot identities, scores,
//! and wire labels are never touched.

use chifourmi_types::{Player, Slot};

/// A named pair of display labels for the two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Theme identifier.
    pub name: &'static str,
    side_a: &'static str,
    side_b: &'static str,
}

impl Theme {
    /// Display label for `slot` under this theme.
    pub const fn label(&self, slot: Slot) -> &'static str {
        match slot {
            Slot::SideA => self.side_a,
            Slot::SideB => self.side_b,
        }
    }
}

/// Shown when any player is named "maria".
pub const ROMANTIC: Theme = Theme {
    name: "romantic",
    side_a: "bordeaux",
    side_b: "vienne",
};

/// Shown when any player is named "sarra".
pub const TUNISIA_FRANCE: Theme = Theme {
    name: "tunisia-france",
    side_a: "france",
    side_b: "tunisie",
};

/// Shown otherwise.
pub const DEFAULT: Theme = Theme {
    name: "default",
    side_a: "france",
    side_b: "tunisie",
};

/// Names that unlock a theme, checked in order.
const TRIGGERS: [(&str, Theme); 2] = [("maria", ROMANTIC), ("sarra", TUNISIA_FRANCE)];

/// Pick the theme for the seated players. Names match case-insensitively
/// and the first trigger found wins.
pub fn for_players<'a, I>(players: I) -> Theme
where
    I: IntoIterator<Item = &'a Player>,
{
    let names: Vec<String> = players
        .into_iter()
        .map(|p| p.name.trim().to_lowercase())
        .collect();
    TRIGGERS
        .iter()
        .find(|(trigger, _)| names.iter().any(|n| n == trigger))
        .map_or(DEFAULT, |(_, theme)| *theme)
}
