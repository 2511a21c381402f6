use serde::{Deserialize, Serialize};

/// A player parsed out of one line of roster text. `id` is the zero-based
/// index of the original line and is stable within a single parse; discarded
/// lines leave gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub selected: bool,
}

/// One random draw of teams. Built fresh on every distribution; a "sort again"
/// produces a new value rather than mutating an old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub teams: Vec<Vec<String>>,
    pub total_teams: usize,
    /// The requested size, which the last team may undershoot.
    pub players_per_team: usize,
}

impl TeamAssignment {
    pub fn total_players(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }
}

/// Display styling for a team slot, taken from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamColor {
    pub border_color: &'static str,
    pub label: &'static str,
}
