use crate::models::TeamColor;

/// Fixed palette cycled by team index. A draw with more than twelve teams
/// reuses colors; that is accepted visual degradation, not an error.
pub const TEAM_COLORS: [TeamColor; 12] = [
    TeamColor { border_color: "#007aff", label: "Team A" },
    TeamColor { border_color: "#ff3b30", label: "Team B" },
    TeamColor { border_color: "#34c759", label: "Team C" },
    TeamColor { border_color: "#ff9500", label: "Team D" },
    TeamColor { border_color: "#5856d6", label: "Team E" },
    TeamColor { border_color: "#ff2d55", label: "Team F" },
    TeamColor { border_color: "#00c7be", label: "Team G" },
    TeamColor { border_color: "#ffcc00", label: "Team H" },
    TeamColor { border_color: "#af52de", label: "Team I" },
    TeamColor { border_color: "#ff6b6b", label: "Team J" },
    TeamColor { border_color: "#5ac8fa", label: "Team K" },
    TeamColor { border_color: "#64d2ff", label: "Team L" },
];

pub fn team_color_for(index: usize) -> TeamColor {
    TEAM_COLORS[index % TEAM_COLORS.len()]
}
