use crate::models::Player;

/// Players still selected, in their original order.
pub fn filter_selected(players: &[Player]) -> Vec<Player> {
    players.iter().filter(|p| p.selected).cloned().collect()
}

/// The names handed to the team draw: selected players only, order preserved.
pub fn selected_names(players: &[Player]) -> Vec<String> {
    players
        .iter()
        .filter(|p| p.selected)
        .map(|p| p.name.clone())
        .collect()
}

pub fn validate_min_count(players: &[Player], min_count: usize) -> bool {
    players.len() >= min_count
}

/// Default team size offered before the user picks one: half the roster,
/// rounded up. A suggestion, not a constraint.
pub fn suggest_players_per_team(total_players: usize) -> usize {
    total_players.div_ceil(2)
}
