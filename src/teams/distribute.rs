use rand::Rng;

use crate::error::Error;
use crate::models::TeamAssignment;

/// Draw random teams of `players_per_team` from `names`. The shuffled roster
/// is sliced into consecutive chunks, so every team is full except possibly
/// the last one, which absorbs the whole remainder.
///
/// Each call is an independent draw; "sort again" is simply calling this
/// again with the same names.
pub fn distribute(names: &[String], players_per_team: usize) -> Result<TeamAssignment, Error> {
    distribute_with_rng(names, players_per_team, &mut rand::thread_rng())
}

/// Same as [`distribute`] with a caller-supplied random source, so a draw can
/// be replayed under test or behind a seed flag.
pub fn distribute_with_rng<R: Rng>(
    names: &[String],
    players_per_team: usize,
    rng: &mut R,
) -> Result<TeamAssignment, Error> {
    if names.is_empty() || players_per_team == 0 {
        return Err(Error::InvalidDistributionParams);
    }

    let shuffled = shuffle_with_rng(names, rng);
    let total_teams = names.len().div_ceil(players_per_team);
    let teams: Vec<Vec<String>> = shuffled
        .chunks(players_per_team)
        .map(|chunk| chunk.to_vec())
        .collect();

    Ok(TeamAssignment {
        teams,
        total_teams,
        players_per_team,
    })
}

/// Fisher-Yates over a copy of the input; the original slice is untouched.
/// Walks from the last index down, swapping each slot with a uniformly drawn
/// index at or before it. Linear time, every permutation equally likely.
pub fn shuffle_with_rng<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for current in (1..shuffled.len()).rev() {
        let pick = rng.gen_range(0..=current);
        shuffled.swap(current, pick);
    }
    shuffled
}
