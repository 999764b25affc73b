use std::cmp::Reverse;

use itertools::Itertools;

use crate::prelude::*;

use super::{evaluate::piece_value, scalars::PROMOTION_BONUS};

/// Guesses how promising a move is before searching it.
///
/// Captures are ranked most valuable victim first, least valuable attacker second. Promotions get a flat bonus.
/// Quiet moves score zero.
pub fn priority(mv: &Move) -> i32
{
    let mut score = 0;

    if let Some(victim) = mv.captured
    {
        score += piece_value(victim) * 10 - piece_value(mv.piece);
    }

    if mv.is_promotion()
    {
        score += PROMOTION_BONUS;
    }

    score
}

/// Sorts moves so the likeliest refutations are searched first. Equal moves keep their relative order.
pub fn order(moves: Vec<Move>) -> Vec<Move>
{
    moves.into_iter().sorted_by_key(|mv| Reverse(priority(mv))).collect()
}

/// Keeps only the captures, biggest victim first.
pub fn captures(moves: Vec<Move>) -> Vec<Move>
{
    moves
        .into_iter()
        .filter_map(|mv| mv.captured.map(|victim| (piece_value(victim), mv)))
        .sorted_by_key(|(value, _)| Reverse(*value))
        .map(|(_, mv)| mv)
        .collect()
}
