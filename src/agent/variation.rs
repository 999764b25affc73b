use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::prelude::*;

use super::table::TranspositionTable;

#[derive(Clone, Debug, Default)]
/// A particular line taken by the searcher, which is a continuation and a corresponding score.
pub struct Variation
{
    pub moves: ArrayVec<Move, { scalars::MAXIMUM_PLY }>,
    pub score: i32,
}

impl std::fmt::Display for Variation
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} ({})", self.moves.iter().map(|mv| &mv.san).join(" "), self.score)
    }
}

impl Variation
{
    /// Reads the expected line out of the table, starting with `first` and following each position's
    /// suggested move for as long as it stays legal and new.
    pub fn principal<R: Rules + ?Sized>(rules: &mut R, table: &TranspositionTable, first: &Move, score: i32) -> Variation
    {
        let mut variation = Variation {
            moves: ArrayVec::new(),
            score,
        };
        let mut seen = vec![rules.position_key()];
        variation.follow(rules, table, first.clone(), &mut seen);
        variation
    }

    fn follow<R: Rules + ?Sized>(&mut self, rules: &mut R, table: &TranspositionTable, mv: Move, seen: &mut Vec<String>)
    {
        if self.moves.is_full()
        {
            return;
        }

        let mut played = match Played::new(&mut *rules, &mv)
        {
            | Ok(played) => played,
            | Err(err) =>
            {
                log::warn!("{}", err);
                return;
            }
        };
        self.moves.push(mv);

        let key = played.position_key();
        if seen.contains(&key)
        {
            return;
        }

        let Some(next) = table.suggestion(&key).filter(|next| played.legal_moves(None).contains(next)).cloned()
        else
        {
            return;
        };

        seen.push(key);
        self.follow(&mut *played, table, next, seen);
    }
}
