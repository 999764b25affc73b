use std::cmp::Reverse;

use rand::{
    rngs::StdRng,
    seq::SliceRandom,
    Rng,
    SeedableRng,
};

use crate::{book, prelude::*};

pub mod evaluate;
pub mod ordering;
pub mod quiescence;
pub mod scalars;
pub mod search;
pub mod searchargs;
pub mod table;
pub mod variation;

pub use evaluate::{evaluate, piece_value};
pub use scalars::*;
pub use search::*;
pub use searchargs::*;
pub use table::*;
pub use variation::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A root move and the score the search gave it.
pub struct EvaluatedMove
{
    pub mv:    Move,
    pub score: i32,
}

#[derive(Debug)]
/// Picks moves for one side: from the opening catalogue while the game is in book, by tree search afterwards.
pub struct Agent<'a, G: Rng>
{
    book: &'a Catalogue,
    rng:  G,
}

impl Agent<'static, StdRng>
{
    /// An agent over the standard catalogue, seeded for reproducible book choices if a seed is given.
    pub fn standard(seed: Option<u64>) -> Self
    {
        let rng = match seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };
        Agent::new(book::standard(), rng)
    }
}

impl<'a, G: Rng> Agent<'a, G>
{
    pub fn new(book: &'a Catalogue, rng: G) -> Self
    {
        Agent { book, rng }
    }

    /// Returns the move to play in the current position, or nothing if there is no legal move.
    ///
    /// The position is the same on return as it was on entry. Failures inside the search are logged and
    /// reported as no move.
    pub fn select_move<R: Rules + ?Sized>(&mut self, rules: &mut R, config: SearchConfig) -> Option<Move>
    {
        if let Some(mv) = self.book_move(rules)
        {
            log::debug!("found {: ^8} in book", mv);
            return Some(mv);
        }

        match self.analyse(rules, config)
        {
            | Ok(ranked) => ranked.into_iter().next().map(|evaluated| evaluated.mv),
            | Err(err) =>
            {
                log::warn!("{}", err);
                None
            }
        }
    }

    /// Picks one of the catalogue's candidates for this position at random.
    ///
    /// A candidate that is not among the legal moves, or that the rules refuse to play, counts as a miss.
    pub fn book_move<R: Rules + ?Sized>(&mut self, rules: &mut R) -> Option<Move>
    {
        let book = self.book;
        let candidate = book.get(&rules.position_key())?.choose(&mut self.rng)?;

        let Some(mv) = rules
            .legal_moves(Some(candidate.from))
            .into_iter()
            .find(|mv| mv.travels(candidate.from, candidate.to))
        else
        {
            log::debug!("book move {} is not legal here", candidate);
            return None;
        };

        match Played::new(&mut *rules, &mv)
        {
            | Ok(_) => Some(mv),
            | Err(err) =>
            {
                log::warn!("{}", err);
                None
            }
        }
    }

    /// Searches every root move and returns them best first. Moves with equal scores keep the order the rules
    /// enumerated them in.
    pub fn analyse<R: Rules + ?Sized>(&mut self, rules: &mut R, config: SearchConfig) -> Result<Vec<EvaluatedMove>>
    {
        let mut searcher = Searcher::new(&config);
        let depth = config.max_depth.max(1);

        let mut ranked = Vec::new();
        for mv in rules.legal_moves(None)
        {
            let score = {
                let mut played = Played::new(&mut *rules, &mv)?;
                -searcher.search(&mut *played, depth - 1, -INF, INF)?
            };
            log::trace!("scored {: ^8}: {: >7}", mv, score);
            ranked.push(EvaluatedMove { mv, score });
        }
        ranked.sort_by_key(|evaluated| Reverse(evaluated.score));

        if let Some(best) = ranked.first()
        {
            let variation = Variation::principal(rules, &searcher.table, &best.mv, best.score);
            log::debug!("found {: ^8}: scored {: >7} at {} ({})", best.mv, best.score, config.difficulty, depth);
            log::debug!("{}", searcher.stats);
            log::debug!("expects {}", variation);
        }

        Ok(ranked)
    }
}
