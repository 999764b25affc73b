use crate::prelude::*;

use super::{
    evaluate::evaluate,
    ordering,
    scalars::INF,
    table::{TTBound, TTEntry, TranspositionTable},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters for one move computation.
pub struct SearchStats
{
    pub nodes:              u64,
    pub qnodes:             u64,
    pub hits:               u64,
    pub cutoffs:            u64,
    pub deepest_quiescence: u8,
}

impl std::fmt::Display for SearchStats
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "visited {:07} nodes and {:07} qnodes, {} table hits, {} cutoffs, quiescence reached ply {}",
            self.nodes, self.qnodes, self.hits, self.cutoffs, self.deepest_quiescence
        )
    }
}

#[derive(Debug)]
/// A negamax searcher that owns everything one move computation learns.
///
/// Build a new one for every move; nothing it holds is valid for another root position.
pub struct Searcher
{
    pub table:                   TranspositionTable,
    pub stats:                   SearchStats,
    pub(super) quiescence_depth: u8,
}

impl Searcher
{
    pub fn new(config: &SearchConfig) -> Searcher
    {
        Searcher {
            table:            TranspositionTable::new(),
            stats:            SearchStats::default(),
            quiescence_depth: config.quiescence_depth,
        }
    }

    /// Scores the position for the side to move with fail-hard alpha-beta, searching `depth` plies of every
    /// move before handing over to the quiescence search.
    ///
    /// The position is restored before this returns, whether or not it succeeds.
    pub fn search<R: Rules + ?Sized>(&mut self, rules: &mut R, depth: u8, alpha: i32, beta: i32) -> Result<i32>
    {
        self.stats.nodes += 1;

        let key = rules.position_key();
        if let Some(score) = self.table.check(&key, depth, alpha, beta)
        {
            self.stats.hits += 1;
            return Ok(score);
        }

        if rules.is_game_over()
        {
            return Ok(evaluate(&*rules, rules.side_to_move()));
        }

        if depth == 0
        {
            let score = self.quiesce(rules, alpha, beta, 0)?;
            self.table.store(key, TTEntry::new(score, 0, TTBound::classify(score, alpha, beta), None));
            return Ok(score);
        }

        let moves = ordering::order(rules.legal_moves(None));
        if moves.is_empty()
        {
            return Ok(evaluate(&*rules, rules.side_to_move()));
        }

        let (mut a, b) = (alpha, beta);
        let (mut best_mv, mut best_score) = (None, -INF);

        for mv in moves
        {
            let score = {
                let mut played = Played::new(&mut *rules, &mv)?;
                -self.search(&mut *played, depth - 1, -b, -a)?
            };

            if score > best_score
            {
                best_score = score;
                best_mv = Some(mv);
            }

            a = a.max(score);
            if a >= b
            {
                self.stats.cutoffs += 1;
                self.table.store(key, TTEntry::new(b, depth, TTBound::Lower, best_mv));
                return Ok(b);
            }
        }

        let bound = if best_score <= alpha { TTBound::Upper } else { TTBound::Exact };
        self.table.store(key, TTEntry::new(best_score, depth, bound, best_mv));

        Ok(best_score)
    }
}
