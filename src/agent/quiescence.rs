use crate::prelude::*;

use super::{evaluate::evaluate, ordering, search::Searcher};

impl Searcher
{
    /// Plays out captures past the horizon until the position is quiet or `qdepth` reaches the limit, so the
    /// main search never stops in the middle of an exchange.
    pub fn quiesce<R: Rules + ?Sized>(&mut self, rules: &mut R, alpha: i32, beta: i32, qdepth: u8) -> Result<i32>
    {
        self.stats.qnodes += 1;
        self.stats.deepest_quiescence = self.stats.deepest_quiescence.max(qdepth);

        let stand_pat = evaluate(&*rules, rules.side_to_move());
        if stand_pat >= beta
        {
            return Ok(beta);
        }

        let mut a = alpha.max(stand_pat);
        if qdepth >= self.quiescence_depth
        {
            return Ok(a);
        }

        for mv in ordering::captures(rules.legal_moves(None))
        {
            let score = {
                let mut played = Played::new(&mut *rules, &mv)?;
                -self.quiesce(&mut *played, -beta, -a, qdepth + 1)?
            };

            if score >= beta
            {
                return Ok(beta);
            }
            a = a.max(score);
        }

        Ok(a)
    }
}
