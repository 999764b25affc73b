use std::collections::HashMap;

use crate::prelude::*;

mod entry;

pub use entry::{TTBound, TTEntry};

#[derive(Clone, Debug, Default)]
/// A cache of search results keyed by position, living for one move computation.
pub struct TranspositionTable
{
    map: HashMap<String, TTEntry>,
}

impl TranspositionTable
{
    /// Checks if the score here is any good.
    ///
    /// Entries shallower than `depth` are never trusted. Bounded entries only answer when they settle the window.
    pub fn check(&self, key: &str, depth: u8, alpha: i32, beta: i32) -> Option<i32>
    {
        let hit = self.get(key)?;
        if hit.depth < depth
        {
            return None;
        }

        match hit.bound
        {
            | TTBound::Exact => Some(hit.score),
            | TTBound::Lower if hit.score >= beta => Some(beta),
            | TTBound::Upper if hit.score <= alpha => Some(alpha),
            | _ => None,
        }
    }

    pub fn clear(&mut self)
    {
        self.map.clear();
    }

    pub fn get(&self, key: &str) -> Option<&TTEntry>
    {
        self.map.get(key)
    }

    pub fn is_empty(&self) -> bool
    {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    pub fn new() -> TranspositionTable
    {
        log::trace!("Allocated a fresh TranspositionTable.");
        TranspositionTable::default()
    }

    /// Stores a new evaluation into the transposition table.
    ///
    /// Deeper results and exact results win over what is already there. A result without a move keeps the
    /// move suggested by the entry it replaces.
    pub fn store(&mut self, key: String, mut entry: TTEntry)
    {
        match self.map.get_mut(&key)
        {
            | Some(prev) =>
            {
                if entry.supersedes(prev)
                {
                    if entry.mv.is_none()
                    {
                        entry.mv = prev.mv.take();
                    }
                    *prev = entry;
                }
            }
            | None =>
            {
                self.map.insert(key, entry);
            }
        }
    }

    /// The move suggested for this position by the last search to store there, if any.
    pub fn suggestion(&self, key: &str) -> Option<&Move>
    {
        self.get(key).and_then(|entry| entry.mv.as_ref())
    }
}
