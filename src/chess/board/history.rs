use shakmaty::Chess;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// A played move, together with everything needed to take it back.
pub struct Entry
{
    pub mv:         Move,
    pub(super) key: String,
    pub(super) pos: Chess,
}

#[derive(Clone, Debug, Default)]
/// A linear move history.
///
/// Each entry remembers the position and key from *before* its move, so undoing is just a pop.
pub struct History
{
    past: Vec<Entry>,
}

impl History
{
    /// Counts how many earlier positions on this line share the given key.
    pub fn count(&self, key: &str) -> usize
    {
        self.past.iter().filter(|entry| entry.key == key).count()
    }

    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// A read-only iter to past moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move>
    {
        self.past.iter().map(|entry| &entry.mv)
    }

    /// Gets the length of the history, which is useful for controlling undos.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Records a move.
    pub fn play(&mut self, entry: Entry)
    {
        self.past.push(entry);
    }

    /// Gets the last move played in this line, if one exists.
    pub fn prev(&self) -> Option<&Move>
    {
        self.past.last().map(|entry| &entry.mv)
    }

    /// The SAN of every move on this line, oldest first.
    pub fn sans(&self) -> Vec<&str>
    {
        self.iter().map(|mv| mv.san.as_str()).collect()
    }

    /// Pops the most recent move.
    pub fn undo(&mut self) -> Option<Entry>
    {
        self.past.pop()
    }
}
