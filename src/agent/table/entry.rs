use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// How a stored score relates to the true value of its position.
pub enum TTBound
{
    /// The score is the true value.
    Exact,
    /// The search failed high; the true value is at least the score.
    Lower,
    /// The search failed low; the true value is at most the score.
    Upper,
}

impl TTBound
{
    /// Classifies a score against the window it was searched with.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> TTBound
    {
        if score <= alpha
        {
            TTBound::Upper
        }
        else if score >= beta
        {
            TTBound::Lower
        }
        else
        {
            TTBound::Exact
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The outcome of the most useful search of a particular position so far.
pub struct TTEntry
{
    pub score: i32,
    pub depth: u8,
    pub bound: TTBound,
    pub mv:    Option<Move>,
}

impl TTEntry
{
    pub fn new(score: i32, depth: u8, bound: TTBound, mv: Option<Move>) -> TTEntry
    {
        TTEntry { score, depth, bound, mv }
    }

    /// Whether this entry ought to replace `prev` for the same position.
    pub fn supersedes(&self, prev: &TTEntry) -> bool
    {
        self.depth >= prev.depth || self.bound == TTBound::Exact && prev.bound != TTBound::Exact
    }
}
