use std::ops::{Deref, DerefMut};

use crate::prelude::*;

/// The rules collaborator the engine searches through.
///
/// The engine never keeps its own copy of a position. It asks the implementor for moves, plays them,
/// takes them back, and reads terminal status and board contents from whatever state the implementor owns.
pub trait Rules
{
    /// Enumerates the legal moves in the current position, optionally only those leaving `from`.
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move>;

    /// Plays a move, which must be a member of `legal_moves(None)`.
    fn apply(&mut self, mv: &Move) -> Result<()>;

    /// Takes back the most recently applied move.
    fn undo(&mut self) -> Result<()>;

    fn side_to_move(&self) -> Side;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_threefold_repetition(&self) -> bool;

    /// Whether the game is drawn for any reason, including stalemate and repetition.
    fn is_draw(&self) -> bool;

    fn in_check(&self) -> bool;

    /// Canonical encoding of placement, side to move, castling rights and en-passant target.
    fn position_key(&self) -> String;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn is_game_over(&self) -> bool
    {
        self.is_checkmate() || self.is_draw()
    }
}

/// A move held on the rules collaborator for as long as this guard lives.
///
/// Creating the guard applies the move and dropping it takes the move back, so every exit from a scope
/// (early returns and `?` included) leaves the position exactly as it was found.
pub struct Played<'a, R: Rules + ?Sized>
{
    rules: &'a mut R,
}

impl<'a, R: Rules + ?Sized> Played<'a, R>
{
    /// Applies the move, handing back a guard that will undo it.
    pub fn new(rules: &'a mut R, mv: &Move) -> Result<Self>
    {
        rules.apply(mv)?;
        Ok(Played { rules })
    }
}

impl<R: Rules + ?Sized> Deref for Played<'_, R>
{
    type Target = R;
    fn deref(&self) -> &Self::Target
    {
        self.rules
    }
}

impl<R: Rules + ?Sized> DerefMut for Played<'_, R>
{
    fn deref_mut(&mut self) -> &mut Self::Target
    {
        self.rules
    }
}

impl<R: Rules + ?Sized> Drop for Played<'_, R>
{
    fn drop(&mut self)
    {
        if let Err(err) = self.rules.undo()
        {
            log::error!("{}", Error::desync(err));
        }
    }
}
