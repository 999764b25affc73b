use shakmaty::{
    fen::{Epd, Fen},
    san::San,
    CastlingMode,
    Chess,
    Color,
    EnPassantMode,
    Position,
};

use crate::prelude::*;

mod history;

use history::Entry;
pub use history::History;

/// The number of identical positions that makes a repetition draw.
const REPETITIONS: usize = 3;

/// Halfmoves without a capture or pawn move before the fifty-move rule applies.
const FIFTY_MOVE_HALFMOVES: u32 = 100;

#[derive(Clone, Debug)]
/// A chess position with a takeback stack, backed by `shakmaty`.
///
/// This is the rules collaborator the agent drives. Moves go in through `Rules::apply` and come out through
/// `Rules::undo`, and the board remembers every position on the line so it can spot repetitions.
pub struct Board
{
    /// The linear history on this board.
    history: History,

    /// The key of the current position, cached because the search asks for it at every node.
    key: String,

    position: Chess,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new(Chess::default())
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.fen())
    }
}

impl FromStr for Board
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let fen = s.trim().parse::<Fen>().map_err(|err| Self::invalid(s, err.to_string()))?;

        let position: Chess =
            fen.into_position(CastlingMode::Standard).map_err(|err| Self::invalid(s, err.to_string()))?;

        Ok(Board::new(position))
    }
}

impl Board
{
    /// Gets the full FEN of the current position, including the move counters.
    pub fn fen(&self) -> String
    {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// Gets the moves played on this board.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// Creates a board on the given position with an empty history.
    pub fn new(position: Chess) -> Board
    {
        let key = Self::key_of(&position);
        Board {
            history: History::default(),
            key,
            position,
        }
    }

    /// Resolves a move string against the legal moves and plays it.
    pub fn play(&mut self, s: &MoveString) -> Result<Move>
    {
        let mv = self.resolve(s)?;
        self.apply(&mv)?;
        Ok(mv)
    }

    /// How many times the current position has occurred on this line, itself included.
    pub fn repetitions(&self) -> usize
    {
        1 + self.history.count(&self.key)
    }

    /// Finds the legal move the move string describes.
    pub fn resolve(&self, s: &MoveString) -> Result<Move>
    {
        self.legal_moves(Some(s.from)).into_iter().find(|mv| mv.matches(s)).ok_or_else(|| {
            Error::new(Kind::IllegalMove, format!("{} is not legal in {}.", s, self.fen()))
        })
    }

    /// Undoes a number of moves, if possible.
    pub fn undo_many(&mut self, n: usize) -> Result<()>
    {
        let l = self.history.len();
        if n > l
        {
            let err_msg = format!(
                "Asked for {} undo{}, but only {} move{} {} been played on this board.",
                n,
                if n == 1 { "" } else { "s" },
                l,
                if l == 1 { "" } else { "s" },
                if l == 1 { "has" } else { "have" }
            );
            return Err(Error::new(Kind::NothingToUndo, err_msg));
        }

        for _ in 0 .. n
        {
            self.undo()?;
        }
        Ok(())
    }
}

/// Private conversions between the engine's types and shakmaty's.
impl Board
{
    /// Converts a shakmaty move into the engine's representation.
    fn convert(&self, m: &shakmaty::Move) -> Option<Move>
    {
        let (from, to) = Self::endpoints(m)?;

        Some(Move {
            from,
            to,
            piece: Self::role(m.role()),
            captured: m.capture().map(Self::role),
            promotion: m.promotion().map(Self::role),
            san: San::from_move(&self.position, m).to_string(),
        })
    }

    /// Gets the origin and destination of a move, reporting castling king-wise.
    fn endpoints(m: &shakmaty::Move) -> Option<(Square, Square)>
    {
        let from = Self::square(m.from()?)?;
        let to = match *m
        {
            | shakmaty::Move::Castle { king, rook } =>
            {
                let file = if (rook.file() as u8) > (king.file() as u8) { 6 } else { 2 };
                Square::at(file, king.rank() as u8)?
            }
            | _ => Self::square(m.to())?,
        };
        Some((from, to))
    }

    /// Describes a position string that shakmaty refused.
    fn invalid(s: &str, reason: String) -> Error
    {
        Error::for_parse::<Self>(s.into()).chain(Error::new(Kind::InvalidPosition, reason))
    }

    /// Finds the shakmaty move corresponding to one of ours.
    fn find(&self, mv: &Move) -> Option<shakmaty::Move>
    {
        self.position.legal_moves().into_iter().find(|m| {
            Self::endpoints(m) == Some((mv.from, mv.to)) && m.promotion().map(Self::role) == mv.promotion
        })
    }

    /// Computes the position key: the EPD fields of the position.
    fn key_of(position: &Chess) -> String
    {
        Epd::from_position(position.clone(), EnPassantMode::Legal).to_string()
    }

    fn role(role: shakmaty::Role) -> Role
    {
        match role
        {
            | shakmaty::Role::Pawn => Role::Pawn,
            | shakmaty::Role::Knight => Role::Knight,
            | shakmaty::Role::Bishop => Role::Bishop,
            | shakmaty::Role::Rook => Role::Rook,
            | shakmaty::Role::Queen => Role::Queen,
            | shakmaty::Role::King => Role::King,
        }
    }

    fn side(color: Color) -> Side
    {
        match color
        {
            | Color::White => Side::White,
            | Color::Black => Side::Black,
        }
    }

    fn square(square: shakmaty::Square) -> Option<Square>
    {
        // Both sides number squares a1 = 0 through h8 = 63.
        Square::from_index(square as u8)
    }
}

impl Rules for Board
{
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move>
    {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| self.convert(m))
            .filter(|mv| from.map_or(true, |sq| mv.from == sq))
            .collect()
    }

    fn apply(&mut self, mv: &Move) -> Result<()>
    {
        let Some(m) = self.find(mv)
        else
        {
            return Err(Error::new(Kind::IllegalMove, format!("{} is not legal in {}.", mv, self.fen())));
        };

        let entry = Entry {
            mv:  mv.clone(),
            key: self.key.clone(),
            pos: self.position.clone(),
        };

        self.position.play_unchecked(&m);
        self.key = Self::key_of(&self.position);
        self.history.play(entry);
        Ok(())
    }

    fn undo(&mut self) -> Result<()>
    {
        let Some(entry) = self.history.undo()
        else
        {
            return Err(Error::new(Kind::NothingToUndo, "No move to undo.".into()));
        };

        self.position = entry.pos;
        self.key = entry.key;
        Ok(())
    }

    fn side_to_move(&self) -> Side
    {
        Self::side(self.position.turn())
    }

    fn is_checkmate(&self) -> bool
    {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool
    {
        self.position.is_stalemate()
    }

    fn is_threefold_repetition(&self) -> bool
    {
        self.repetitions() >= REPETITIONS
    }

    fn is_draw(&self) -> bool
    {
        self.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.is_threefold_repetition()
    }

    fn in_check(&self) -> bool
    {
        self.position.is_check()
    }

    fn position_key(&self) -> String
    {
        self.key.clone()
    }

    fn piece_at(&self, square: Square) -> Option<Piece>
    {
        let sq = shakmaty::Square::new(u32::from(square.index()));
        self.position.board().piece_at(sq).map(|piece| Piece {
            side: Self::side(piece.color),
            role: Self::role(piece.role),
        })
    }
}
