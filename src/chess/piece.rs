use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The sides in a game of chess.
pub enum Side
{
    White = 0,
    Black = 1,
}

impl Side
{
    /// Gets the other side.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }
}

impl std::fmt::Display for Side
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Side
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "White" | "w" => Ok(Self::White),
            | "Black" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The kinds of chess pieces.
pub enum Role
{
    Pawn   = 0,
    Knight = 1,
    Bishop = 2,
    Rook   = 3,
    Queen  = 4,
    King   = 5,
}

impl std::fmt::Display for Role
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.char())
    }
}

impl FromStr for Role
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "p" | "P" => Ok(Self::Pawn),
            | "n" | "N" => Ok(Self::Knight),
            | "b" | "B" => Ok(Self::Bishop),
            | "r" | "R" => Ok(Self::Rook),
            | "q" | "Q" => Ok(Self::Queen),
            | "k" | "K" => Ok(Self::King),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

impl Role
{
    /// Returns the roles in index order.
    pub fn all() -> [Role; 6]
    {
        [Self::Pawn, Self::Knight, Self::Bishop, Self::Rook, Self::Queen, Self::King]
    }

    /// The lowercase letter for this role, as used in coordinate promotions.
    pub fn char(&self) -> char
    {
        match self
        {
            | Self::Pawn => 'p',
            | Self::Knight => 'n',
            | Self::Bishop => 'b',
            | Self::Rook => 'r',
            | Self::Queen => 'q',
            | Self::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece standing on the board: who owns it and what it is.
pub struct Piece
{
    pub side: Side,
    pub role: Role,
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let c = match self.side
        {
            | Side::White => self.role.char().to_ascii_uppercase(),
            | Side::Black => self.role.char(),
        };
        write!(f, "{c}")
    }
}
