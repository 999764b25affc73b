use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A square on the board, indexed `a1 = 0`, `b1 = 1`, ... through `h8 = 63`.
pub struct Square(u8);

impl Square
{
    /// The number of squares on a board.
    pub const COUNT: u8 = 64;

    /// Iterates every square from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square>
    {
        (0 .. Self::COUNT).map(Square)
    }

    /// Constructs a square from its 0-indexed file and rank, if both are on the board.
    pub fn at(file: u8, rank: u8) -> Option<Square>
    {
        (file < 8 && rank < 8).then_some(Square(rank * 8 + file))
    }

    /// The 0-indexed file, where `a` is 0.
    pub fn file(&self) -> u8
    {
        self.0 % 8
    }

    /// Gets the square from its index, if it is on the board.
    pub fn from_index(index: u8) -> Option<Square>
    {
        (index < Self::COUNT).then_some(Square(index))
    }

    /// The index of this square.
    pub fn index(&self) -> u8
    {
        self.0
    }

    /// The 0-indexed rank, where rank 1 is 0.
    pub fn rank(&self) -> u8
    {
        self.0 / 8
    }
}

impl std::fmt::Display for Square
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let &[file, rank] = s.as_bytes()
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        if !(b'a' ..= b'h').contains(&file) || !(b'1' ..= b'8').contains(&rank)
        {
            return Err(Error::for_parse::<Self>(s.into()));
        }

        Ok(Square((rank - b'1') * 8 + (file - b'a')))
    }
}
