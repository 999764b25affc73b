use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    /// Coordinate notation: origin, destination, and an optional promotion letter.
    static ref COORDINATES: Regex = Regex::new(r"^(?<from>[a-h][1-8])(?<to>[a-h][1-8])(?<promotion>[nbrq])?$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Represents a syntactically-valid coordinate move, such as `e2e4` or `e7e8q`.
///
/// You can't prove legality of a move string in a vacuum, you need a position.
pub struct MoveString
{
    pub from:      Square,
    pub to:        Square,
    pub promotion: Option<Role>,
}

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = COORDINATES.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let from = caps["from"].parse::<Square>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let to = caps["to"].parse::<Square>().map_err(|err| err.chain_parse::<Self>(s.into()))?;

        if from == to
        {
            let err = Error::new(Kind::ParseError, format!("Origin and destination must differ ({}).", from));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let promotion = match caps.name("promotion")
        {
            | Some(m) => Some(m.as_str().parse::<Role>().map_err(|err| err.chain_parse::<Self>(s.into()))?),
            | None => None,
        };

        Ok(MoveString { from, to, promotion })
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion
        {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A legal move, as reported by a rules collaborator.
///
/// Moves are never built by the engine itself; they only come out of `Rules::legal_moves`.
/// Castling is reported as the king's own step, so `e1g1` rather than `e1h1`.
pub struct Move
{
    pub from:      Square,
    pub to:        Square,
    pub piece:     Role,
    pub captured:  Option<Role>,
    pub promotion: Option<Role>,
    pub san:       String,
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", MoveString::from(self))
    }
}

impl From<&Move> for MoveString
{
    fn from(value: &Move) -> MoveString
    {
        MoveString {
            from:      value.from,
            to:        value.to,
            promotion: value.promotion,
        }
    }
}

impl Move
{
    /// Whether this move promotes a pawn.
    pub fn is_promotion(&self) -> bool
    {
        self.promotion.is_some()
    }

    /// Whether this move is exactly the one the move string describes.
    pub fn matches(&self, s: &MoveString) -> bool
    {
        self.from == s.from && self.to == s.to && self.promotion == s.promotion
    }

    /// Whether this move travels between the given squares, ignoring promotion.
    pub fn travels(&self, from: Square, to: Square) -> bool
    {
        self.from == from && self.to == to
    }
}
