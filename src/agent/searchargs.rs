use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// How hard the agent tries. Each level searches to a fixed depth and never plays randomly outside the book.
pub enum Difficulty
{
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty
{
    /// The full-width search depth for this level, in plies.
    pub fn depth(&self) -> u8
    {
        match self
        {
            | Self::Easy => 1,
            | Self::Medium => 2,
            | Self::Hard => 3,
        }
    }
}

impl std::fmt::Display for Difficulty
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Easy => "easy",
            | Self::Medium => "medium",
            | Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s.to_ascii_lowercase().as_str()
        {
            | "easy" | "1" => Ok(Self::Easy),
            | "medium" | "2" => Ok(Self::Medium),
            | "hard" | "3" => Ok(Self::Hard),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Options that hold for the whole of one move computation.
pub struct SearchConfig
{
    pub difficulty:       Difficulty,
    pub max_depth:        u8,
    pub quiescence_depth: u8,
}

impl From<Difficulty> for SearchConfig
{
    fn from(difficulty: Difficulty) -> Self
    {
        SearchConfig {
            difficulty,
            max_depth: difficulty.depth(),
            quiescence_depth: scalars::QUIESCENCE_DEPTH,
        }
    }
}

impl Default for SearchConfig
{
    fn default() -> Self
    {
        Difficulty::default().into()
    }
}
