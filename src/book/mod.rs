use std::collections::HashMap;

use itertools::Itertools;
use lazy_static::lazy_static;

use crate::prelude::*;

mod data;
pub mod openings;

lazy_static! {
    static ref STANDARD: Catalogue = Catalogue::new(data::POSITIONS);
}

/// The catalogue of well-known opening positions, built on first use.
pub fn standard() -> &'static Catalogue
{
    &STANDARD
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Size of a catalogue.
pub struct CatalogueStats
{
    pub positions: usize,
    pub moves:     usize,
    pub average:   f64,
}

impl std::fmt::Display for CatalogueStats
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} positions, {} moves, {:.1} moves per position", self.positions, self.moves, self.average)
    }
}

#[derive(Clone, Debug, Default)]
/// Maps opening positions to the moves worth playing from them.
///
/// Positions are keyed on placement, side to move and castling rights only. Whatever a key carries past
/// those three fields is ignored on the way in and on the way out.
pub struct Catalogue
{
    map: HashMap<String, Vec<MoveString>>,
}

impl Catalogue
{
    /// Whether the position is in book.
    pub fn contains(&self, key: &str) -> bool
    {
        self.map.contains_key(&Self::normalize(key))
    }

    /// The candidate moves for a position, if it is in book. Never empty.
    pub fn get(&self, key: &str) -> Option<&[MoveString]>
    {
        self.map.get(&Self::normalize(key)).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool
    {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    /// Builds a catalogue from position encodings and their candidate moves in coordinate notation.
    ///
    /// Unreadable moves are skipped, and positions left without any candidate are dropped.
    pub fn new(positions: &[(&str, &[&str])]) -> Catalogue
    {
        let mut map: HashMap<String, Vec<MoveString>> = HashMap::new();

        for (key, moves) in positions
        {
            let candidates = moves.iter().filter_map(|s| match s.parse::<MoveString>()
            {
                | Ok(mv) => Some(mv),
                | Err(err) =>
                {
                    log::warn!("Skipping book move for {}: {}", key, err);
                    None
                }
            });

            let entry = map.entry(Self::normalize(key)).or_default();
            let merged = entry.iter().copied().chain(candidates).unique().collect::<Vec<_>>();
            *entry = merged;
        }

        map.retain(|key, candidates| {
            if candidates.is_empty()
            {
                log::warn!("Dropping book position {} with no usable moves.", key);
            }
            !candidates.is_empty()
        });

        log::trace!("Loaded an opening catalogue with {} positions.", map.len());
        Catalogue { map }
    }

    /// Reduces a position encoding to the fields the catalogue keys on.
    pub fn normalize(key: &str) -> String
    {
        key.split_whitespace().take(3).join(" ")
    }

    /// Summarises the size of the catalogue.
    pub fn stats(&self) -> CatalogueStats
    {
        let positions = self.map.len();
        let moves = self.map.values().map(Vec::len).sum::<usize>();
        let average = if positions == 0 { 0.0 } else { moves as f64 / positions as f64 };

        CatalogueStats { positions, moves, average }
    }
}
