#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A named opening and the moves, in SAN, that define it.
pub struct Opening
{
    pub name:  &'static str,
    pub moves: &'static [&'static str],
}

/// Named openings, roughly grouped by first move. Later, longer lines refine earlier ones.
pub const OPENINGS: &[Opening] = &[
    Opening {
        name:  "Ruy Lopez",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5"],
    },
    Opening {
        name:  "Ruy Lopez: Berlin Defense",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "Nf6"],
    },
    Opening {
        name:  "Ruy Lopez: Morphy Defense",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6"],
    },
    Opening {
        name:  "Ruy Lopez: Exchange Variation",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6"],
    },
    Opening {
        name:  "Ruy Lopez: Closed",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7"],
    },
    Opening {
        name:  "Ruy Lopez: Marshall Attack",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7", "Re1", "b5", "Bb3", "O-O", "c3", "d5"],
    },
    Opening {
        name:  "Italian Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4"],
    },
    Opening {
        name:  "Giuoco Piano",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"],
    },
    Opening {
        name:  "Italian Game: Two Knights Defense",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6"],
    },
    Opening {
        name:  "Fried Liver Attack",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5", "d5", "exd5", "Nxd5", "Nxf7"],
    },
    Opening {
        name:  "Evans Gambit",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "b4"],
    },
    Opening {
        name:  "Scotch Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "d4"],
    },
    Opening {
        name:  "Scotch Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "d4", "exd4"],
    },
    Opening {
        name:  "Petrov's Defense",
        moves: &["e4", "e5", "Nf3", "Nf6"],
    },
    Opening {
        name:  "King's Gambit",
        moves: &["e4", "e5", "f4"],
    },
    Opening {
        name:  "King's Gambit Accepted",
        moves: &["e4", "e5", "f4", "exf4"],
    },
    Opening {
        name:  "King's Gambit Declined",
        moves: &["e4", "e5", "f4", "Bc5"],
    },
    Opening {
        name:  "Sicilian Defense",
        moves: &["e4", "c5"],
    },
    Opening {
        name:  "Sicilian: Open",
        moves: &["e4", "c5", "Nf3", "d6", "d4"],
    },
    Opening {
        name:  "Sicilian: Najdorf",
        moves: &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6"],
    },
    Opening {
        name:  "Sicilian: Dragon",
        moves: &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "g6"],
    },
    Opening {
        name:  "Sicilian: Sveshnikov",
        moves: &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "e5"],
    },
    Opening {
        name:  "Sicilian: Accelerated Dragon",
        moves: &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "g6"],
    },
    Opening {
        name:  "Sicilian: Closed",
        moves: &["e4", "c5", "Nc3"],
    },
    Opening {
        name:  "Sicilian: Alapin",
        moves: &["e4", "c5", "c3"],
    },
    Opening {
        name:  "French Defense",
        moves: &["e4", "e6"],
    },
    Opening {
        name:  "French Defense",
        moves: &["e4", "e6", "d4", "d5"],
    },
    Opening {
        name:  "French: Winawer",
        moves: &["e4", "e6", "d4", "d5", "Nc3", "Bb4"],
    },
    Opening {
        name:  "French: Tarrasch",
        moves: &["e4", "e6", "d4", "d5", "Nd2"],
    },
    Opening {
        name:  "French: Advance",
        moves: &["e4", "e6", "d4", "d5", "e5"],
    },
    Opening {
        name:  "Caro-Kann Defense",
        moves: &["e4", "c6"],
    },
    Opening {
        name:  "Caro-Kann",
        moves: &["e4", "c6", "d4", "d5"],
    },
    Opening {
        name:  "Caro-Kann: Classical",
        moves: &["e4", "c6", "d4", "d5", "Nc3", "dxe4", "Nxe4"],
    },
    Opening {
        name:  "Caro-Kann: Advance",
        moves: &["e4", "c6", "d4", "d5", "e5"],
    },
    Opening {
        name:  "Caro-Kann: Panov Attack",
        moves: &["e4", "c6", "d4", "d5", "exd5", "cxd5", "c4"],
    },
    Opening {
        name:  "Pirc Defense",
        moves: &["e4", "d6"],
    },
    Opening {
        name:  "Pirc Defense",
        moves: &["e4", "d6", "d4", "Nf6", "Nc3", "g6"],
    },
    Opening {
        name:  "Modern Defense",
        moves: &["e4", "g6"],
    },
    Opening {
        name:  "Scandinavian Defense",
        moves: &["e4", "d5"],
    },
    Opening {
        name:  "Alekhine's Defense",
        moves: &["e4", "Nf6"],
    },
    Opening {
        name:  "Queen's Gambit",
        moves: &["d4", "d5", "c4"],
    },
    Opening {
        name:  "Queen's Gambit Declined",
        moves: &["d4", "d5", "c4", "e6"],
    },
    Opening {
        name:  "Queen's Gambit Accepted",
        moves: &["d4", "d5", "c4", "dxc4"],
    },
    Opening {
        name:  "Slav Defense",
        moves: &["d4", "d5", "c4", "c6"],
    },
    Opening {
        name:  "Semi-Slav Defense",
        moves: &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3", "e6"],
    },
    Opening {
        name:  "King's Indian Defense",
        moves: &["d4", "Nf6", "c4", "g6"],
    },
    Opening {
        name:  "King's Indian",
        moves: &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6"],
    },
    Opening {
        name:  "Grunfeld Defense",
        moves: &["d4", "Nf6", "c4", "g6", "Nc3", "d5"],
    },
    Opening {
        name:  "Nimzo-Indian Defense",
        moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4"],
    },
    Opening {
        name:  "Queen's Indian Defense",
        moves: &["d4", "Nf6", "c4", "e6", "Nf3", "b6"],
    },
    Opening {
        name:  "Bogo-Indian Defense",
        moves: &["d4", "Nf6", "c4", "e6", "Nf3", "Bb4+"],
    },
    Opening {
        name:  "Benoni Defense",
        moves: &["d4", "Nf6", "c4", "c5"],
    },
    Opening {
        name:  "Modern Benoni",
        moves: &["d4", "Nf6", "c4", "c5", "d5"],
    },
    Opening {
        name:  "Dutch Defense",
        moves: &["d4", "f5"],
    },
    Opening {
        name:  "London System",
        moves: &["d4", "Nf6", "Nf3", "d5", "Bf4"],
    },
    Opening {
        name:  "Torre Attack",
        moves: &["d4", "Nf6", "Nf3", "e6", "Bg5"],
    },
    Opening {
        name:  "Trompowsky Attack",
        moves: &["d4", "Nf6", "Bg5"],
    },
    Opening {
        name:  "Catalan Opening",
        moves: &["d4", "Nf6", "c4", "e6", "g3"],
    },
    Opening {
        name:  "English Opening",
        moves: &["c4"],
    },
    Opening {
        name:  "English: Symmetrical",
        moves: &["c4", "c5"],
    },
    Opening {
        name:  "English: Reversed Sicilian",
        moves: &["c4", "e5"],
    },
    Opening {
        name:  "Reti Opening",
        moves: &["Nf3"],
    },
    Opening {
        name:  "Reti: King's Indian Attack",
        moves: &["Nf3", "d5", "g3"],
    },
    Opening {
        name:  "Bird's Opening",
        moves: &["f4"],
    },
    Opening {
        name:  "Polish Opening",
        moves: &["b4"],
    },
    Opening {
        name:  "Hungarian Opening",
        moves: &["g3"],
    },
    Opening {
        name:  "Vienna Game",
        moves: &["e4", "e5", "Nc3"],
    },
    Opening {
        name:  "Four Knights Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "Nc3", "Nf6"],
    },
    Opening {
        name:  "Philidor Defense",
        moves: &["e4", "e5", "Nf3", "d6"],
    },
    Opening {
        name:  "Elephant Gambit",
        moves: &["e4", "e5", "Nf3", "d5"],
    },
    Opening {
        name:  "Latvian Gambit",
        moves: &["e4", "e5", "Nf3", "f5"],
    },
];

/// Suffixes dropped from opening names when space is tight.
const SUFFIXES: [&str; 6] = [": Classical", ": Main Line", " Opening", " Game", " Defense", " Variation"];

/// Strips check and mate marks so `Bb4+` and `Bb4` compare equal.
fn bare(san: &str) -> &str
{
    san.trim_end_matches(['+', '#'])
}

/// Whether the opening's moves are the first moves of the game.
fn prefixes(opening: &Opening, history: &[&str]) -> bool
{
    opening.moves.len() <= history.len() && opening.moves.iter().zip(history).all(|(a, b)| bare(a) == bare(b))
}

/// Names the opening of a game from its moves in SAN.
///
/// The longest matching line wins, the earliest listed among equals. Games off the list get a generic
/// name from their first moves.
pub fn detect(history: &[&str]) -> &'static str
{
    let Some(first) = history.first().map(|san| bare(san))
    else
    {
        return "Starting Position";
    };

    let best = OPENINGS.iter().filter(|opening| prefixes(opening, history)).fold(None::<&Opening>, |best, opening| {
        match best
        {
            | Some(best) if best.moves.len() >= opening.moves.len() => Some(best),
            | _ => Some(opening),
        }
    });

    if let Some(opening) = best
    {
        return opening.name;
    }

    if history.len() == 1
    {
        return match first
        {
            | "e4" => "King's Pawn Opening",
            | "d4" => "Queen's Pawn Opening",
            | "c4" => "English Opening",
            | "Nf3" => "Reti Opening",
            | _ => "Uncommon Opening",
        };
    }

    match first
    {
        | "e4" if bare(history[1]) == "e5" => "King's Pawn Game",
        | "e4" => "King's Pawn Opening",
        | "d4" => "Queen's Pawn Opening",
        | _ => "Custom Opening",
    }
}

/// A shorter form of the detected name, for narrow displays.
pub fn short_name(history: &[&str]) -> String
{
    SUFFIXES.iter().fold(detect(history).to_string(), |name, suffix| name.replacen(suffix, "", 1))
}
