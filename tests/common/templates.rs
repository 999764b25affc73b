use gambit::prelude::*;

/// The standard starting position.
pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// After 1.f3 e5 2.g4, where black mates with Qh4.
pub const FOOLS_MATE_SETUP: &str = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2";

/// After 1.f3 e5 2.g4 Qh4#, white is mated.
pub const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

/// Black to move and stalemated.
pub const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

/// Black is in check from a rook, and nothing else is going on.
pub const ROOK_CHECK: &str = "4k3/8/8/8/8/8/4R3/4K3 b - - 0 1";

/// Six pieces queued up on the d-file to trade on d5.
pub const CAPTURE_CHAIN: &str = "k2r4/3r4/3q4/3n4/8/3Q4/3R4/K2R4 w - - 0 1";

/// A quiet middlegame out of book.
pub const MIDDLEGAME: &str = "r2q1rk1/pp2bppp/2n1pn2/3p4/3P4/2NBPN2/PP3PPP/R2Q1RK1 w - - 4 10";

/// White can take a hanging queen with a knight.
pub const HANGING_QUEEN: &str = "4k3/p7/8/3q4/8/4N3/7P/4K3 w - - 0 1";

/// A locked pawn endgame.
pub const ENDGAME: &str = "8/5k2/3p4/2pP1p2/2P2P2/4K3/8/8 w - - 0 40";

/// White may castle either way.
pub const CASTLING: &str = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";

/// Parses one of the positions above.
pub fn board(fen: &str) -> Board
{
    match fen.parse::<Board>()
    {
        | Ok(board) => board,
        | Err(err) => panic!("bad template {}: {}", fen, err),
    }
}

/// Plays a list of coordinate moves from the standard position.
pub fn line(moves: &[&str]) -> Board
{
    let mut board = Board::default();
    for mv in moves
    {
        let s = mv.parse::<MoveString>().unwrap();
        board.play(&s).unwrap();
    }
    board
}

/// Finds the legal move written in coordinate notation.
pub fn find(rules: &impl Rules, mv: &str) -> Move
{
    let s = mv.parse::<MoveString>().unwrap();
    rules.legal_moves(None).into_iter().find(|m| m.matches(&s)).unwrap()
}

/// An agent with no book, so every choice comes from the search.
pub fn searching_agent() -> Agent<'static, rand::rngs::StdRng>
{
    use rand::SeedableRng;

    lazy_static::lazy_static! {
        static ref EMPTY: Catalogue = Catalogue::new(&[]);
    }

    Agent::new(&EMPTY, rand::rngs::StdRng::seed_from_u64(0))
}
