mod common;
use common::*;

#[cfg(test)]
mod openings
{
    use gambit::book::openings::{detect, short_name};

    use super::*;

    fn name(moves: &[&str]) -> &'static str
    {
        let board = templates::line(moves);
        detect(&board.history().sans())
    }

    #[test]
    fn fallbacks()
    {
        let _setup = setup::setup();
        assert_eq!(detect(&[]), "Starting Position");
        assert_eq!(name(&["e2e4"]), "King's Pawn Opening");
        assert_eq!(name(&["d2d4"]), "Queen's Pawn Opening");
        assert_eq!(name(&["a2a3"]), "Uncommon Opening");
        assert_eq!(name(&["e2e4", "e7e5"]), "King's Pawn Game");
        assert_eq!(name(&["e2e4", "a7a6"]), "King's Pawn Opening");
        assert_eq!(name(&["d2d4", "a7a6"]), "Queen's Pawn Opening");
        assert_eq!(name(&["a2a3", "a7a6"]), "Custom Opening");
    }

    #[test]
    fn named_lines()
    {
        let _setup = setup::setup();
        assert_eq!(name(&["c2c4"]), "English Opening");
        assert_eq!(name(&["g1f3"]), "Reti Opening");
        assert_eq!(name(&["e2e4", "c7c5"]), "Sicilian Defense");
        assert_eq!(name(&["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"]), "Ruy Lopez");
        assert_eq!(name(&["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6"]), "Ruy Lopez: Morphy Defense");
        assert_eq!(name(&["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5a4", "g8f6", "e1g1", "f8e7"]), "Ruy Lopez: Closed");
    }

    #[test]
    fn longest_match_wins_and_extra_moves_are_fine()
    {
        let _setup = setup::setup();
        assert_eq!(name(&["e2e4", "e7e6", "d2d4", "d7d5"]), "French Defense");
        assert_eq!(name(&["e2e4", "e7e6", "d2d4", "d7d5", "e4e5", "c7c5"]), "French: Advance");
        assert_eq!(name(&["e2e4", "e7e5", "g1f3", "b8c6", "d2d4"]), "Scotch Game");
    }

    #[test]
    fn check_marks_are_ignored()
    {
        let _setup = setup::setup();
        assert_eq!(detect(&["d4", "Nf6", "c4", "e6", "Nf3", "Bb4+"]), "Bogo-Indian Defense");
        assert_eq!(detect(&["d4", "Nf6", "c4", "e6", "Nf3", "Bb4"]), "Bogo-Indian Defense");
        assert_eq!(name(&["d2d4", "g8f6", "c2c4", "e7e6", "g1f3", "f8b4"]), "Bogo-Indian Defense");
    }

    #[test]
    fn short_names()
    {
        let _setup = setup::setup();
        assert_eq!(short_name(&["e4", "c5"]), "Sicilian");
        assert_eq!(short_name(&["e4", "e5", "Nf3", "Nc6", "Bc4"]), "Italian");
        assert_eq!(short_name(&["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6"]), "Ruy Lopez: Exchange");
        assert_eq!(short_name(&["e4", "c6", "d4", "d5", "Nc3", "dxe4", "Nxe4"]), "Caro-Kann");
    }
}
