mod common;
use common::*;

#[cfg(test)]
mod table
{
    use super::*;
    use gambit::prelude::*;

    const KEY: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

    #[test]
    fn exact_entries_answer_at_or_below_their_depth()
    {
        let _setup = setup::setup();
        let mut table = TranspositionTable::new();
        table.store(KEY.into(), TTEntry::new(42, 2, TTBound::Exact, None));

        assert_eq!(table.check(KEY, 1, -100, 100), Some(42));
        assert_eq!(table.check(KEY, 2, -100, 100), Some(42));
        assert_eq!(table.check(KEY, 3, -100, 100), None);
        assert_eq!(table.check("missing", 0, -100, 100), None);
    }

    #[test]
    fn lower_bounds_only_answer_fail_highs()
    {
        let _setup = setup::setup();
        let mut table = TranspositionTable::new();
        table.store(KEY.into(), TTEntry::new(60, 1, TTBound::Lower, None));

        assert_eq!(table.check(KEY, 1, 0, 50), Some(50));
        assert_eq!(table.check(KEY, 1, 0, 60), Some(60));
        assert_eq!(table.check(KEY, 1, 0, 70), None);
    }

    #[test]
    fn upper_bounds_only_answer_fail_lows()
    {
        let _setup = setup::setup();
        let mut table = TranspositionTable::new();
        table.store(KEY.into(), TTEntry::new(-20, 1, TTBound::Upper, None));

        assert_eq!(table.check(KEY, 1, -10, 50), Some(-10));
        assert_eq!(table.check(KEY, 1, -20, 50), Some(-20));
        assert_eq!(table.check(KEY, 1, -30, 50), None);
    }

    #[test]
    fn replacement_prefers_depth_then_exactness()
    {
        let _setup = setup::setup();
        let board = Board::default();
        let e4 = templates::find(&board, "e2e4");

        let mut table = TranspositionTable::new();
        table.store(KEY.into(), TTEntry::new(10, 2, TTBound::Lower, Some(e4.clone())));

        table.store(KEY.into(), TTEntry::new(20, 1, TTBound::Upper, None));
        assert_eq!(table.get(KEY).map(|entry| entry.score), Some(10));

        table.store(KEY.into(), TTEntry::new(30, 1, TTBound::Exact, None));
        let entry = table.get(KEY).unwrap();
        assert_eq!((entry.score, entry.depth, entry.bound), (30, 1, TTBound::Exact));
        assert_eq!(table.suggestion(KEY), Some(&e4));

        table.store(KEY.into(), TTEntry::new(40, 1, TTBound::Upper, None));
        assert_eq!(table.get(KEY).map(|entry| entry.score), Some(40));

        assert_eq!(table.len(), 1);
        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn classify_against_window()
    {
        let _setup = setup::setup();
        assert_eq!(TTBound::classify(-5, -5, 5), TTBound::Upper);
        assert_eq!(TTBound::classify(5, -5, 5), TTBound::Lower);
        assert_eq!(TTBound::classify(0, -5, 5), TTBound::Exact);
    }
}
