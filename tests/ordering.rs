mod common;
use common::*;

#[cfg(test)]
mod ordering
{
    use super::*;
    use gambit::prelude::*;

    fn mv(from: &str, to: &str, piece: Role, captured: Option<Role>, promotion: Option<Role>) -> Move
    {
        Move {
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
            piece,
            captured,
            promotion,
            san: format!("{from}{to}"),
        }
    }

    #[test]
    fn priorities()
    {
        let _setup = setup::setup();
        assert_eq!(gambit::agent::ordering::priority(&mv("e2", "e3", Role::Pawn, None, None)), 0);
        assert_eq!(gambit::agent::ordering::priority(&mv("e4", "d5", Role::Pawn, Some(Role::Queen), None)), 8900);
        assert_eq!(gambit::agent::ordering::priority(&mv("d1", "d5", Role::Queen, Some(Role::Pawn), None)), 100);
        assert_eq!(gambit::agent::ordering::priority(&mv("a7", "a8", Role::Pawn, None, Some(Role::Queen))), 800);
        assert_eq!(gambit::agent::ordering::priority(&mv("a7", "b8", Role::Pawn, Some(Role::Rook), Some(Role::Queen))), 5700);
    }

    #[test]
    fn most_valuable_victim_first_and_quiet_moves_stable()
    {
        let _setup = setup::setup();
        let quiet_a = mv("g1", "f3", Role::Knight, None, None);
        let quiet_b = mv("b1", "c3", Role::Knight, None, None);
        let quiet_c = mv("e2", "e4", Role::Pawn, None, None);
        let pxq = mv("e4", "d5", Role::Pawn, Some(Role::Queen), None);
        let qxp = mv("d1", "d5", Role::Queen, Some(Role::Pawn), None);
        let promote = mv("a7", "a8", Role::Pawn, None, Some(Role::Queen));

        let ordered = gambit::agent::ordering::order(vec![
            quiet_a.clone(),
            qxp.clone(),
            quiet_b.clone(),
            promote.clone(),
            quiet_c.clone(),
            pxq.clone(),
        ]);
        assert_eq!(ordered, vec![pxq, promote, qxp, quiet_a, quiet_b, quiet_c]);
    }

    #[test]
    fn captures_only()
    {
        let _setup = setup::setup();
        let nxr = mv("c3", "d5", Role::Knight, Some(Role::Rook), None);
        let pxn = mv("e4", "f5", Role::Pawn, Some(Role::Knight), None);
        let qxq = mv("d1", "d8", Role::Queen, Some(Role::Queen), None);
        let quiet = mv("g1", "f3", Role::Knight, None, None);

        let captures = gambit::agent::ordering::captures(vec![pxn.clone(), quiet, nxr.clone(), qxq.clone()]);
        assert_eq!(captures, vec![qxq, nxr, pxn]);
    }

    #[test]
    fn real_position_puts_the_queen_capture_first()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::HANGING_QUEEN);
        let ordered = gambit::agent::ordering::order(board.legal_moves(None));
        assert_eq!(ordered[0].to_string(), "e3d5");
        assert_eq!(ordered[0].captured, Some(Role::Queen));
    }
}
