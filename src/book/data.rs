/// Known positions and the moves worth playing from them, in coordinate notation.
pub(super) const POSITIONS: &[(&str, &[&str])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &["e2e4", "d2d4", "c2c4", "g1f3", "c2c3"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        &["e7e5", "c7c5", "e7e6", "c7c6", "d7d5", "g8f6", "d7d6"],
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
        &["g1f3", "f2f4", "b1c3", "f1c4", "d2d4"],
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
        &["b8c6", "g8f6", "d7d6", "f8c5"],
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        &["f1b5", "f1c4", "d2d4", "b1c3"],
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        &["a7a6", "g8f6", "f8c5", "f7f5"],
    ),
    (
        "r1bqkbnr/1ppp1ppp/p1n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4",
        &["b5a4", "b5c6", "b5e2"],
    ),
    (
        "r1bqkb1r/1ppp1ppp/p1n2n2/4p3/B3P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 5",
        &["e1g1", "d2d3", "b1c3"],
    ),
    (
        "r1bqkb1r/1ppp1ppp/p1n2n2/4p3/B3P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 3 5",
        &["f8e7", "b7b5", "f8c5"],
    ),
    (
        "r1bqk2r/1pppbppp/p1n2n2/4p3/B3P3/5N2/PPPP1PPP/RNBQR1K1 b kq - 4 6",
        &["b7b5", "e8g8", "d7d6"],
    ),
    (
        "r1bqk2r/2p1bppp/p1np1n2/1p2p3/4P3/1B3N2/PPPP1PPP/RNBQR1K1 w kq b6 0 8",
        &["c2c3", "h2h3", "a2a4"],
    ),
    (
        "r1bq1rk1/2p1bppp/p1np1n2/1p2p3/4P3/1BP2N2/PP1P1PPP/RNBQR1K1 w - - 1 9",
        &["h2h3", "d2d4", "a2a4"],
    ),
    (
        "r1bq1rk1/2p1bppp/p1n2n2/1p1pp3/4P3/1BP2N1P/PP1P1PP1/RNBQR1K1 w - d6 0 10",
        &["e4d5", "d2d4"],
    ),
    (
        "r1bqkbnr/1ppp1ppp/p1B5/4p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 0 4",
        &["d7c6", "b7c6"],
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        &["g8f6", "f8c5", "f8e7", "d7d6"],
    ),
    (
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        &["c2c3", "d2d3", "b2b4", "e1g1"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        &["b1c3", "d2d4", "d2d3", "e1g1"],
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq d3 0 3",
        &["e5d4", "g8f6"],
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/8/3pP3/5N2/PPP2PPP/RNBQKB1R w KQkq - 0 4",
        &["f3d4", "f1c4"],
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4PP2/8/PPPP2PP/RNBQKBNR b KQkq f3 0 2",
        &["e5f4", "d7d5", "f8c5"],
    ),
    (
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
        &["g1f3", "b1c3", "c2c3", "f2f4"],
    ),
    (
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
        &["d7d6", "b8c6", "e7e6", "g7g6", "a7a6"],
    ),
    (
        "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3",
        &["d2d4", "f1b5", "c2c3"],
    ),
    (
        "rnbqkbnr/pp2pppp/3p4/8/3pP3/5N2/PPP2PPP/RNBQKB1R w KQkq - 0 4",
        &["f3d4", "d1d4"],
    ),
    (
        "rnbqkbnr/pp2pppp/3p4/8/3NP3/8/PPP2PPP/RNBQKB1R b KQkq - 0 4",
        &["g8f6", "b8c6", "a7a6"],
    ),
    (
        "rnbqkb1r/pp2pppp/3p1n2/8/3NP3/8/PPP2PPP/RNBQKB1R w KQkq - 1 5",
        &["b1c3", "f2f3"],
    ),
    (
        "rnbqkb1r/pp2pppp/3p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq - 2 5",
        &["a7a6", "e7e5", "e7e6", "g7g6"],
    ),
    (
        "rnbqkb1r/1p2pppp/p2p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 0 6",
        &["f1e2", "f2f3", "g2g3", "c1e3"],
    ),
    (
        "rnbqkb1r/pp2pp1p/3p1np1/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 0 6",
        &["c1e3", "f1e2", "f2f3"],
    ),
    (
        "r1bqkb1r/pp1p1ppp/2n2n2/4p3/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq e6 0 6",
        &["d4b5", "d4f5", "d4e2"],
    ),
    (
        "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        &["d2d4", "d2d3", "g1f3", "b1c3"],
    ),
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq d6 0 3",
        &["b1c3", "e4d5", "b1d2", "e4e5"],
    ),
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/2N5/PPP2PPP/R1BQKBNR b KQkq - 1 3",
        &["g8f6", "d5e4", "f8b4"],
    ),
    (
        "rnbqkb1r/ppp2ppp/4pn2/3p4/3PP3/2N5/PPP2PPP/R1BQKBNR w KQkq - 2 4",
        &["c1g5", "e4e5", "f1d3"],
    ),
    (
        "rnbqkbnr/pp1ppppp/2p5/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        &["d2d4", "b1c3", "g1f3", "d2d3"],
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq d6 0 3",
        &["b1c3", "e4d5", "e4e5", "b1d2"],
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3p4/3PP3/2N5/PPP2PPP/R1BQKBNR b KQkq - 1 3",
        &["d5e4", "g8f6", "b8d7"],
    ),
    (
        "rnbqkbnr/ppp1pppp/3p4/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        &["d2d4", "g1f3", "b1c3"],
    ),
    (
        "rnbqkb1r/ppp1pppp/3p1n2/8/3PP3/8/PPP2PPP/RNBQKBNR w KQkq - 1 3",
        &["b1c3", "f2f3", "f1d3"],
    ),
    (
        "rnbqkb1r/ppp1pp1p/3p1np1/8/3PP3/2N5/PPP2PPP/R1BQKBNR w KQkq - 0 4",
        &["f2f4", "f1e2", "g1f3", "c1e3"],
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
        &["e4d5", "b1c3"],
    ),
    (
        "rnb1kbnr/ppp1pppp/8/3q4/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3",
        &["b1c3", "g1f3", "d2d4"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1",
        &["d7d5", "g8f6", "e7e6", "f7f5", "d7d6"],
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq d6 0 2",
        &["c2c4", "g1f3", "e2e3", "b1c3"],
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR b KQkq c3 0 2",
        &["e7e6", "c7c6", "d5c4", "g8f6"],
    ),
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/2PP4/8/PP2PPPP/RNBQKBNR w KQkq - 0 3",
        &["b1c3", "g1f3", "c1f4"],
    ),
    (
        "rnbqkb1r/ppp2ppp/4pn2/3p4/2PP4/2N5/PP2PPPP/R1BQKBNR w KQkq - 1 4",
        &["c1g5", "g1f3", "c4d5"],
    ),
    (
        "rnbqkb1r/ppp2ppp/4pn2/3p2B1/2PP4/2N5/PP2PPPP/R2QKBNR b KQkq - 2 4",
        &["f8e7", "b8d7", "f8b4"],
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3p4/2PP4/8/PP2PPPP/RNBQKBNR w KQkq - 0 3",
        &["g1f3", "b1c3", "c4d5"],
    ),
    (
        "rnbqkb1r/pp2pppp/2p2n2/3p4/2PP4/5N2/PP2PPPP/RNBQKB1R w KQkq - 1 4",
        &["b1c3", "e2e3", "c4d5"],
    ),
    (
        "rnbqkbnr/ppp1pppp/8/8/2pP4/8/PP2PPPP/RNBQKBNR w KQkq - 0 3",
        &["g1f3", "e2e4", "e2e3"],
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 1 2",
        &["c2c4", "g1f3", "b1c3"],
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/2PP4/8/PP2PPPP/RNBQKBNR b KQkq - 0 2",
        &["e7e6", "g7g6", "c7c5", "d7d5", "e7e5"],
    ),
    (
        "rnbqk2r/pppp1ppp/4pn2/8/1bPP4/2N5/PP2PPPP/R1BQKBNR w KQkq - 2 4",
        &["e2e3", "d1c2", "g1f3", "c1d2"],
    ),
    (
        "rnbqkb1r/pppppp1p/5np1/8/2PP4/8/PP2PPPP/RNBQKBNR w KQkq - 0 3",
        &["b1c3", "g1f3", "g2g3"],
    ),
    (
        "rnbqk2r/ppppppbp/5np1/8/2PP4/2N5/PP2PPPP/R1BQKBNR w KQkq - 1 4",
        &["e2e4", "g1f3", "f2f3"],
    ),
    (
        "rnbqk2r/ppp1ppbp/3p1np1/8/2PPP3/2N5/PP3PPP/R1BQKBNR w KQkq - 0 5",
        &["g1f3", "f2f3", "f1e2"],
    ),
    (
        "rnbqkb1r/p1pppppp/1p3n2/8/2PP4/5N2/PP2PPPP/RNBQKB1R w KQkq - 0 4",
        &["g2g3", "e2e3", "b1c3"],
    ),
    (
        "rnbqkb1r/ppp1pp1p/6p1/3p1n2/2PP4/2N5/PP2PPPP/R1BQKBNR w KQkq d6 0 4",
        &["c4d5", "c1f4", "g1f3"],
    ),
    (
        "rnbqkb1r/pp1ppppp/5n2/2pP4/2P5/8/PP2PPPP/RNBQKBNR b KQkq - 0 3",
        &["b7b5", "e7e6", "d7d6"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR b KQkq - 0 1",
        &["e7e5", "g8f6", "c7c5", "e7e6", "c7c6"],
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/2P5/8/PP1PPPPP/RNBQKBNR w KQkq e6 0 2",
        &["b1c3", "g1f3", "g2g3"],
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/2P5/8/PP1PPPPP/RNBQKBNR w KQkq - 1 2",
        &["b1c3", "g1f3", "g2g3"],
    ),
    (
        "rnbqkb1r/pppp1ppp/5n2/4p3/2P5/2N5/PP1PPPPP/R1BQKBNR w KQkq e6 0 3",
        &["g1f3", "g2g3", "e2e4"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1",
        &["d7d5", "g8f6", "c7c5", "e7e6"],
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/8/5N2/PPPPPPPP/RNBQKB1R w KQkq d6 0 2",
        &["c2c4", "g2g3", "d2d4"],
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 2 2",
        &["c2c4", "g2g3", "d2d4"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/5P2/8/PPPPP1PP/RNBQKBNR b KQkq f3 0 1",
        &["d7d5", "g8f6", "e7e5"],
    ),
    (
        "rnbqkb1r/pppp1ppp/4pn2/8/2PP4/6P1/PP2PP1P/RNBQKBNR b KQkq - 0 3",
        &["d7d5", "f8b4", "c7c5"],
    ),
    (
        "rnbqkb1r/ppp1pppp/5n2/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R b KQkq - 2 3",
        &["c7c5", "e7e6", "c7c6", "g7g6"],
    ),
    (
        "rnbqkb1r/pppp1ppp/4pn2/6B1/3P4/5N2/PPP1PPPP/RN1QKB1R b KQkq - 2 3",
        &["c7c5", "f8e7", "h7h6", "d7d5"],
    ),
    (
        "rnbqkb1r/pppppppp/5n2/6B1/3P4/8/PPP1PPPP/RN1QKBNR b KQkq - 2 2",
        &["e7e6", "d7d5", "c7c5", "g7g6"],
    ),
    (
        "rnbqkb1r/1p2pppp/p2p1n2/8/3NP3/2N5/PPP1BPPP/R1BQK2R b KQkq - 1 6",
        &["e7e5", "e7e6", "g7g6"],
    ),
    (
        "rnbqkb1r/1p2pppp/p2p1n2/8/3NP3/2N1B3/PPP2PPP/R2QKB1R b KQkq - 1 6",
        &["e7e5", "e7e6", "g7g6"],
    ),
    (
        "r1bqkbnr/pp1ppppp/2n3p1/8/3NP3/8/PPP2PPP/RNBQKB1R w KQkq - 0 5",
        &["c2c4", "b1c3", "c1e3"],
    ),
    (
        "r1bqkb1r/1p1ppppp/p1n2n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 0 6",
        &["f1e2", "g2g3", "f2f4"],
    ),
    (
        "r1b1kb1r/1pqppppp/p1n2n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 1 6",
        &["f1e2", "f2f4", "g2g3"],
    ),
    (
        "rnbqkb1r/1p3ppp/p2ppn2/8/3NP3/2N5/PPP1BPPP/R1BQK2R w KQkq - 0 7",
        &["e1g1", "f2f4", "c1e3"],
    ),
    (
        "r2q1rk1/1bp1bppp/p1np1n2/1p2p3/4P3/1BP2N1P/PP1P1PP1/RNBQR1K1 w - - 2 10",
        &["d2d4", "d2d3", "a2a4"],
    ),
    (
        "r1bq1rk1/1p2bppp/p2p1n2/n1p1p3/4P3/1BP2N1P/PP1P1PP1/RNBQR1K1 w - c6 0 11",
        &["d2d4", "d2d3", "a2a4"],
    ),
    (
        "r1bqkb1r/1ppp1ppp/p1n5/4p3/B2Pn3/5N2/PPP2PPP/RNBQR1K1 w kq - 0 6",
        &["b1c3", "d4d5", "a4b3"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        &["e1g1", "d2d3", "b5c6"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n5/1B2p3/4n3/5N2/PPPP1PPP/RNBQ1RK1 w kq - 0 5",
        &["d2d4", "f1e1", "b1c3"],
    ),
    (
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/2P2N2/PP1P1PPP/RNBQK2R b KQkq - 0 4",
        &["g8f6", "d7d6", "d8e7"],
    ),
    (
        "r1bqk1nr/pppp1ppp/2n2n2/2b1p3/2BPP3/2P2N2/PP3PPP/RNBQK2R b KQkq d3 0 5",
        &["e5d4", "c5b4"],
    ),
    (
        "r1bqk1nr/pppp1ppp/2n2n2/2b5/2BPP3/5N2/PP3PPP/RNBQK2R b KQkq - 0 6",
        &["c5b4", "c5b6", "d7d5"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p1N1/2B1P3/8/PPPP1PPP/RNBQK2R b KQkq - 5 4",
        &["d7d5", "f8c5", "b7b5"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2BPP3/5N2/PPP2PPP/RNBQK2R b KQkq d3 0 4",
        &["e5d4", "f6e4"],
    ),
    (
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/1PB1P3/5N2/P1PP1PPP/RNBQK2R b KQkq b3 0 4",
        &["c5b4", "c5b6"],
    ),
    (
        "rnbqk1nr/ppp2ppp/4p3/3p4/1b1PP3/2N5/PPP2PPP/R1BQKBNR w KQkq - 1 4",
        &["e4e5", "c1d2", "a2a3"],
    ),
    (
        "rnbqk1nr/pp3ppp/4p3/2ppp3/1b1PP3/2N5/PPP2PPP/R1BQKBNR w KQkq c6 0 5",
        &["a2a3", "d1g4", "c1d2"],
    ),
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPPN1PPP/R1BQKBNR b KQkq - 1 3",
        &["c7c5", "g8f6", "b8c6"],
    ),
    (
        "rnbqkbnr/ppp2ppp/4p3/3pP3/3P4/8/PPP2PPP/RNBQKBNR b KQkq - 0 3",
        &["c7c5", "b8c6", "g8e7"],
    ),
    (
        "rnbqkbnr/pp3ppp/4p3/2ppP3/3P4/2P5/PP3PPP/RNBQKBNR b KQkq - 0 4",
        &["b8c6", "d8b6", "g8e7"],
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3pP3/3P4/8/PPP2PPP/RNBQKBNR b KQkq - 0 3",
        &["c8f5", "g8h6", "d8b6"],
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3p4/3PN3/8/PPP2PPP/R1BQKBNR b KQkq - 0 4",
        &["c8f5", "g8f6", "b8d7"],
    ),
    (
        "rn1qkbnr/pp2pppp/2p5/3p1b2/3P4/6N1/PPP2PPP/R1BQKBNR w KQkq - 1 5",
        &["h2h4", "g1f3", "f1d3"],
    ),
    (
        "rnbqkbnr/pp2pppp/8/3p4/2PP4/8/PP3PPP/RNBQKBNR b KQkq c3 0 4",
        &["g8f6", "b8c6", "e7e6"],
    ),
    (
        "rnbqk2r/ppp1bppp/4pn2/3p2B1/2PP4/2N5/PP2PPPP/R2QKBNR w KQkq - 3 5",
        &["g1f3", "e2e3", "d1c2"],
    ),
    (
        "rnbq1rk1/ppp1bppp/4pn2/3p2B1/2PP4/2N1P3/PP3PPP/R2QKBNR w KQ - 4 6",
        &["g1f3", "f1d3", "d1c2"],
    ),
    (
        "r1bqk2r/ppp2ppp/2n1pn2/3p4/1bPP4/2N2N2/PP2PPPP/R1BQKB1R w KQkq - 3 5",
        &["c1g5", "c4d5", "d1a4"],
    ),
    (
        "rnbqkb1r/pp2pppp/2p2n2/8/2pP4/2N2N2/PP2PPPP/R1BQKB1R w KQkq - 0 5",
        &["a2a4", "e2e3", "e2e4"],
    ),
    (
        "rnbqkb1r/pp3ppp/2p1pn2/3p4/2PP4/2N1PN2/PP3PPP/R1BQKB1R b KQkq - 0 5",
        &["b8d7", "f8d6", "a7a6"],
    ),
    (
        "r1bqkb1r/pp1n1ppp/2p1pn2/8/2pP4/2NBPN2/PP3PPP/R1BQK2R w KQkq - 0 7",
        &["d3c4", "a2a4", "e1g1"],
    ),
    (
        "rnbqkb1r/ppp1pppp/5n2/8/2pP4/5N2/PP2PPPP/RNBQKB1R w KQkq - 1 4",
        &["e2e3", "b1c3", "d4d5"],
    ),
    (
        "rnbq1rk1/ppp1ppbp/3p1np1/8/2PPP3/2N2N2/PP3PPP/R1BQKB1R w KQ - 1 6",
        &["f1e2", "h2h3", "g2g3"],
    ),
    (
        "rnbq1rk1/ppp2pbp/3p1np1/4p3/2PPP3/2N2N2/PP2BPPP/R1BQK2R w KQ e6 0 7",
        &["e1g1", "d4d5", "c1e3"],
    ),
    (
        "r1bq1rk1/ppp2pbp/2np1np1/4p3/2PPP3/2N2N2/PP2BPPP/R1BQ1RK1 w - - 2 8",
        &["d4d5", "d4e5", "c1e3"],
    ),
    (
        "rnbq1rk1/ppp1ppbp/3p1np1/8/2PPP3/2N2P2/PP4PP/R1BQKBNR b KQ - 0 6",
        &["c7c5", "b8c6", "e7e5"],
    ),
    (
        "rnbqk2r/ppp1ppbp/3p1np1/8/2PPP1P1/2N5/PP3P1P/R1BQKBNR b KQkq f3 0 6",
        &["c7c5", "e8g8", "b8c6"],
    ),
    (
        "rnbqk2r/pppp1ppp/4pn2/8/1bPP4/2N5/PPQ1PPPP/R1B1KBNR b KQkq - 2 4",
        &["e8g8", "c7c5", "d7d5"],
    ),
    (
        "rnbq1rk1/pppp1ppp/4pn2/8/1bPP4/2N1P3/PP3PPP/R1BQKBNR w KQ - 1 5",
        &["f1d3", "g1e2", "g1f3"],
    ),
    (
        "rnbqk2r/pppp1ppp/4pn2/8/2PP4/P1P5/5PPP/R1BQKBNR b KQkq - 0 5",
        &["c7c5", "e8g8", "d7d5"],
    ),
    (
        "rnbqk2r/pppp1ppp/4pn2/6B1/1bPP4/2N5/PP2PPPP/R2QKBNR b KQkq - 3 4",
        &["h7h6", "c7c5", "e8g8"],
    ),
    (
        "rnbqkb1r/ppp1pp1p/6p1/3n4/3PP3/2N5/PP3PPP/R1BQKBNR w KQkq - 0 5",
        &["f1c4", "c1e3", "g1f3"],
    ),
    (
        "rnbqk2r/ppp1ppbp/6p1/8/3PP3/2P5/P4PPP/R1BQKBNR w KQkq - 1 7",
        &["f1c4", "g1f3", "c1e3"],
    ),
    (
        "rnbqk2r/ppp1ppbp/6p1/3p1n2/2PP4/2N2N2/PP2PPPP/R1BQKB1R w KQkq - 2 5",
        &["d1b3", "c4d5", "c1f4"],
    ),
    (
        "r1bqkbnr/pp1ppppp/2n5/2p5/2P5/2N5/PP1PPPPP/R1BQKBNR w KQkq - 2 3",
        &["g2g3", "g1f3", "e2e3"],
    ),
    (
        "r1bqk1nr/pp1pppbp/2n3p1/2p5/2P5/2N3P1/PP1PPP1P/R1BQKBNR w KQkq - 2 5",
        &["g1f3", "e2e3", "d2d3"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2P5/2N2N2/PP1PPPPP/R1BQKB1R w KQkq - 4 4",
        &["g2g3", "e2e3", "d2d4"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2P5/2N2NP1/PP1PPP1P/R1BQKB1R b KQkq - 0 4",
        &["f8c5", "d7d5", "f8b4"],
    ),
    (
        "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        &["f3e5", "d2d4", "b1c3"],
    ),
    (
        "rnbqkb1r/ppp2ppp/3p1n2/4N3/4P3/8/PPPP1PPP/RNBQKB1R w KQkq - 0 4",
        &["e5f3", "d2d4", "e5c4"],
    ),
    (
        "rnbqkb1r/ppp2ppp/3p4/8/4n3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 5",
        &["d2d4", "d1e2", "f1d3"],
    ),
    (
        "rnbqkb1r/pppppppp/8/3nP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 1 3",
        &["d2d4", "c2c4", "b1c3"],
    ),
    (
        "rnbqkb1r/ppp1pppp/1n1p4/4P3/2PP1P2/8/PP4PP/RNBQKBNR b KQkq f3 0 5",
        &["d6e5", "c8f5", "b8c6"],
    ),
    (
        "rnbqkbnr/ppppp1pp/8/5p2/3P4/8/PPP1PPPP/RNBQKBNR w KQkq f6 0 2",
        &["g2g3", "c2c4", "g1f3"],
    ),
    (
        "rnbqkb1r/ppppp2p/5np1/5p2/3P4/6P1/PPP1PP1P/RNBQKBNR w KQkq - 0 4",
        &["g1f3", "c2c4", "b1c3"],
    ),
    (
        "rnbqkb1r/ppp3pp/4pn2/3p1p2/2PP4/5NP1/PP2PP1P/RNBQKB1R w KQkq d6 0 5",
        &["f1g2", "b2b3", "b1c3"],
    ),
    (
        "rnbqkb1r/pp1p1ppp/5n2/2pP4/2P5/2N5/PP2PPPP/R1BQKBNR w KQkq - 0 5",
        &["e2e4", "g1f3"],
    ),
    (
        "rnbqkb1r/pp3ppp/3p1n2/2pP4/4P3/2N5/PP3PPP/R1BQKBNR b KQkq e3 0 6",
        &["g7g6", "b8d7", "f8e7"],
    ),
    (
        "rnbqk2r/pppp1ppp/4pn2/8/1bPP4/5N2/PP2PPPP/RNBQKB1R w KQkq - 2 4",
        &["b1d2", "c1d2", "f3d2"],
    ),
    (
        "rn1qkb1r/pbpppppp/1p3n2/8/2PP4/5NP1/PP2PP1P/RNBQKB1R w KQkq - 1 5",
        &["b2b3", "d1a4", "f1g2"],
    ),
    (
        "rn1qkb1r/p1pppppp/bp3n2/8/2PP4/1P3NP1/P3PP1P/RNBQKB1R b KQkq - 0 5",
        &["d7d5", "c7c5", "b8c6"],
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/8/3NP3/8/PPP2PPP/RNBQKB1R w KQkq - 2 5",
        &["d4c6", "b1c3", "f1d3"],
    ),
    (
        "r1bqkb1r/p1pp1ppp/2p2n2/4P3/8/8/PPP2PPP/RNBQKB1R b KQkq - 0 6",
        &["d8e7", "f6d5", "f6e4"],
    ),
    (
        "r1bqk2r/pppp1ppp/2n2n2/8/1b1NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 3 6",
        &["d4c6", "f1d3", "c1g5"],
    ),
];
