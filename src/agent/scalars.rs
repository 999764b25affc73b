/// The score of a position in which the side to move has been mated, negated.
pub const CHECKMATE: i32 = 999_999;

/// Bound for the search window. Comfortably outside any real score and safe to negate.
pub const INF: i32 = 1_000_000_000;

/// Swing applied by the evaluator when the side to move is in check.
pub const CHECK_BONUS: i32 = 50;

/// Extra bonus given to promotions by the move orderer.
pub const PROMOTION_BONUS: i32 = 800;

/// How many plies of captures the quiescence search may add past the horizon.
pub const QUIESCENCE_DEPTH: u8 = 3;

/// The maximum length of a reported principal variation.
pub const MAXIMUM_PLY: usize = 16;
