use crate::prelude::*;

use super::scalars::{CHECKMATE, CHECK_BONUS};

/// A positional bonus per square, laid out as seen from white's side of the board: row 0 is rank 8.
type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

/// Gives the material value of a piece in centipawns.
pub fn piece_value(role: Role) -> i32
{
    match role
    {
        | Role::Pawn => 100,
        | Role::Knight => 320,
        | Role::Bishop => 330,
        | Role::Rook => 500,
        | Role::Queen => 900,
        | Role::King => 20000,
    }
}

/// Gives the positional bonus for a piece standing on a square.
///
/// The tables are written for white; black reads them upside down.
pub fn positional_bonus(piece: Piece, square: Square) -> i32
{
    let table = match piece.role
    {
        | Role::Pawn => &PAWN,
        | Role::Knight => &KNIGHT,
        | Role::Bishop => &BISHOP,
        | Role::Rook => &ROOK,
        | Role::Queen => &QUEEN,
        | Role::King => &KING,
    };

    let row = match piece.side
    {
        | Side::White => 7 - square.rank(),
        | Side::Black => square.rank(),
    };

    table[row as usize][square.file() as usize]
}

/// Returns a score for the position from `perspective`'s point of view.
///
/// Mates and draws are scored first. Everything else is material plus placement, with a nudge against
/// whichever side is in check. The checkmate sign follows the side to move and the check term is not
/// mirrored, so `evaluate(pos, White) != -evaluate(pos, Black)` in general.
pub fn evaluate<R: Rules + ?Sized>(rules: &R, perspective: Side) -> i32
{
    let to_move = rules.side_to_move();

    if rules.is_checkmate()
    {
        return if to_move == perspective { -CHECKMATE } else { CHECKMATE };
    }

    if rules.is_draw() || rules.is_stalemate() || rules.is_threefold_repetition()
    {
        return 0;
    }

    let mut score = 0;
    for square in Square::all()
    {
        let Some(piece) = rules.piece_at(square)
        else
        {
            continue;
        };

        let piece_score = piece_value(piece.role) + positional_bonus(piece, square);
        if piece.side == perspective
        {
            score += piece_score;
        }
        else
        {
            score -= piece_score;
        }
    }

    if rules.in_check()
    {
        score += if to_move == perspective { -CHECK_BONUS } else { CHECK_BONUS };
    }

    score
}
