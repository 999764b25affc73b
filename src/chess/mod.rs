mod board;
mod notation;
mod piece;
mod rules;
mod square;

pub use board::{Board, History};
pub use notation::{Move, MoveString};
pub use piece::{Piece, Role, Side};
pub use rules::{Played, Rules};
pub use square::Square;
