use gambit::prelude::*;

/// Wraps a board whose rules turn down some number of otherwise legal moves.
#[derive(Clone, Debug)]
pub struct Refusing
{
    pub board:   Board,
    /// How many more applies to refuse. `None` refuses every one.
    pub refuse:  Option<usize>,
    pub refused: usize,
}

impl Refusing
{
    /// Refuses the next `count` applies, then plays normally.
    pub fn next(board: Board, count: usize) -> Refusing
    {
        Refusing {
            board,
            refuse: Some(count),
            refused: 0,
        }
    }

    /// Refuses every apply.
    pub fn always(board: Board) -> Refusing
    {
        Refusing {
            board,
            refuse: None,
            refused: 0,
        }
    }
}

impl Rules for Refusing
{
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move>
    {
        self.board.legal_moves(from)
    }

    fn apply(&mut self, mv: &Move) -> Result<()>
    {
        let refuse = match self.refuse.as_mut()
        {
            | None => true,
            | Some(0) => false,
            | Some(count) =>
            {
                *count -= 1;
                true
            }
        };

        if refuse
        {
            self.refused += 1;
            return Err(Error::new(Kind::IllegalMove, format!("{} was refused.", mv)));
        }

        self.board.apply(mv)
    }

    fn undo(&mut self) -> Result<()>
    {
        self.board.undo()
    }

    fn side_to_move(&self) -> Side
    {
        self.board.side_to_move()
    }

    fn is_checkmate(&self) -> bool
    {
        self.board.is_checkmate()
    }

    fn is_stalemate(&self) -> bool
    {
        self.board.is_stalemate()
    }

    fn is_threefold_repetition(&self) -> bool
    {
        self.board.is_threefold_repetition()
    }

    fn is_draw(&self) -> bool
    {
        self.board.is_draw()
    }

    fn in_check(&self) -> bool
    {
        self.board.in_check()
    }

    fn position_key(&self) -> String
    {
        self.board.position_key()
    }

    fn piece_at(&self, square: Square) -> Option<Piece>
    {
        self.board.piece_at(square)
    }
}
