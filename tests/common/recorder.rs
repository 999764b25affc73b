use gambit::prelude::*;

/// Wraps a board and records how the engine drives it.
#[derive(Clone, Debug)]
pub struct Recorder
{
    pub board:     Board,
    pub depth:     usize,
    pub max_depth: usize,
    pub applies:   usize,
    pub undos:     usize,
}

impl Recorder
{
    pub fn new(board: Board) -> Recorder
    {
        Recorder {
            board,
            depth: 0,
            max_depth: 0,
            applies: 0,
            undos: 0,
        }
    }
}

impl Rules for Recorder
{
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move>
    {
        self.board.legal_moves(from)
    }

    fn apply(&mut self, mv: &Move) -> Result<()>
    {
        assert!(self.board.legal_moves(None).contains(mv), "applied {} which is not legal", mv);
        self.board.apply(mv)?;
        self.applies += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(())
    }

    fn undo(&mut self) -> Result<()>
    {
        self.board.undo()?;
        self.undos += 1;
        self.depth -= 1;
        Ok(())
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
