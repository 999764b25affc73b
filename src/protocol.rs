use std::io::{BufRead, Write};

use clap::Parser;
use itertools::Itertools;
use rand::rngs::StdRng;

use crate::{book, prelude::*};

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value = "medium")]
    /// search difficulty used when bestmove names none (easy, medium, hard)
    pub difficulty: Difficulty,

    #[arg(short, long)]
    /// seed for choosing between book moves
    pub seed: Option<u64>,
}

/// A line-based front end: reads one command per line and answers each with its output and `ok`.
pub struct Server
{
    #[allow(unused)]
    options:    ServerOptions,
    board:      Board,
    agent:      Agent<'static, StdRng>,
    difficulty: Difficulty,
}

impl Server
{
    /// Creates a new server on the standard start position.
    pub fn new(options: ServerOptions) -> Self
    {
        Server {
            board:      Board::default(),
            agent:      Agent::standard(options.seed),
            difficulty: options.difficulty,
            options,
        }
    }

    /// Serves commands from stdin until it closes or something fatal happens.
    pub fn run(&mut self) -> Result<()>
    {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.serve(stdin.lock(), &mut stdout)
    }

    /// Serves every line of `input`, writing responses to `out`.
    pub fn serve<I: BufRead, W: Write>(&mut self, input: I, out: &mut W) -> Result<()>
    {
        for line in input.lines()
        {
            self.execute(&line?, out)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Runs a single command line. Only fatal errors come back out; the rest are reported on the stream.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = args.split_first()
        else
        {
            return Ok(());
        };

        let result = match cmd
        {
            | "bestmove" => self.best_move(args, out),
            | "book" => self.book(out),
            | "difficulty" => self.set_difficulty(args, out),
            | "info" => self.info(out),
            | "newgame" => self.new_game(args, out),
            | "opening" => self.opening(out),
            | "play" => self.play_move(args, out),
            | "undo" => self.undo(args, out),
            | "validmoves" => self.valid_moves(out),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                Self::ok(out)
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = Self::err(&err, out);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    Self::err(&err, out)
                }
            },
        }
    }
}

impl Server
{
    /// Asks the agent for a move in the current position.
    fn best_move<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<()>
    {
        let difficulty = match args.first()
        {
            | Some(s) => s.parse::<Difficulty>()?,
            | None => self.difficulty,
        };

        match self.agent.select_move(&mut self.board, difficulty.into())
        {
            | Some(mv) => writeln!(out, "{}", mv)?,
            | None => writeln!(out, "none")?,
        };
        Ok(())
    }

    /// Reports whether the position is in book, and how big the book is.
    fn book<W: Write>(&self, out: &mut W) -> Result<()>
    {
        let catalogue = book::standard();
        writeln!(out, "{}", catalogue.contains(&self.board.position_key()))?;
        writeln!(out, "{}", catalogue.stats())?;
        Ok(())
    }

    /// Prints an error to the stream.
    fn err<W: Write>(err: &Error, out: &mut W) -> Result<()>
    {
        writeln!(out, "err\n{}", err)?;
        Self::ok(out)
    }

    /// Prints the server's ID.
    fn info<W: Write>(&self, out: &mut W) -> Result<()>
    {
        writeln!(out, "id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }

    /// Starts over from the standard position, or from the given FEN.
    fn new_game<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<()>
    {
        self.board = match args.is_empty()
        {
            | true => Board::default(),
            | false => args.join(" ").parse::<Board>()?,
        };

        writeln!(out, "{}", self.board)?;
        Ok(())
    }

    /// Prints the ok footer to the stream.
    fn ok<W: Write>(out: &mut W) -> Result<()>
    {
        writeln!(out, "ok")?;
        Ok(())
    }

    /// Names the opening played so far.
    fn opening<W: Write>(&self, out: &mut W) -> Result<()>
    {
        writeln!(out, "{}", openings::detect(&self.board.history().sans()))?;
        Ok(())
    }

    /// Plays the given move on the board.
    fn play_move<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<()>
    {
        let Some(s) = args.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide a MoveString.".into()));
        };

        let mv = self.board.play(&s.parse::<MoveString>()?)?;
        log::debug!("played {}", mv.san);

        writeln!(out, "{}", self.board)?;
        Ok(())
    }

    /// Changes the difficulty used when bestmove is not given one.
    fn set_difficulty<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<()>
    {
        let Some(s) = args.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide a Difficulty.".into()));
        };

        self.difficulty = s.parse::<Difficulty>()?;
        writeln!(out, "{}", self.difficulty)?;
        Ok(())
    }

    /// Undoes the given number of moves.
    fn undo<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<()>
    {
        let n = match args.first()
        {
            | Some(s) => s.parse::<usize>().map_err(|_| Error::for_parse::<usize>((*s).into()))?,
            | None => 1,
        };

        self.board.undo_many(n)?;

        writeln!(out, "{}", self.board)?;
        Ok(())
    }

    /// Gets all of the valid moves in this position.
    fn valid_moves<W: Write>(&self, out: &mut W) -> Result<()>
    {
        let movelist = self.board.legal_moves(None).iter().map(|mv| mv.to_string()).join(";");
        writeln!(out, "{}", movelist)?;
        Ok(())
    }
}
