mod common;
use common::*;

#[cfg(test)]
mod protocol
{
    use std::io::Cursor;

    use clap::Parser;

    use super::*;
    use gambit::prelude::*;

    fn server() -> Server
    {
        Server::new(ServerOptions::parse_from(["gambit", "--seed", "7", "--difficulty", "easy"]))
    }

    fn run(server: &mut Server, script: &str) -> String
    {
        let mut out = Vec::new();
        server.serve(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn options_parse()
    {
        let _setup = setup::setup();
        let options = ServerOptions::parse_from(["gambit"]);
        assert_eq!(options.log_level, "info");
        assert_eq!(options.difficulty, Difficulty::Medium);
        assert_eq!(options.seed, None);

        let options = ServerOptions::parse_from(["gambit", "-d", "hard", "-s", "3", "-l", "debug"]);
        assert_eq!(options.difficulty, Difficulty::Hard);
        assert_eq!(options.seed, Some(3));
        assert_eq!(options.log_level, "debug");

        assert!(ServerOptions::try_parse_from(["gambit", "--difficulty", "impossible"]).is_err());
    }

    #[test]
    fn info()
    {
        let _setup = setup::setup();
        let out = run(&mut server(), "info\n");
        assert_eq!(out, format!("id gambit v{}\nok\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn play_and_undo()
    {
        let _setup = setup::setup();
        let mut server = server();
        let out = run(&mut server, "play e2e4\nplay e7e5\nundo 2\n");
        assert_eq!(
            out,
            [
                "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
                "ok",
                "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
                "ok",
                templates::START,
                "ok",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn recoverable_errors_keep_serving()
    {
        let _setup = setup::setup();
        let mut server = server();
        let out = run(&mut server, "play e2e5\nundo\nfly\nplay\nundo x\nnewgame nonsense\ninfo\n");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.iter().filter(|line| **line == "err").count(), 6);
        assert!(lines.iter().any(|line| line.starts_with("IllegalMove")));
        assert!(lines.iter().any(|line| line.starts_with("NothingToUndo")));
        assert!(lines.iter().any(|line| line.starts_with("UnrecognizedCommand")));
        assert!(lines.iter().any(|line| line.starts_with("InvalidPosition")));
        assert_eq!(lines[lines.len() - 2], format!("id gambit v{}", env!("CARGO_PKG_VERSION")));
        assert_eq!(lines.last(), Some(&"ok"));
    }

    #[test]
    fn newgame_from_fen()
    {
        let _setup = setup::setup();
        let mut server = server();
        let out = run(&mut server, &format!("newgame {}\nvalidmoves\nnewgame\n", templates::FOOLS_MATE));
        assert_eq!(out, format!("{}\nok\n\nok\n{}\nok\n", templates::FOOLS_MATE, templates::START));
    }

    #[test]
    fn validmoves_at_start()
    {
        let _setup = setup::setup();
        let out = run(&mut server(), "validmoves\n");
        let moves = out.lines().next().unwrap().split(';').collect::<Vec<_>>();
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&"e2e4"));
        assert!(moves.contains(&"g1f3"));
    }

    #[test]
    fn bestmove()
    {
        let _setup = setup::setup();
        let mut server = server();

        let out = run(&mut server, "bestmove\n");
        let mv = out.lines().next().unwrap();
        assert!(["e2e4", "d2d4", "c2c4", "g1f3", "c2c3"].contains(&mv));

        let out = run(&mut server, &format!("newgame {}\nbestmove medium\n", templates::FOOLS_MATE_SETUP));
        assert!(out.contains("\nd8h4\nok\n"));

        let out = run(&mut server, &format!("newgame {}\nbestmove hard\n", templates::FOOLS_MATE));
        assert!(out.ends_with("\nnone\nok\n"));

        let out = run(&mut server, "bestmove brutal\n");
        assert!(out.starts_with("err\n"));
    }

    #[test]
    fn difficulty()
    {
        let _setup = setup::setup();
        let mut server = server();
        assert_eq!(run(&mut server, "difficulty HARD\n"), "hard\nok\n");
        assert!(run(&mut server, "difficulty\n").starts_with("err\n"));
        assert!(run(&mut server, "difficulty 9\n").starts_with("err\n"));
    }

    #[test]
    fn opening_and_book()
    {
        let _setup = setup::setup();
        let mut server = server();

        assert_eq!(run(&mut server, "opening\n"), "Starting Position\nok\n");
        assert_eq!(run(&mut server, "book\n"), "true\n137 positions, 437 moves, 3.2 moves per position\nok\n");

        let out = run(&mut server, "play e2e4\nplay c7c5\nopening\n");
        assert!(out.ends_with("Sicilian Defense\nok\n"));

        let out = run(&mut server, &format!("newgame {}\nbook\n", templates::MIDDLEGAME));
        assert!(out.contains("\nfalse\n"));
    }

    #[test]
    fn blank_lines_are_ignored()
    {
        let _setup = setup::setup();
        assert_eq!(run(&mut server(), "\n   \ninfo\n"), format!("id gambit v{}\nok\n", env!("CARGO_PKG_VERSION")));
    }
}
