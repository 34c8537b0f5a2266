// Command-line stand-in for a clickable board
//
// Type square names (like `e2`) to activate squares, one of `q`, `r`, `b`, `n` to choose the
// promotion, `hint` to list the moves of the selected figure, `reset` to start over and `quit`
// to exit. Run with `--utf8` to draw the board with chess symbols, and set `RUST_LOG=debug`
// to see what the engine does.

use log::info;
use std::env;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tabula::{board::PrettyStyle, Coord, Event, Game, Phase, Piece};

fn print_events(events: &[Event]) {
    for e in events {
        println!("  {}", e);
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let style = if env::args().skip(1).any(|a| a == "--utf8") {
        PrettyStyle::Utf8
    } else {
        PrettyStyle::Ascii
    };
    info!("starting with style {:?}", style);

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut game = Game::new_initial();

    loop {
        println!("{}", game.pretty(style));
        match game.phase() {
            Phase::GameOver(outcome) => println!("{}. Type `reset` or `quit`.", outcome),
            Phase::AwaitingPromotion(at) => println!("Promote on {} (q/r/b/n): ", at),
            Phase::Selected(at) => println!("{} to move, {} selected: ", game.side().name(), at),
            Phase::Idle => println!("{} to move: ", game.side().name()),
        }
        print!("> ");
        io::stdout().flush()?;

        let mut s = String::new();
        if stdin.read_line(&mut s)? == 0 {
            break;
        }
        let s = s.trim();

        match s {
            "" => continue,
            "quit" => break,
            "reset" => {
                game.reset();
                println!("New game");
            }
            "hint" => match game.selected() {
                Some(at) => {
                    let dsts: Vec<_> = game.destinations(at).iter().map(|c| c.to_string()).collect();
                    println!("  {} may go to: {}", at, dsts.join(" "));
                }
                None => println!("  Select a figure first"),
            },
            "q" | "r" | "b" | "n" => {
                let (at, piece) = match (game.pending_promotion(), s.chars().next()) {
                    (Some(at), Some(ch)) => (at, Piece::from_char(ch)),
                    _ => {
                        println!("  No promotion is pending");
                        continue;
                    }
                };
                let piece = match piece {
                    Some(p) => p,
                    None => continue,
                };
                match game.resolve_promotion(at, piece) {
                    Ok(events) => print_events(&events),
                    Err(e) => println!("  Cannot promote: {}", e),
                }
            }
            _ => match Coord::from_str(s) {
                Ok(at) => print_events(&game.square_activated(at)),
                Err(e) => println!("  Bad square {:?}: {}", s, e),
            },
        }
        println!();
    }

    Ok(())
}
