use std::io::BufRead;
use std::io::Write;
use std::io::{stdin, stdout};

use clap::arg;
use clap::command;
use clap::Command;
use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing_subscriber::EnvFilter;

use atomchess::{ChessField, Game, Move, Outcome};

fn main() {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(Command::new("play").about("Play a game on the terminal"))
        .subcommand(
            Command::new("demo")
                .about("Let two random players blast away at each other")
                .arg(
                    arg!(
                        -s --seed <SEED> "Seed for the random players"
                    )
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                        -m --moves <n> "Maximum number of halfmoves"
                    )
                    .default_value("200")
                    .value_parser(clap::value_parser!(usize)),
                ),
        )
        .get_matches();

    let default_level = if matches.get_flag("debug") { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match matches.subcommand() {
        Some(("play", _)) => {
            play_on_terminal();
        }
        Some(("demo", arg_matches)) => {
            let seed = arg_matches.get_one::<u64>("seed").copied();
            let max_moves = *arg_matches.get_one::<usize>("moves").unwrap();
            random_self_play(seed, max_moves);
        }
        None => {
            play_on_terminal();
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn play_on_terminal() {
    let mut game = Game::new();
    println!("{}", game.board());
    prompt(&game);

    for line in stdin().lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => continue,
        };
        if line.is_empty() {
            prompt(&game);
            continue;
        }
        if line == "quit" {
            return;
        }

        match parse_move_input(&line) {
            Some(mv) => match game.apply_move(mv) {
                Ok(()) => println!("{}", game.board()),
                Err(err) => println!("rejected: {}", err),
            },
            None => println!("could not read '{}', expected something like e2e4", line),
        }

        if let Outcome::Won(color) = game.outcome() {
            println!("{} wins by explosion!", color);
            return;
        }
        prompt(&game);
    }
}

fn prompt(game: &Game) {
    print!("{} to move> ", game.active_color());
    stdout().flush().unwrap();
}

/// Accepts "e2e4" as well as "e2 e4".
fn parse_move_input(input: &str) -> Option<Move> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [mv] => Move::from_algebraic(mv).ok(),
        [from, to] => {
            let from = ChessField::from_algebraic(from).ok()?;
            let to = ChessField::from_algebraic(to).ok()?;
            Some(Move::new(from, to))
        }
        _ => None,
    }
}

fn random_self_play(seed: Option<u64>, max_moves: usize) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = Pcg64::seed_from_u64(seed);
    println!("Random self-play with seed {}", seed);

    let mut game = Game::new();
    let mut halfmoves = 0;
    while halfmoves < max_moves {
        let moves = game.legal_moves();
        let mv = match moves.choose(&mut rng) {
            Some(mv) => *mv,
            None => {
                println!("{} has no moves left", game.active_color());
                break;
            }
        };
        let mover = game.active_color();
        game.apply_move(mv).expect("a legal move must apply");
        halfmoves += 1;
        println!("{:3}. {} {}", halfmoves, mover, mv.as_algebraic());
        if game.outcome() != Outcome::Unfinished {
            break;
        }
    }

    println!("{}", game.board());
    match game.outcome() {
        Outcome::Won(color) => println!("{} wins by explosion!", color),
        Outcome::Unfinished => println!("No decision after {} halfmoves", halfmoves),
    }
}
