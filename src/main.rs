use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::warn;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_minimax::{
    arena,
    board::Color,
    config::AppConfig,
    session::{Game, GameState},
};

#[derive(Parser, Debug)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax opponent")]
struct Args {
    /// TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game (the default)
    Play {
        /// Plies searched by the computer
        #[arg(long)]
        depth: Option<usize>,

        /// Side played by the computer
        #[arg(long, value_enum)]
        computer: Option<Side>,

        /// Side that moves first
        #[arg(long, value_enum)]
        first: Option<Side>,

        /// Starting position as 1-indexed column digits, e.g. 4453
        #[arg(long, default_value = "")]
        moves: String,
    },
    /// Play two search depths against each other from every short opening
    Arena {
        #[arg(long, default_value_t = 4)]
        depth_one: usize,

        #[arg(long, default_value_t = 2)]
        depth_two: usize,

        /// Plies of each enumerated opening
        #[arg(long)]
        opening_plies: Option<usize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Yellow,
    Red,
    None,
}

impl Side {
    fn color(self) -> Option<Color> {
        match self {
            Side::Yellow => Some(Color::Yellow),
            Side::Red => Some(Color::Red),
            Side::None => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config)?;

    match args.command {
        Some(Command::Arena {
            depth_one,
            depth_two,
            opening_plies,
        }) => {
            if let Some(plies) = opening_plies {
                config.arena.opening_plies = plies;
            }
            config.validate()?;
            let report = arena::run(depth_one, depth_two, config.arena.opening_plies, false)?;
            println!(
                "Depth {} vs depth {}: {} games, {} wins, {} losses, {} draws ({:.1} points)",
                depth_one,
                depth_two,
                report.games,
                report.wins,
                report.losses,
                report.draws,
                report.points()
            );
            Ok(())
        }
        Some(Command::Play {
            depth,
            computer,
            first,
            moves,
        }) => {
            if let Some(depth) = depth {
                config.search.depth = depth;
            }
            if let Some(side) = computer {
                config.game.computer = side.color();
            }
            if let Some(side) = first {
                match side.color() {
                    Some(color) => config.game.first = color,
                    None => warn!("ignoring --first none"),
                }
            }
            config.validate()?;
            play(&config, &moves)
        }
        None => {
            config.validate()?;
            play(&config, "")
        }
    }
}

fn play(config: &AppConfig, moves: &str) -> Result<()> {
    let mut game = Game::from_moves(
        moves,
        config.game.first,
        config.game.computer,
        config.search.depth,
    )?;
    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    match game.computer() {
        Some(color) => println!("The computer plays {}", color.name()),
        None => println!("Two players, no computer"),
    }
    println!("Enter a column (1-7), 'u' to undo, 'r' to restart or 'q' to quit\n");

    // game loop
    loop {
        game.display()?;

        if game.computer_to_move() {
            println!("Computer is thinking...");
            stdout().flush()?;

            let (slot, result) = game.play_computer()?;
            if let Some(plies) = result.plies_to_decision(game.depth()) {
                let turns = (plies + 1) / 2;
                let move_string = if turns == 1 { "move" } else { "moves" };
                if result.is_forced_win() {
                    println!("Computer can force a win in at most {} {}.", turns, move_string);
                } else {
                    println!("You can force a win in at most {} {}.", turns, move_string);
                }
            }
            println!("Computer plays: {}", slot.column + 1);
            continue;
        }

        match game.state() {
            GameState::Playing => print!("Move input > "),
            _ => print!("Game over: 'u' to undo, 'r' to restart or 'q' to quit > "),
        }
        stdout().flush()?;

        let mut input_str = String::new();
        if stdin.read_line(&mut input_str)? == 0 {
            break;
        }

        match input_str.trim() {
            "q" => break,
            "u" => {
                game.undo_turn();
            }
            "r" => game.restart(),
            input => match input.parse::<usize>() {
                Err(_) => println!("Invalid input: {}", input),
                Ok(column) => {
                    if let Err(err) = game.play_checked(column) {
                        println!("{}", err);
                    }
                }
            },
        }
    }
    Ok(())
}
