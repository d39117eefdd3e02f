//! Four-in-a-row console
//!
//! Play against the engine on an unbounded board. Moves are typed as `x y`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use fourline::board::Bounds;
use fourline::{Algorithm, Board, Coord, EngineConfig, Game, GameError, Stone};

/// Empty cells shown around the stones.
const PADDING: i32 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play four-in-a-row on an unbounded board", long_about = None)]
struct Args {
    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Move-selection algorithm
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Search depth for alpha-beta
    #[arg(long)]
    depth: Option<u8>,

    /// Time budget per move in milliseconds (iterative deepening)
    #[arg(long)]
    time_ms: Option<u64>,

    /// Monte Carlo playouts per move
    #[arg(long)]
    iterations: Option<u32>,

    /// Your side: 'x' moves first, 'o' second
    #[arg(long, default_value = "x")]
    human: String,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn parse_side(side: &str) -> Result<Stone> {
    match side.to_lowercase().as_str() {
        "x" => Ok(Stone::X),
        "o" => Ok(Stone::O),
        _ => bail!("Invalid side: use 'x' or 'o'"),
    }
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(ms) = args.time_ms {
        config.time_budget_ms = ms;
    }
    if let Some(iterations) = args.iterations {
        config.mc_iterations = iterations;
    }
    config.validate()?;
    Ok(config)
}

/// Text view of the stones' bounding box plus padding, top row first.
/// Empty boards show the 5x5 square around the origin, marked `+`.
fn render(board: &Board) -> String {
    let area = board
        .bounds()
        .unwrap_or_else(|| Bounds::at(Coord::ORIGIN));
    let mut out = String::new();
    let (ys, ye) = (area.min_y.saturating_sub(PADDING), area.max_y.saturating_add(PADDING));
    let (xs, xe) = (area.min_x.saturating_sub(PADDING), area.max_x.saturating_add(PADDING));
    for y in (ys..=ye).rev() {
        for x in xs..=xe {
            let at = Coord::new(x, y);
            let ch = match board.get(at) {
                Stone::Empty if at == Coord::ORIGIN => '+',
                stone => stone.symbol(),
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

enum Command {
    Move(Coord),
    Algorithm(Algorithm),
    Stronger,
    Weaker,
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let cmd = match line {
        "q" | "quit" => Command::Quit,
        "r" | "reset" => Command::Reset,
        "1" => Command::Algorithm(Algorithm::Greedy),
        "2" => Command::Algorithm(Algorithm::AlphaBeta),
        "3" => Command::Algorithm(Algorithm::IterativeDeepening),
        "4" => Command::Algorithm(Algorithm::MonteCarlo),
        "]" => Command::Stronger,
        "[" => Command::Weaker,
        _ => {
            let mut parts = line.split_whitespace();
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            if parts.next().is_some() {
                return None;
            }
            Command::Move(Coord::new(x, y))
        }
    };
    Some(cmd)
}

fn print_status(game: &Game) {
    let config = game.engine().config();
    let strength = match config.algorithm {
        Algorithm::MonteCarlo => format!("iterations {}", config.mc_iterations),
        _ => format!("depth {}", config.max_depth),
    };
    println!(
        "Mode {} ({})   [1-4 switch, [/] strength, r reset, q quit]",
        config.algorithm, strength
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human = parse_side(&args.human)?;
    let config = load_config(&args)?;
    let need = config.run_length;
    let mut game = Game::new(config, human)?;

    println!(
        "Four-in-a-row (console). You play {}, the AI needs {} in a row too.",
        human, need
    );
    println!("Enter moves as: x y");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n{}", render(game.board()));

        if let Some(winner) = game.winner() {
            if winner == human {
                println!("You ({}) win!", winner);
            } else {
                println!("AI ({}) wins!", winner);
            }
            break;
        }

        if !game.is_human_turn() {
            let result = game.ai_move()?;
            println!("AI plays {} at {}", human.opponent(), result.best_move);
            if args.verbose {
                println!(
                    "  {:?}: score {:?}, depth {}, nodes {}, {}ms",
                    result.search_type, result.score, result.depth, result.nodes, result.time_ms
                );
            }
            continue;
        }

        print_status(&game);
        print!("Your move (x y): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Some(Command::Move(at)) => match game.play_human(at) {
                Ok(_) => {}
                Err(GameError::Occupied(_)) => println!("occupied!"),
                Err(e) => println!("{}", e),
            },
            Some(Command::Algorithm(algorithm)) => game.set_algorithm(algorithm),
            Some(Command::Stronger) => game.stronger(),
            Some(Command::Weaker) => game.weaker(),
            Some(Command::Reset) => game.reset(),
            Some(Command::Quit) => break,
            None => println!("bad input"),
        }
    }
    Ok(())
}
