//! Thin CLI adapter over the core library: parses argv, builds a `Skewb`, and prints results.
//! None of this is part of the specified core -- see `skewb_solver::search`.

use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};

use skewb_solver::{Move, Skewb, SkewbSolutionTable};

#[derive(Parser)]
#[command(name = "skewb-solver", about = "Optimal BFS solver for the Skewb puzzle")]
struct Cli {
    /// Suppress per-layer progress output during generation.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the full solution table and report its size and God's number.
    Generate,
    /// Apply a scramble (space-separated move symbols) to solved, then print the optimal solve.
    Solve {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Solve a scramble drawn at random.
    Random {
        /// Number of random moves to scramble with.
        #[arg(long, default_value_t = 30)]
        length: usize,
        /// Seed for reproducible scrambles.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_moves(raw: &[String]) -> Result<Vec<Move>, String> {
    raw.iter().map(|s| s.parse::<Move>()).collect()
}

/// Draws a random scramble of `length` elementary moves, never immediately repeating the
/// previous move (a repeat is either a wasted no-op pair or collapses to a single other move, so
/// it is not a "true" length-`length` scramble).
fn random_scramble(rng: &mut impl Rng, length: usize) -> Vec<Move> {
    let mut scramble = Vec::with_capacity(length);
    let mut last = Move::Identity;

    while scramble.len() < length {
        let candidate = Move::ELEMENTARY[rng.gen_range(0..Move::ELEMENTARY.len())];
        if candidate == last {
            continue;
        }
        last = candidate;
        scramble.push(candidate);
    }

    scramble
}

fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" ")
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let table = SkewbSolutionTable::generate_with_progress(cli.quiet);
            println!("reachable states: {}", table.len());
            println!("God's number: {}", table.max_depth());
            if !cli.quiet {
                table.print_depth_summary();
            }
        }
        Command::Solve { moves } => {
            let moves = match parse_moves(&moves) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };

            let mut state = Skewb::solved();
            for &m in &moves {
                state.apply(m);
            }
            println!("scrambled state: {state}");

            let table = SkewbSolutionTable::generate_with_progress(cli.quiet);
            match table.solve_state(&state) {
                Ok(solution) => println!("solution: {}", format_moves(&solution)),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Random { length, seed } => {
            let mut rng = match seed {
                Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
                None => rand::rngs::StdRng::from_entropy(),
            };

            let scramble = random_scramble(&mut rng, length);
            let mut state = Skewb::solved();
            for &m in &scramble {
                state.apply(m);
            }

            println!("scramble: {}", format_moves(&scramble));
            println!("scrambled state: {state}");

            let table = SkewbSolutionTable::generate_with_progress(cli.quiet);
            match table.solve_state(&state) {
                Ok(solution) => println!("solution: {}", format_moves(&solution)),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
