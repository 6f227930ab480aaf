//! Sliding Puzzle Solver
//!
//! Scrambles an N×N sliding-tile board into a solvable state and prints an
//! optimal solution one move at a time.

use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use slider_puzzle::puzzle::{MAX_SIZE, MIN_SIZE};
use slider_puzzle::solver::SOLVER_SIZE_CEILING;
use slider_puzzle::{
    is_solvable, shuffle_solvable_with, solve_with, Grid, Move, PuzzleError, SearchStats,
    DEFAULT_SHUFFLE_STEPS,
};

/// Board sizes offered by the level menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    fn size(self) -> usize {
        match self {
            Level::Easy => 3,
            Level::Medium => 5,
            Level::Hard => 8,
        }
    }
}

/// Scrambles and solves N×N sliding-tile puzzles.
#[derive(Parser)]
#[command(name = "slider-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Board size, overrides --level
    #[arg(short, long, global = true, value_parser = parse_size)]
    size: Option<usize>,

    /// Difficulty level: easy is 3x3, medium 5x5, hard 8x8
    #[arg(value_enum, short, long, global = true, default_value_t = Level::Easy)]
    level: Level,

    /// Number of random moves used to scramble the board
    #[arg(long, global = true, default_value_t = DEFAULT_SHUFFLE_STEPS)]
    steps: usize,

    /// Seed for a reproducible scramble
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Give up after expanding this many states
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Give up after this many seconds of searching
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print a solvable scramble.
    Shuffle,
    /// Report whether a board can reach the goal.
    Check {
        /// Rows separated by '/', e.g. "1 2 3/4 5 0/7 8 6"
        #[arg(short, long)]
        grid: Grid,
    },
    /// Solve a board, or a fresh scramble when no board is given.
    Solve {
        /// Rows separated by '/', e.g. "1 2 3/4 5 0/7 8 6"
        #[arg(short, long)]
        grid: Option<Grid>,
    },
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be in range {MIN_SIZE}..={MAX_SIZE}"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let result = match &cli.command {
        Some(Command::Shuffle) => run_shuffle(&cli),
        Some(Command::Check { grid }) => run_check(grid),
        Some(Command::Solve { grid }) => run_solve(&cli, grid.clone()),
        // default: scramble and solve
        None => run_solve(&cli, None),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds a solvable scramble from the size, level, steps and seed options.
fn scramble(cli: &Cli) -> Grid {
    let size = cli.size.unwrap_or(cli.level.size());
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("Scrambling a {size}x{size} board with {} moves", cli.steps);
    shuffle_solvable_with(size, cli.steps, &mut rng)
}

fn run_shuffle(cli: &Cli) -> Result<bool, PuzzleError> {
    print!("{}", scramble(cli));
    Ok(true)
}

fn run_check(grid: &Grid) -> Result<bool, PuzzleError> {
    let solvable = is_solvable(grid);
    if solvable {
        println!("solvable");
    } else {
        println!("not solvable");
    }
    Ok(solvable)
}

/// Solves `grid`, or a fresh scramble, and prints every intermediate board.
fn run_solve(cli: &Cli, grid: Option<Grid>) -> Result<bool, PuzzleError> {
    let start = match grid {
        Some(grid) => grid,
        None => {
            let start = scramble(cli);
            println!("Initial Puzzle:\n{}", Grid::goal(start.size()));
            start
        }
    };
    println!("Shuffled Puzzle:\n{}", start);

    if start.size() > SOLVER_SIZE_CEILING && cli.max_expansions.is_none() && cli.timeout_secs.is_none()
    {
        eprintln!(
            "Warning: boards larger than {SOLVER_SIZE_CEILING}x{SOLVER_SIZE_CEILING} may not \
             finish; consider --max-expansions or --timeout-secs"
        );
    }

    let started = Instant::now();
    let outcome = solve_with(&start, search_budget(cli.max_expansions, cli.timeout_secs))?;
    info!("Search finished in {:.3}s", started.elapsed().as_secs_f64());

    match outcome {
        Some(path) => {
            print!("{}", render_solution(&start, &path)?);
            Ok(true)
        }
        None => {
            println!("This puzzle cannot be solved.");
            Ok(false)
        }
    }
}

/// Stops the search once either limit is reached.
fn search_budget(
    max_expansions: Option<usize>,
    timeout_secs: Option<u64>,
) -> impl FnMut(&SearchStats) -> bool {
    let deadline = timeout_secs.map(|secs| Instant::now() + Duration::from_secs(secs));
    move |stats: &SearchStats| {
        max_expansions.map_or(true, |max| stats.expanded < max)
            && deadline.map_or(true, |deadline| Instant::now() < deadline)
    }
}

/// Replays `path` from `start`, printing the move and the board after it.
fn render_solution(start: &Grid, path: &[Move]) -> Result<String, PuzzleError> {
    let mut output = format!("Found optimal solution with {} moves\n", path.len());
    let mut grid = start.clone();
    for &step in path {
        grid = grid.apply_move(step)?;
        output.push_str(&format!("\n{step}\n{grid}"));
    }
    Ok(output)
}
