//! Stone-groups command line.
//!
//! ## Usage
//!
//! - `stone-groups` - Start a text session on stdin/stdout
//! - `stone-groups groups [FILE]` - Group a text grid read from FILE or stdin
//! - `stone-groups demo` - Group a random board

use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use stone_groups::board::{Board, str_vertex};
use stone_groups::constants::{DEFAULT_SIZE, DEMO_DENSITY, DEMO_SEED, MAX_SIZE};
use stone_groups::grid::{dimensions, format_grid, parse_grid};
use stone_groups::groups::{Group, find_orthogonal_groups};
use stone_groups::session::Session;

/// Stone-groups: orthogonal group detection for Go-like boards
#[derive(Parser)]
#[command(name = "stone-groups")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size for the session
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a text command session (the default)
    Session,
    /// Print the groups of a text grid ('.' or '0' is empty)
    Groups {
        /// Grid file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Report grid statistics on stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Fill a board with random stones and print its groups
    Demo {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEMO_SEED)]
        seed: u64,
        /// Fraction of points holding a stone
        #[arg(long, default_value_t = DEMO_DENSITY)]
        density: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Session) | None => {
            check_size(cli.size)?;
            Session::new(cli.size)
                .run()
                .context("session I/O failed")?;
        }
        Some(Commands::Groups { file, verbose }) => run_groups(file, verbose)?,
        Some(Commands::Demo {
            size,
            seed,
            density,
        }) => {
            check_size(size)?;
            run_demo(size, seed, density)?;
        }
    }
    Ok(())
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_SIZE {
        bail!("board size must be between 1 and {MAX_SIZE} (got {size})");
    }
    Ok(())
}

fn run_groups(file: Option<PathBuf>, verbose: bool) -> Result<()> {
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let grid = parse_grid(&text);
    let start = Instant::now();
    let groups = find_orthogonal_groups(&grid)?;
    let elapsed = start.elapsed();

    print!("{}", format_groups(&groups));

    if verbose {
        let (rows, cols) = dimensions(&grid);
        let stones: usize = groups.iter().map(|g| g.len()).sum();
        eprintln!(
            "{rows}x{cols} grid, {stones} stones in {} groups ({elapsed:?})",
            groups.len()
        );
    }
    Ok(())
}

/// One line per group: index, value, size and `(row,col)` stones.
fn format_groups(groups: &[Group<char>]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let stones: Vec<String> = group
            .stones()
            .iter()
            .map(|(r, c)| format!("({r},{c})"))
            .collect();
        out.push_str(&format!(
            "group {i}: '{}' x{} {}\n",
            group.value(),
            group.len(),
            stones.join(" ")
        ));
    }
    out
}

fn run_demo(size: usize, seed: u64, density: f64) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new(size);
    board.fill_random(&mut rng, density);

    println!("=== Random {size}x{size} board (seed {seed}) ===");
    print!("{}", format_grid(&board.grid()));
    println!();

    let grid = board.grid();
    for group in board.groups() {
        let libs = group.liberties(&grid)?;
        let stones: Vec<String> = group
            .stones()
            .iter()
            .map(|&(row, col)| str_vertex(col, row, size))
            .collect();
        println!(
            "{} {:>2} stones, {:>2} liberties: {}",
            group.value(),
            group.len(),
            libs.len(),
            stones.join(" ")
        );
    }
    Ok(())
}
