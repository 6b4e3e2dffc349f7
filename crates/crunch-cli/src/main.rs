//! Command-line front end for the Crunch level engine.
//!
//! Loads a level layout, shuffles it, and prints the board together with the
//! legal swaps. A seeded shuffle can be replayed to try a swap.
//!
//! # Usage
//!
//! ```sh
//! crunch shuffle Level_1
//! crunch shuffle Level_1 --seed <HEX>
//! crunch swap Level_1 --seed <HEX> 3,4 3,5
//! ```
//!
//! Set `RUST_LOG=debug` to follow generation attempts.

use std::{error::Error, path::PathBuf, process};

use clap::{Parser, Subcommand};
use crunch_core::Position;
use crunch_layout::{DirectorySource, TileLayoutSource as _};
use crunch_level::{Level, LevelConfig, LevelSeed, SwapOutcome};

mod board;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory containing `<LEVEL>.json` layouts.
    #[arg(long, value_name = "DIR", default_value = "levels", global = true)]
    levels_dir: PathBuf,

    /// Number of board columns.
    #[arg(long, default_value_t = LevelConfig::DEFAULT_COLUMNS, global = true)]
    columns: usize,

    /// Number of board rows.
    #[arg(long, default_value_t = LevelConfig::DEFAULT_ROWS, global = true)]
    rows: usize,

    /// Layouts to generate before giving up.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = LevelConfig::DEFAULT_MAX_SHUFFLE_ATTEMPTS,
        global = true
    )]
    max_attempts: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shuffle a level and print the board and its legal swaps.
    Shuffle {
        /// Level name, without the `.json` extension.
        level: String,

        /// Seed to reproduce (64 hex digits). A random seed is used if omitted.
        #[arg(long)]
        seed: Option<LevelSeed>,
    },
    /// Replay a seeded shuffle and try one swap.
    Swap {
        /// Level name, without the `.json` extension.
        level: String,

        /// Seed printed by `crunch shuffle`.
        #[arg(long)]
        seed: LevelSeed,

        /// First cell, as `column,row`.
        from: Position,

        /// Second cell, as `column,row`.
        to: Position,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = LevelConfig::default()
        .with_dimensions(args.columns, args.rows)
        .with_max_shuffle_attempts(args.max_attempts);
    let source = DirectorySource::new(&args.levels_dir);

    match &args.command {
        Command::Shuffle { level, seed } => {
            let mut level = load_level(&source, level, config)?;
            let seed = seed.unwrap_or_else(LevelSeed::random);
            level.shuffle_with_seed(seed)?;

            println!("seed: {seed}");
            println!();
            print!("{}", board::Board(&level));
            println!();
            println!("possible swaps: {}", level.possible_swaps().len());
            for (a, b) in board::sorted_swaps(&level) {
                println!("  {a} <-> {b}");
            }
        }
        Command::Swap {
            level,
            seed,
            from,
            to,
        } => {
            let mut level = load_level(&source, level, config)?;
            level.shuffle_with_seed(*seed)?;

            let swap = level
                .swap_between(*from, *to)
                .ok_or_else(|| format!("{from} and {to} are not adjacent cookies"))?;
            match level.try_swap(&swap) {
                SwapOutcome::Performed => println!("performed: {from} <-> {to}"),
                SwapOutcome::Invalid => println!("invalid: {from} <-> {to}"),
            }
            println!();
            print!("{}", board::Board(&level));
        }
    }
    Ok(())
}

fn load_level(
    source: &DirectorySource,
    name: &str,
    config: LevelConfig,
) -> Result<Level, Box<dyn Error>> {
    let layout = source.load_tile_layout(name)?;
    log::info!(
        "loaded {name} with {} playable cells",
        layout.playable_count()
    );
    Ok(Level::new(config, &layout)?)
}
