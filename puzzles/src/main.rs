//! `puzzles` command-line entry point.
//!
//! Solves one puzzle day, or every solved day, reading inputs from
//! `<inputs_dir>/day<N>.txt` and printing answers to stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use puzzles::core::hash_search::{SearchError, digest_hex};
use puzzles::exit_codes;
use puzzles::io::config::load_config;
use puzzles::io::input::FileInput;
use puzzles::puzzle::{implemented, lookup};
use puzzles::solve::{solve, write_report};

#[derive(Parser)]
#[command(name = "puzzles", version, about = "Balance counter and hash prefix puzzle solvers")]
struct Cli {
    /// Path to the TOML config. Defaults apply when the file is missing.
    #[arg(long, global = true, default_value = "puzzles.toml")]
    config: PathBuf,

    /// Directory holding `day<N>.txt` inputs (overrides `inputs_dir`).
    #[arg(long, global = true)]
    inputs: Option<PathBuf>,

    /// Defaults to `solve` over every solved day.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one day, or every solved day when DAY is omitted.
    Solve { day: Option<u32> },
    /// Print the solved days.
    List,
    /// Print the hex digest of SEED followed by K.
    Digest { seed: String, k: u64 },
}

fn main() {
    puzzles::logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not errors.
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SearchError>() {
        Some(SearchError::Exhausted { .. }) => exit_codes::EXHAUSTED,
        _ => exit_codes::INVALID,
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Solve { day: None }) {
        Command::Solve { day } => cmd_solve(&cli.config, cli.inputs, day),
        Command::List => cmd_list(&cli.config),
        Command::Digest { seed, k } => {
            println!("{}", digest_hex(&seed, k));
            Ok(())
        }
    }
}

fn cmd_solve(config_path: &Path, inputs: Option<PathBuf>, day: Option<u32>) -> Result<()> {
    let mut config = load_config(config_path).context("load config")?;
    if let Some(dir) = inputs {
        config.inputs_dir = dir;
    }
    debug!(inputs_dir = %config.inputs_dir.display(), "config loaded");

    let days: Vec<u32> = match day {
        Some(d) => vec![d],
        None => implemented()
            .into_iter()
            .map(|id| u32::from(id.day()))
            .collect(),
    };
    let source = FileInput::new(&config.inputs_dir);
    let mut stdout = std::io::stdout().lock();
    for (index, d) in days.into_iter().enumerate() {
        let mut puzzle = lookup(d, &config)?;
        let report = solve(puzzle.as_mut(), &source)?;
        if index > 0 {
            writeln!(stdout)?;
        }
        write_report(&mut stdout, &report)?;
        stdout.flush().context("flush stdout")?;
    }
    Ok(())
}

fn cmd_list(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("load config")?;
    for id in implemented() {
        let puzzle = lookup(id.day().into(), &config)?;
        println!("{} {}", id, puzzle.name());
    }
    Ok(())
}
