//! Solve orchestration for `puzzles solve`.
//!
//! Loads a puzzle's input, runs both parts with timing, and renders the
//! plain-text report printed to stdout.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::io::input::InputSource;
use crate::puzzle::{Puzzle, PuzzleId};

/// Value produced by `f` together with its wall-clock duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Run `f` and measure how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let started = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: started.elapsed(),
    }
}

/// Answer lines and duration of one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReport {
    pub part: usize,
    pub lines: Vec<String>,
    pub elapsed: Duration,
}

/// Outcome of solving both parts of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub id: PuzzleId,
    pub name: &'static str,
    pub show_elapsed: bool,
    pub parts: Vec<PartReport>,
}

/// Solve both parts of `puzzle` against the first line of its input.
#[instrument(skip_all, fields(day = %puzzle.id()))]
pub fn solve(puzzle: &mut dyn Puzzle, source: &dyn InputSource) -> Result<SolveReport> {
    let id = puzzle.id();
    let input = source
        .first_line(id)
        .with_context(|| format!("load input for day {id}"))?;
    debug!(input_len = input.len(), "input loaded");

    let mut parts = Vec::with_capacity(2);
    for part in 1..=2 {
        let run = timed(|| match part {
            1 => puzzle.part1(&input),
            _ => puzzle.part2(&input),
        });
        let lines = run.value.with_context(|| format!("day {id} part {part}"))?;
        info!(part, elapsed_secs = run.elapsed.as_secs_f64(), "part solved");
        parts.push(PartReport {
            part,
            lines,
            elapsed: run.elapsed,
        });
    }

    Ok(SolveReport {
        id,
        name: puzzle.name(),
        show_elapsed: puzzle.reports_elapsed(),
        parts,
    })
}

/// Write `report` in the `Part N: <value>` layout.
pub fn write_report(out: &mut impl Write, report: &SolveReport) -> Result<()> {
    writeln!(out, "---- Day {}: {} ----", report.id, report.name)?;
    for part in &report.parts {
        let title = format!("Part {}:", part.part);
        write_part(out, &title, &part.lines)?;
        if report.show_elapsed {
            writeln!(out, "Elapsed time: {:.2}", part.elapsed.as_secs_f64())?;
        }
    }
    Ok(())
}

/// First line follows the title, the rest are indented beneath it.
fn write_part(out: &mut impl Write, title: &str, lines: &[String]) -> Result<()> {
    let indent = " ".repeat(title.len() + 1);
    let mut lines = lines.iter();
    match lines.next() {
        Some(first) => writeln!(out, "{title} {first}")?,
        None => writeln!(out, "{title}")?,
    }
    for line in lines {
        writeln!(out, "{indent}{line}")?;
    }
    Ok(())
}
