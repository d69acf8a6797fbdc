//! Puzzle registry.
//!
//! Each solved puzzle is a [`Puzzle`] addressed by its calendar day. Lookup
//! distinguishes days that are not solved yet from days that do not exist.

mod balance;
mod hash_prefix;

use std::fmt;

use anyhow::Result;

use crate::io::config::PuzzlesConfig;

pub use balance::BalanceCounter;
pub use hash_prefix::HashPrefixFinder;

/// Last day of the calendar.
pub const LAST_DAY: u8 = 25;

/// Days with a registered solver, ascending.
const IMPLEMENTED_DAYS: [u8; 2] = [1, 4];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("day {day} is not a valid puzzle day (expected 1..=25)")]
    InvalidDay { day: u32 },
    #[error("day {day} is not implemented yet")]
    NotImplemented { day: u32 },
}

/// Calendar day of a puzzle, always within `1..=LAST_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId(u8);

impl PuzzleId {
    pub fn new(day: u32) -> Result<Self, PuzzleError> {
        match u8::try_from(day) {
            Ok(d) if (1..=LAST_DAY).contains(&d) => Ok(Self(d)),
            _ => Err(PuzzleError::InvalidDay { day }),
        }
    }

    pub fn day(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lines answering one part. The first line follows the part title.
pub type PartOutput = Result<Vec<String>>;

pub trait Puzzle: fmt::Debug {
    fn id(&self) -> PuzzleId;

    fn name(&self) -> &'static str;

    fn part1(&mut self, input: &str) -> PartOutput;

    fn part2(&mut self, input: &str) -> PartOutput;

    /// Whether the elapsed time of each part belongs in the output.
    fn reports_elapsed(&self) -> bool {
        false
    }
}

/// Build the solver for `day`.
///
/// # Errors
///
/// [`PuzzleError::InvalidDay`] outside `1..=25`, [`PuzzleError::NotImplemented`]
/// for a valid day without a solver.
pub fn lookup(day: u32, config: &PuzzlesConfig) -> Result<Box<dyn Puzzle>, PuzzleError> {
    let id = PuzzleId::new(day)?;
    match id.day() {
        1 => Ok(Box::new(BalanceCounter::new(id, config.balance.to_balance()))),
        4 => Ok(Box::new(HashPrefixFinder::new(id, &config.hash))),
        _ => Err(PuzzleError::NotImplemented { day }),
    }
}

/// Days with a registered solver.
pub fn implemented() -> Vec<PuzzleId> {
    IMPLEMENTED_DAYS.iter().map(|&day| PuzzleId(day)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_registered_days() {
        let config = PuzzlesConfig::default();
        let day1 = lookup(1, &config).expect("day 1");
        assert_eq!(day1.id().day(), 1);
        assert!(!day1.reports_elapsed());
        let day4 = lookup(4, &config).expect("day 4");
        assert_eq!(day4.id().day(), 4);
        assert!(day4.reports_elapsed());
    }

    #[test]
    fn unsolved_day_is_not_implemented() {
        let config = PuzzlesConfig::default();
        let err = lookup(2, &config).expect_err("day 2");
        assert_eq!(err, PuzzleError::NotImplemented { day: 2 });
    }

    #[test]
    fn out_of_range_days_are_invalid() {
        let config = PuzzlesConfig::default();
        for day in [0, 26, 300, u32::MAX] {
            let err = lookup(day, &config).expect_err("invalid");
            assert_eq!(err, PuzzleError::InvalidDay { day });
        }
    }

    #[test]
    fn implemented_days_all_resolve() {
        let config = PuzzlesConfig::default();
        let days = implemented();
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        for id in days {
            let puzzle = lookup(id.day().into(), &config).expect("registered");
            assert_eq!(puzzle.id(), id);
        }
    }
}
