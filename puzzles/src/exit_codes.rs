//! Stable exit codes for the `puzzles` CLI.

/// Every requested puzzle was solved.
pub const OK: i32 = 0;
/// Usage error, invalid day, config or input, or any other error.
pub const INVALID: i32 = 1;
/// A hash search hit its configured iteration cap.
pub const EXHAUSTED: i32 = 2;
