//! Solvers for two small calendar puzzles.
//!
//! - **Day 1, Balance Counter**: running sum over `(` and `)` symbols.
//! - **Day 4, Hash Prefix Finder**: smallest integer whose salted MD5 digest
//!   starts with a run of zeros.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic puzzle logic. No I/O.
//! - **[`io`]**: Configuration and input loading.
//!
//! [`puzzle`] registers the solvers by day and [`solve`] runs them and
//! renders their answers.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod puzzle;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
