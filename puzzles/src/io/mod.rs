//! I/O helpers for puzzle commands.

pub mod config;
pub mod input;
