//! Deterministic puzzle logic.
//!
//! Core modules are free of I/O. They operate on in-memory input and return
//! deterministic outputs suitable for tests.

pub mod balance;
pub mod hash_search;
