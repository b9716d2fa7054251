//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies (the clock, the identity-proof oracle) are
//! abstracted behind traits or explicit `now` parameters. This crate
//! provides test-friendly implementations that return deterministic values,
//! can be controlled programmatically, and never touch hardware or network.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod oracle;

pub use clock::NullClock;
pub use oracle::NullOracle;
