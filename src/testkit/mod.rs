//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`random`] - Scripted and recording [`RandomSource`](crate::port::RandomSource)
//!   implementations.
//! - [`report`] - Builders for reports with hand-picked daily counts.
//! - [`config`] - Canonical TOML snippets for configuration tests.

pub mod config;
pub mod random;
pub mod report;
