//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The report core is pure; its only external dependency is the source of
//! randomness that stands in for scan history.
//!
//! # Available Ports
//!
//! - [`RandomSource`] - Uniform integer draws feeding the synthesizer

pub mod outbound;

pub use outbound::random::RandomSource;
