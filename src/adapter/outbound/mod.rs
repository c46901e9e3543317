//! Outbound adapters (driven side).

pub mod random;
