//! Application services (use cases).
//!
//! These services run the report core: synthesizing a period rollup from a
//! random source and deriving insights from it.

pub mod report;
