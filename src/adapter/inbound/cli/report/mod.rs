//! Handler for the `report` command group.

mod format;
mod json;
mod request;

pub mod handler;

pub use request::ReportRequest;
