//! Report use cases: synthesis, insights, summary figures and CSV export.

mod export;
mod insight;
mod summary;
mod synthesizer;

pub use export::{daily_csv, export_file_name, CSV_HEADER};
pub use insight::generate_insights;
pub use summary::{daily_share, format_date_br, round_one_decimal, top_platform};
pub use synthesizer::{split_base_count, synthesize, ReportSynthesizer};
