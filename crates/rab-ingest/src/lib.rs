//! Boundary collaborators for the RAB cleaner: download, raw CSV
//! decoding, and cleaned-table output. No cleaning semantics live here.

pub mod fetch;
pub mod output;
pub mod raw_csv;

pub use fetch::{RAB_CSV_URL, fetch_raw};
pub use output::write_clean_csv;
pub use raw_csv::read_raw_csv;
