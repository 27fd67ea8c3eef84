//! Pre-submission validation for weekly goaling upload CSVs.
//!
//! Checks column presence, goal-id format, date format (Mondays only),
//! numeric format, duplicates within the upload and against an existing
//! export, per-goal week counts, and quarter-long walk direction, and
//! aggregates everything into a [`ValidationReport`].

mod report;
mod rules;
mod upload;

pub use report::{ValidationReport, ValidationStats};
pub use rules::RowError;
pub use upload::{validate_upload, validate_upload_reader, EXPECTED_WEEKS, REQUIRED_COLUMNS};
