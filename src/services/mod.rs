//! Services for fitness-tracker.
//!
//! This module contains:
//! - PackageReader: Reading packages from text or JSON sources
//! - process_packages: Batch decoding and summarizing
//! - ReportWriter: Rendering summaries as text or JSON

mod packages;
mod report;
mod tracker;

pub use packages::{parse_json, parse_text, PackageFormat, PackageReader};
pub use report::ReportWriter;
pub use tracker::{process_packages, PackageOutcome};
