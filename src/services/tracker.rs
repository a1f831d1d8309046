//! Batch decoding and summarizing of sensor packages.

use crate::domain::{InfoMessage, Package};
use crate::error::WorkoutResult;

/// Result of processing a single package
#[derive(Debug, Clone)]
pub struct PackageOutcome {
    /// Position of the package in the batch (0-based)
    pub index: usize,
    /// Workout code as received
    pub code: String,
    /// Summary, or the reason the package was rejected
    pub result: WorkoutResult<InfoMessage>,
}

/// Decode and summarize every package, keeping going past rejected ones
pub fn process_packages(packages: &[Package]) -> Vec<PackageOutcome> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let result = package.decode().map(|training| training.summary());
            match &result {
                Ok(info) => tracing::debug!(
                    "Package #{} ({}) -> {} kcal",
                    index,
                    package.code,
                    info.calories
                ),
                Err(e) => tracing::warn!("Package #{} ({}) rejected: {}", index, package.code, e),
            }
            PackageOutcome {
                index,
                code: package.code.clone(),
                result,
            }
        })
        .collect()
}
