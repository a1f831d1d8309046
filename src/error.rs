//! Unified error types for the fitness-tracker crate.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while writing reports
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors raised while decoding a sensor package into a training record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("Unknown workout code: {0:?}")]
    UnknownWorkoutCode(String),

    #[error("Workout {code} expects {expected} readings, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid measurement {field}: {value} ({reason})")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors raised while reading packages from a text or JSON source
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Line {line}: missing workout code")]
    MissingCode { line: usize },

    #[error("Line {line}: malformed package {content:?}")]
    Malformed { line: usize, content: String },

    #[error("Line {line}: invalid reading {token:?}")]
    InvalidReading { line: usize, token: String },

    #[error("Invalid JSON packages: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read packages from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for workout decoding and computation
pub type WorkoutResult<T> = std::result::Result<T, WorkoutError>;

/// Result type alias for package input
pub type PackageResult<T> = std::result::Result<T, PackageError>;
