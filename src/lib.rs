//! fitness-tracker: workout statistics from sensor packages
//!
//! This crate decodes `(code, readings)` packages for running, sports walking
//! and swimming into training records, and derives distance, mean speed and
//! spent calories for each of them.

pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use config::TrackerConfig;
pub use domain::{decode, InfoMessage, Package, Training, TrainingKind, WorkoutCode};
pub use error::{AppError, Result, WorkoutError};
