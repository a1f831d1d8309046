//! Domain entities for fitness-tracker.
//!
//! This module contains the core business entities:
//! - Package: A raw `(code, readings)` package from the sensors
//! - Training: A validated training record with its formulas
//! - InfoMessage: The derived summary of a training

mod package;
mod summary;
mod training;

pub use package::{decode, demo_packages, Package, WorkoutCode};
pub use summary::InfoMessage;
pub use training::{Training, TrainingKind};
