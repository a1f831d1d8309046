//! Sensor packages and their decoding into training records.

use super::Training;
use crate::error::{WorkoutError, WorkoutResult};
use serde::Deserialize;
use std::str::FromStr;

/// Workout type code sent by the sensor block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    /// All known codes
    pub const ALL: [WorkoutCode; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter wire code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of readings the package must carry
    pub fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(WorkoutError::UnknownWorkoutCode(other.to_string())),
        }
    }
}

impl std::fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw `(code, readings)` package as received from the sensors.
///
/// The code is kept as a plain string so that unknown codes survive input
/// parsing and are reported by [`decode`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub readings: Vec<f64>,
}

impl Package {
    /// Create a new package
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }

    /// Decode this package into a training record
    pub fn decode(&self) -> WorkoutResult<Training> {
        decode(&self.code, &self.readings)
    }
}

/// Packages processed when no input is supplied
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Decode a workout code and its positional readings into a training record.
///
/// Readings order: action count, duration (h), weight (kg), then height (cm)
/// for walking or pool length (m) and pool lengths count for swimming.
pub fn decode(code: &str, readings: &[f64]) -> WorkoutResult<Training> {
    let workout: WorkoutCode = code.parse()?;
    if readings.len() != workout.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: workout.as_str(),
            expected: workout.arity(),
            actual: readings.len(),
        });
    }

    let action_count = whole_number("action_count", readings[0])?;
    let duration_hours = readings[1];
    let weight_kg = readings[2];

    match workout {
        WorkoutCode::Running => Training::running(action_count, duration_hours, weight_kg),
        WorkoutCode::SportsWalking => {
            Training::sports_walking(action_count, duration_hours, weight_kg, readings[3])
        }
        WorkoutCode::Swimming => {
            let pool_lengths_count = whole_number("pool_lengths_count", readings[4])?;
            let pool_lengths_count =
                u32::try_from(pool_lengths_count).map_err(|_| WorkoutError::InvalidMeasurement {
                    field: "pool_lengths_count",
                    value: readings[4],
                    reason: "out of range",
                })?;
            Training::swimming(
                action_count,
                duration_hours,
                weight_kg,
                readings[3],
                pool_lengths_count,
            )
        }
    }
}

fn whole_number(field: &'static str, value: f64) -> WorkoutResult<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "must be a non-negative whole number",
        });
    }
    if value >= u64::MAX as f64 {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "out of range",
        });
    }
    Ok(value as u64)
}
