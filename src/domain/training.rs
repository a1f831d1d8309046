//! Training record entity and the per-workout formulas.

use super::InfoMessage;
use crate::error::{WorkoutError, WorkoutResult};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Step length for running and walking, in meters
pub const LEN_STEP: f64 = 0.65;
/// Stroke length for swimming, in meters
pub const SWIM_LEN_STROKE: f64 = 1.38;

/// Running: mean speed multiplier
pub const RUN_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
/// Running: mean speed shift
pub const RUN_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Walking: weight multiplier
pub const WALK_K_1: f64 = 0.035;
/// Walking: multiplier of the squared speed to height ratio
pub const WALK_K_2: f64 = 0.029;
/// km/h to m/s
pub const KMH_IN_MSEC: f64 = 0.278;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;

/// Swimming: mean speed shift
pub const SWIM_MEAN_SPEED_SHIFT: f64 = 1.1;
/// Swimming: weight multiplier
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Variant-specific attributes of a training
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainingKind {
    Running,
    SportsWalking {
        /// Athlete height in centimeters
        height_cm: f64,
    },
    Swimming {
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_lengths_count: u32,
    },
}

impl TrainingKind {
    /// Display label used in the summary message
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    /// Length of a single movement unit (step or stroke) in meters
    pub fn step_length_m(&self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking { .. } => LEN_STEP,
            Self::Swimming { .. } => SWIM_LEN_STROKE,
        }
    }
}

/// A single immutable training record built from validated sensor readings.
///
/// Every constructor checks the measurement invariants, so the derived
/// values never divide by zero and never produce NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
    kind: TrainingKind,
}

impl Training {
    /// Create a running record
    pub fn running(action_count: u64, duration_hours: f64, weight_kg: f64) -> WorkoutResult<Self> {
        Self::new(action_count, duration_hours, weight_kg, TrainingKind::Running)
    }

    /// Create a sports walking record
    pub fn sports_walking(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> WorkoutResult<Self> {
        require_positive("height_cm", height_cm)?;
        Self::new(
            action_count,
            duration_hours,
            weight_kg,
            TrainingKind::SportsWalking { height_cm },
        )
    }

    /// Create a swimming record
    pub fn swimming(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: u32,
    ) -> WorkoutResult<Self> {
        require_positive("pool_length_m", pool_length_m)?;
        if pool_lengths_count == 0 {
            return Err(WorkoutError::InvalidMeasurement {
                field: "pool_lengths_count",
                value: 0.0,
                reason: "must be positive",
            });
        }
        Self::new(
            action_count,
            duration_hours,
            weight_kg,
            TrainingKind::Swimming {
                pool_length_m,
                pool_lengths_count,
            },
        )
    }

    fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        kind: TrainingKind,
    ) -> WorkoutResult<Self> {
        require_positive("duration_hours", duration_hours)?;
        require_positive("weight_kg", weight_kg)?;
        let training = Self {
            action_count,
            duration_hours,
            weight_kg,
            kind,
        };
        require_in_range("mean_speed_kmh", training.mean_speed_kmh())?;
        require_in_range("calories", training.calories())?;
        Ok(training)
    }

    /// Number of steps or strokes
    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    /// Duration in hours
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Variant-specific attributes
    pub fn kind(&self) -> &TrainingKind {
        &self.kind
    }

    /// Distance covered in kilometers
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * self.kind.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming derives speed from pool geometry instead of stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            TrainingKind::Swimming {
                pool_length_m,
                pool_lengths_count,
            } => pool_length_m * f64::from(pool_lengths_count) / M_IN_KM / self.duration_hours,
            _ => self.distance_km() / self.duration_hours,
        }
    }

    /// Energy spent in kilocalories
    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.kind {
            TrainingKind::Running => {
                (RUN_MEAN_SPEED_MULTIPLIER * speed + RUN_MEAN_SPEED_SHIFT) * self.weight_kg
                    / M_IN_KM
                    * (MIN_IN_H * self.duration_hours)
            }
            TrainingKind::SportsWalking { height_cm } => {
                let speed_msec = speed * KMH_IN_MSEC;
                let height_m = height_cm / CM_IN_M;
                (WALK_K_1 * self.weight_kg
                    + (speed_msec.powi(2) / height_m) * WALK_K_2 * self.weight_kg)
                    * (MIN_IN_H * self.duration_hours)
            }
            TrainingKind::Swimming { .. } => {
                (speed + SWIM_MEAN_SPEED_SHIFT)
                    * SWIM_WEIGHT_MULTIPLIER
                    * self.weight_kg
                    * self.duration_hours
            }
        }
    }

    /// Snapshot of the derived statistics
    pub fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind.label().to_string(),
            duration: self.duration_hours,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> WorkoutResult<()> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

fn require_in_range(field: &'static str, value: f64) -> WorkoutResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "out of range",
        })
    }
}
