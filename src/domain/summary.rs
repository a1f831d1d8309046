//! Read-only summary of a finished training.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational message about a training, derived on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout label (e.g. "Running")
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Spent energy in kilocalories
    pub calories: f64,
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let info = InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };
        insta::assert_snapshot!(
            info.to_string(),
            @"Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_message_rounds_to_three_digits() {
        let info = InfoMessage {
            training_type: "Running".to_string(),
            duration: 0.5,
            distance: 1.23456,
            speed: 2.46912,
            calories: 10.0004,
        };
        let msg = info.to_string();
        assert!(msg.contains("Длительность: 0.500 ч."));
        assert!(msg.contains("Дистанция: 1.235 км"));
        assert!(msg.contains("Ср. скорость: 2.469 км/ч"));
        assert!(msg.ends_with("Потрачено ккал: 10.000."));
    }

    #[test]
    fn test_serializes_to_json() {
        let info = InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 797.805,
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["calories"], 797.805);
    }
}
