use fitness_tracker::{decode, Training, WorkoutError};

fn fmt3(value: f64) -> String {
    format!("{:.3}", value)
}

#[test]
fn running_package_statistics() {
    let info = decode("RUN", &[15000.0, 1.0, 75.0]).unwrap().summary();
    assert_eq!(info.training_type, "Running");
    assert_eq!(fmt3(info.distance), "9.750");
    assert_eq!(fmt3(info.speed), "9.750");
    assert_eq!(fmt3(info.calories), "797.805");
}

#[test]
fn swimming_package_statistics() {
    let info = decode("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .summary();
    assert_eq!(info.training_type, "Swimming");
    assert_eq!(fmt3(info.speed), "1.000");
    assert_eq!(fmt3(info.calories), "336.000");
}

#[test]
fn walking_package_statistics() {
    let info = decode("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap().summary();
    assert_eq!(info.training_type, "SportsWalking");
    assert_eq!(fmt3(info.distance), "5.850");
    assert_eq!(fmt3(info.speed), "5.850");
    assert_eq!(fmt3(info.calories), "349.252");
}

#[test]
fn unknown_codes_never_decode() {
    for code in ["XYZ", "", "run", "SWIM", "WLK "] {
        let err = decode(code, &[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert!(
            matches!(err, WorkoutError::UnknownWorkoutCode(ref c) if c == code),
            "{code:?} gave {err:?}"
        );
    }
}

#[test]
fn wrong_reading_counts_are_rejected() {
    let cases: [(&str, usize); 3] = [("RUN", 3), ("WLK", 4), ("SWM", 5)];
    for (code, arity) in cases {
        for len in [0, arity - 1, arity + 1] {
            let readings = vec![1.0; len];
            assert!(
                matches!(
                    decode(code, &readings),
                    Err(WorkoutError::ArityMismatch { expected, actual, .. })
                        if expected == arity && actual == len
                ),
                "{code} with {len} readings"
            );
        }
    }
}

#[test]
fn non_positive_duration_never_yields_a_summary() {
    let packages: [(&str, &[f64]); 3] = [
        ("RUN", &[15000.0, 0.0, 75.0]),
        ("WLK", &[9000.0, -1.0, 75.0, 180.0]),
        ("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]),
    ];
    for (code, readings) in packages {
        assert!(matches!(
            decode(code, readings),
            Err(WorkoutError::InvalidMeasurement {
                field: "duration_hours",
                ..
            })
        ));
    }
}

#[test]
fn swimming_speed_depends_only_on_pool_geometry() {
    let base = Training::swimming(720, 1.5, 80.0, 25.0, 40).unwrap();
    for strokes in [0, 1, 720, 100_000] {
        let swim = Training::swimming(strokes, 1.5, 80.0, 25.0, 40).unwrap();
        assert_eq!(swim.mean_speed_kmh().to_bits(), base.mean_speed_kmh().to_bits());
        assert_eq!(swim.calories().to_bits(), base.calories().to_bits());
    }
}

#[test]
fn records_can_be_shared_across_threads() {
    let training = decode("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let expected = training.calories();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || training.calories()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
    }
}

#[test]
fn overflowing_derived_values_are_rejected() {
    let packages: [(&str, &[f64]); 2] = [
        ("RUN", &[15000.0, 1e-320, 75.0]),
        ("WLK", &[9000.0, 1.0, 1e308, 180.0]),
    ];
    for (code, readings) in packages {
        assert!(
            matches!(
                decode(code, readings),
                Err(WorkoutError::InvalidMeasurement {
                    reason: "out of range",
                    ..
                })
            ),
            "{code} {readings:?} produced a summary"
        );
    }
}
