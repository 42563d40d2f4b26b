use workout_tracker_rs::pipeline::dispatch::read_package;
use workout_tracker_rs::pipeline::formulas::{compute, walking_calories_continuous};
use workout_tracker_rs::types::workout::{WorkoutKind, WorkoutRecord};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn running_metrics() {
    let record = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("record");
    let summary = compute(&record);

    assert_eq!(summary.kind, WorkoutKind::Running);
    assert_close(summary.duration_hours, 1.0);
    assert_close(summary.distance_km, 9.75);
    assert_close(summary.avg_speed_kmh, 9.75);
    assert_close(summary.calories_kcal, (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0);
    assert_close(summary.calories_kcal, 699.75);
}

#[test]
fn swimming_uses_pool_dimensions_not_strokes() {
    let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("record");
    let summary = compute(&record);

    assert_eq!(summary.kind, WorkoutKind::Swimming);
    assert_close(summary.distance_km, 1.0);
    assert_close(summary.avg_speed_kmh, 1.0);
    assert_close(summary.calories_kcal, 336.0);
}

#[test]
fn swimming_speed_scales_with_duration() {
    let record = read_package("SWM", &[0.0, 0.5, 80.0, 50.0, 20.0]).expect("record");
    let summary = compute(&record);

    assert_close(summary.distance_km, 1.0);
    assert_close(summary.avg_speed_kmh, 2.0);
    assert_close(summary.calories_kcal, (2.0 + 1.1) * 2.0 * 80.0);
}

#[test]
fn walking_floor_division_drops_small_speed_term() {
    let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("record");
    let summary = compute(&record);

    assert_eq!(summary.kind, WorkoutKind::Walking);
    assert_close(summary.distance_km, 5.85);
    assert_close(summary.avg_speed_kmh, 5.85);
    // 5.85^2 / 180 floors to zero, leaving only the weight term.
    assert_close(summary.calories_kcal, 0.035 * 75.0 * 60.0);
}

#[test]
fn walking_floor_and_continuous_readings_differ() {
    let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("record");
    let WorkoutRecord::Walking { base, height_cm } = record else {
        panic!("expected walking record");
    };
    let summary = compute(&record);
    let continuous = walking_calories_continuous(&base, summary.avg_speed_kmh, height_cm);

    assert_close(summary.calories_kcal, 157.5);
    assert_close(continuous, 182.3113125);
    assert!(continuous > summary.calories_kcal);
}

#[test]
fn walking_floor_term_keeps_whole_part() {
    let record = read_package("WLK", &[60000.0, 1.0, 75.0, 180.0]).expect("record");
    let WorkoutRecord::Walking { base, height_cm } = record else {
        panic!("expected walking record");
    };
    let summary = compute(&record);

    // 39^2 / 180 = 8.45, floored to 8.
    assert_close(summary.calories_kcal, (0.035 * 75.0 + 8.0 * 0.029 * 75.0) * 60.0);
    assert_close(
        walking_calories_continuous(&base, summary.avg_speed_kmh, height_cm),
        (0.035 * 75.0 + 8.45 * 0.029 * 75.0) * 60.0,
    );
}

#[test]
fn recomputing_is_bit_identical() {
    for (code, values) in [
        ("RUN", vec![15000.0, 1.3, 71.2]),
        ("WLK", vec![12345.0, 0.7, 64.0, 171.5]),
        ("SWM", vec![900.0, 0.9, 58.0, 33.3, 27.0]),
    ] {
        let record = read_package(code, &values).expect("record");
        let first = compute(&record);
        let second = compute(&record);

        assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
        assert_eq!(first.avg_speed_kmh.to_bits(), second.avg_speed_kmh.to_bits());
        assert_eq!(first.calories_kcal.to_bits(), second.calories_kcal.to_bits());
    }
}

#[test]
fn walking_floor_uses_exact_quotient() {
    // 234^2 / 0.1 rounds to 547560.0, but the exact quotient is just below it.
    let record = read_package("WLK", &[360000.0, 1.0, 75.0, 0.1]).expect("record");
    let summary = compute(&record);

    assert_close(summary.avg_speed_kmh, 234.0);
    let expected = (0.035 * 75.0 + 547559.0 * 0.029 * 75.0) * 60.0;
    assert!(
        (summary.calories_kcal - expected).abs() < 1e-3,
        "expected {expected}, got {}",
        summary.calories_kcal
    );
}
