use crate::types::summary::Summary;
use crate::types::workout::{Measurements, WorkoutRecord};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
/// Step length shared by running and walking, in metres.
const STEP_LENGTH_M: f64 = 0.65;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

pub fn compute(record: &WorkoutRecord) -> Summary {
    let base = record.base();

    let (distance_km, avg_speed_kmh, calories_kcal) = match *record {
        WorkoutRecord::Running { base } => {
            let speed = step_speed_kmh(&base);
            (step_distance_km(&base), speed, running_calories(&base, speed))
        }
        WorkoutRecord::Walking { base, height_cm } => {
            let speed = step_speed_kmh(&base);
            (step_distance_km(&base), speed, walking_calories(&base, speed, height_cm))
        }
        WorkoutRecord::Swimming {
            base,
            pool_length_m,
            pool_lap_count,
        } => {
            let speed = pool_length_m * pool_lap_count / M_IN_KM / base.duration_hours;
            (
                pool_length_m * pool_lap_count / M_IN_KM,
                speed,
                swimming_calories(&base, speed),
            )
        }
    };

    Summary {
        kind: record.kind(),
        duration_hours: base.duration_hours,
        distance_km,
        avg_speed_kmh,
        calories_kcal,
    }
}

fn step_distance_km(base: &Measurements) -> f64 {
    base.action_count as f64 * STEP_LENGTH_M / M_IN_KM
}

fn step_speed_kmh(base: &Measurements) -> f64 {
    step_distance_km(base) / base.duration_hours
}

fn minutes(base: &Measurements) -> f64 {
    base.duration_hours * MIN_IN_H
}

fn running_calories(base: &Measurements, speed_kmh: f64) -> f64 {
    (running::SPEED_MULTIPLIER * speed_kmh - running::SPEED_SHIFT) * base.weight_kg / M_IN_KM
        * minutes(base)
}

/// The speed/height term is floor-divided, so for realistic walking speeds
/// it is usually zero and only the weight term contributes.
fn walking_calories(base: &Measurements, speed_kmh: f64, height_cm: f64) -> f64 {
    walking_energy(base, floor_div(speed_kmh.powi(2), height_cm))
}

/// Floor of the exact quotient `a / b` for `a >= 0` and `b > 0`.
///
/// Rounding `a / b` first and then flooring can land one above the true
/// result when the quotient sits just below a whole number.
fn floor_div(a: f64, b: f64) -> f64 {
    let div = (a - a % b) / b;
    if div == 0.0 {
        return 0.0;
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Walking calories with the speed/height term kept as a real quotient.
pub fn walking_calories_continuous(base: &Measurements, speed_kmh: f64, height_cm: f64) -> f64 {
    walking_energy(base, speed_kmh.powi(2) / height_cm)
}

fn walking_energy(base: &Measurements, speed_term: f64) -> f64 {
    (walking::WEIGHT_MULTIPLIER * base.weight_kg
        + speed_term * walking::SPEED_HEIGHT_MULTIPLIER * base.weight_kg)
        * minutes(base)
}

fn swimming_calories(base: &Measurements, speed_kmh: f64) -> f64 {
    (speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * base.weight_kg
}
