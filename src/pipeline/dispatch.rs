use crate::error::DispatchError;
use crate::types::workout::{Measurements, WorkoutKind, WorkoutRecord};

/// Largest count an f64 holds exactly (2^53).
const MAX_ACTION_COUNT: f64 = 9_007_199_254_740_992.0;

/// Builds a record from a kind code and its positional readings.
///
/// Layout per kind:
/// - `RUN`: action count, duration (h), weight (kg)
/// - `WLK`: the above plus height (cm)
/// - `SWM`: the above plus pool length (m) and lap count
pub fn read_package(code: &str, values: &[f64]) -> Result<WorkoutRecord, DispatchError> {
    let kind: WorkoutKind = code.parse()?;

    if values.len() != kind.field_count() {
        return Err(invalid(
            kind,
            format!("expected {} values, got {}", kind.field_count(), values.len()),
        ));
    }
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(invalid(kind, format!("value #{} is not a finite number", pos + 1)));
    }

    let base = measurements(kind, &values[..3])?;
    let record = match kind {
        WorkoutKind::Running => WorkoutRecord::Running { base },
        WorkoutKind::Walking => {
            let height_cm = values[3];
            if height_cm <= 0.0 {
                return Err(invalid(kind, format!("height must be positive, got {}", height_cm)));
            }
            WorkoutRecord::Walking { base, height_cm }
        }
        WorkoutKind::Swimming => {
            let (pool_length_m, pool_lap_count) = (values[3], values[4]);
            if pool_length_m < 0.0 {
                return Err(invalid(kind, format!("pool length must not be negative, got {}", pool_length_m)));
            }
            if pool_lap_count < 0.0 {
                return Err(invalid(kind, format!("lap count must not be negative, got {}", pool_lap_count)));
            }
            WorkoutRecord::Swimming {
                base,
                pool_length_m,
                pool_lap_count,
            }
        }
    };

    tracing::debug!("Read {} package: {:?}", kind.code(), record);
    Ok(record)
}

fn measurements(kind: WorkoutKind, values: &[f64]) -> Result<Measurements, DispatchError> {
    let (action, duration_hours, weight_kg) = (values[0], values[1], values[2]);

    if action < 0.0 || action.fract() != 0.0 {
        return Err(invalid(kind, format!("action count must be a non-negative integer, got {}", action)));
    }
    if action > MAX_ACTION_COUNT {
        return Err(invalid(kind, format!("action count {} exceeds {}", action, MAX_ACTION_COUNT)));
    }
    if duration_hours <= 0.0 {
        return Err(invalid(kind, format!("duration must be positive, got {}", duration_hours)));
    }
    if weight_kg < 0.0 {
        return Err(invalid(kind, format!("weight must not be negative, got {}", weight_kg)));
    }

    Ok(Measurements {
        action_count: action as u64,
        duration_hours,
        weight_kg,
    })
}

fn invalid(kind: WorkoutKind, reason: String) -> DispatchError {
    DispatchError::InvalidInput { kind, reason }
}
