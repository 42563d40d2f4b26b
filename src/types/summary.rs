use serde::Serialize;
use std::fmt;

use crate::types::workout::WorkoutKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub kind: WorkoutKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.kind, self.duration_hours, self.distance_km, self.avg_speed_kmh, self.calories_kcal
        )
    }
}
