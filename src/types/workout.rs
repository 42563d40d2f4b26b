use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutKind {
    Running,
    #[serde(rename = "SportsWalking")]
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::Walking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name printed in the summary line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = crate::error::DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| crate::error::DispatchError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readings shared by every kind of workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Steps for running and walking, strokes for swimming.
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    Running {
        base: Measurements,
    },
    Walking {
        base: Measurements,
        height_cm: f64,
    },
    Swimming {
        base: Measurements,
        pool_length_m: f64,
        pool_lap_count: f64,
    },
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutRecord::Running { .. } => WorkoutKind::Running,
            WorkoutRecord::Walking { .. } => WorkoutKind::Walking,
            WorkoutRecord::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn base(&self) -> &Measurements {
        match self {
            WorkoutRecord::Running { base }
            | WorkoutRecord::Walking { base, .. }
            | WorkoutRecord::Swimming { base, .. } => base,
        }
    }
}
