use crate::types::workout::WorkoutKind;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unrecognized workout kind: {0:?}")]
    UnknownKind(String),
    #[error("Invalid input for {kind}: {reason}")]
    InvalidInput { kind: WorkoutKind, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
