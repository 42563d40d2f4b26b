use crate::error::ReportError;
use crate::types::summary::Summary;

pub fn message(summary: &Summary) -> String {
    summary.to_string()
}

pub fn to_json(summary: &Summary) -> Result<String, ReportError> {
    Ok(serde_json::to_string(summary)?)
}
