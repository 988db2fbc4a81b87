#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field '{field}' in record {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("No sensor readings supplied")]
    EmptyBatch,

    #[error("No thresholds supplied")]
    EmptyThresholds,

    #[error("Missing threshold '{0}'")]
    MissingThreshold(String),
}
