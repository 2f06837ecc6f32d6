use thiserror::Error;

#[derive(Debug, Error)]
pub enum RollupError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}
