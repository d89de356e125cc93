use thiserror::Error;

/// Error type covering validation and configuration failures.
#[derive(Debug, Error)]
pub enum TontineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date `{0}`: expected an ISO-8601 date, optionally with a time suffix")]
    InvalidDate(String),
    #[error("Negative amount {amount} on entry `{id}`")]
    NegativeAmount { id: String, amount: f64 },
    #[error("Unknown {field} tag: `{value}`")]
    UnknownTag { field: &'static str, value: String },
}
