use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by the engine.
///
/// Short series are never an error: indicators without enough bars come back
/// as `None`. These variants cover input that cannot be analysed at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("timestamps out of order at bar {index}: {current} precedes {previous}")]
    UnsortedTimestamps {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    #[error("duplicate timestamp {timestamp} at bar {index}")]
    DuplicateTimestamp {
        index: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("invalid bar {index}: {reason}")]
    InvalidBar { index: usize, reason: String },

    #[error("non-finite {field} at bar {index}")]
    NonFiniteValue { index: usize, field: &'static str },

    #[error("negative volume {volume} at bar {index}")]
    NegativeVolume { index: usize, volume: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown analysis tool: {0}")]
    UnknownTool(String),

    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },
}
