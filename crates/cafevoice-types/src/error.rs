use thiserror::Error;

/// Errors raised while assembling a session configuration.
///
/// Construction is otherwise pure literal data; the only failure mode is a
/// turn-detection parameter outside its documented range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must lie within [{min}, {max}], got {got}")]
    OutOfRange {
        field: &'static str,
        got: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must not be negative, got {got}")]
    Negative { field: &'static str, got: i64 },
}
