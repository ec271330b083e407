// error.rs - Error types for the Game of Life engine

use thiserror::Error;

/// Errors surfaced by grid construction, cell access, pattern handling and
/// the simulation timer. All of them are caller errors; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell (row {row}, col {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("invalid pattern `{name}`: {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("generation interval must be non-zero")]
    InvalidInterval,

    #[error("no tokio runtime available to drive the simulation timer")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, LifeError>;
