use thiserror::Error;

/// Feil fra grenselagene (JSON, config, binding). Selve kjerneberegningen feiler aldri.
#[derive(Debug, Error)]
pub enum TrackStatsError {
    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid point at index {index}: {reason}")]
    InvalidPoint { index: usize, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl<E: std::fmt::Display> From<serde_path_to_error::Error<E>> for TrackStatsError {
    fn from(e: serde_path_to_error::Error<E>) -> Self {
        TrackStatsError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackStatsError>;
