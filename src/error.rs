use crate::domain::TodoId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid project ID: {0}")]
    InvalidProjectId(String),

    #[error("{0}")]
    Validation(String),

    #[error("Todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("No project is open")]
    NoOpenProject,

    #[error("Reorder failed ({reorder}) and reloading the board failed too ({reload})")]
    ResyncFailed {
        reorder: Box<BoardError>,
        reload: Box<BoardError>,
    },
}

impl BoardError {
    /// Builds the error for a non-2xx response, falling back to a generic
    /// message when the server sent no body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.is_empty() {
            format!("HTTP error! status: {}", status)
        } else {
            body
        };
        Self::Api { status, message }
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
