//! Error types for the wb-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Not a switch: {0}")]
    NotASwitch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wb-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wb_project::ProjectError> for AppError {
    fn from(err: wb_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}
