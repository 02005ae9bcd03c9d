//! Error types for the ff-app service layer.

use std::path::PathBuf;

use ff_core::FfError;
use ff_render::RenderError;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Flow graph error: {0}")]
    Graph(#[from] FfError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Conservation check failed: {0}")]
    Unbalanced(String),

    #[error("Failed to open preview: {path}")]
    Preview {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
