//! Error types for rendering and persistence.

use std::path::PathBuf;

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write diagram: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
