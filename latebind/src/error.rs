use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatebindError {
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{message}")]
    Usage { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}
