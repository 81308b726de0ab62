use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoughError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("invalid ignore pattern '{0}'")]
    InvalidPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type BoughResult<T> = Result<T, BoughError>;
