//! Error types for memspace

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::size::SizeError;

/// Every variant is fatal: the caller reports it and stops without rendering.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid threshold: {0}")]
    InvalidSize(#[from] SizeError),

    #[error("cannot read directory '{}': {source}", path.display())]
    DirectoryRead { path: PathBuf, source: io::Error },

    #[error("cannot stat file '{}': {source}", path.display())]
    FileStat { path: PathBuf, source: io::Error },

    #[error("base path cannot be empty")]
    EmptyBasePath,

    #[error("base path does not exist: {}", .0.display())]
    MissingBasePath(PathBuf),

    #[error("cannot read filesystem statistics for '{}': {source}", path.display())]
    DiskStats {
        path: PathBuf,
        source: nix::errno::Errno,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
