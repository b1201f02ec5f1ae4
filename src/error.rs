//! Error types for corpus filtering

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid length range '{0}': expected <min>-<max>")]
    InvalidLength(String),

    #[error("Cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Cannot create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Read error in {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Write error in {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Cannot rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Inputs are misaligned: {} runs out after {lines} lines", .path.display())]
    Misaligned { path: PathBuf, lines: u64 },
}

pub type Result<T> = std::result::Result<T, FilterError>;
