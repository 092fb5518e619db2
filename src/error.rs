//! Error types for selectcat
//!
//! Uses `thiserror` for library errors; the CLI layer wraps these in
//! `anyhow` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::domain::ports::DataSourceError;

/// Result type alias for selectcat operations
pub type SelectcatResult<T> = Result<T, SelectcatError>;

/// Main error type for selectcat operations
#[derive(Error, Debug)]
pub enum SelectcatError {
    /// Category relation lookup failed; no partial tree is rendered
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// Invalid configuration TOML
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid category data file (CLI fixtures)
    #[error("invalid category data in {file}: {message}")]
    InvalidData { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
