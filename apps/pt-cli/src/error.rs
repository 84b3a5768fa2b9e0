//! Error types for the command-line front end.

use pt_core::PtError;
use std::path::PathBuf;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Calculation(#[from] PtError),

    #[error("Failed to read batch file: {path}")]
    BatchFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{failed} of {total} batch cases failed")]
    BatchFailed { failed: usize, total: usize },
}
