use std::path::PathBuf;

use thiserror::Error;

/// Error kinds distinguished at the CLI boundary. Each maps to a
/// nonzero exit code; the core solver itself never produces an error,
/// only a [`solver::Solution`] verdict.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: {0}")]
    InvalidUsage(String),

    #[error("{path}: {reason}")]
    InvalidFormat { path: String, reason: String },

    #[error("cannot open {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code for this error kind, per the CLI contract:
    /// zero only on a completed solve (including UNSATISFIABLE).
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidUsage(_) => 2,
            CliError::InvalidFormat { .. } => 3,
            CliError::FileAccess { .. } => 4,
        }
    }
}
