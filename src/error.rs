//! Crate-wide error type.
//!
//! Only failures that end a run live here. A capture that cannot be aligned
//! with the event log, or whose boundaries lack silence gaps, is a run
//! *outcome* (`run::RunStatus`), not an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// File too short for the fixed 44-byte header, or not 16-bit PCM.
    #[error("{}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    /// External encoder exited non-zero. Tracks already written stay on disk.
    #[error("encoder `{program}` failed ({})", .code.map(|c| format!("exit code {c}")).unwrap_or_else(|| "killed by signal".into()))]
    Encode { program: String, code: Option<i32> },

    #[error("run cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
