//! Fatal, user-facing errors that abort the whole run.

use crate::engine::EngineError;
use std::path::PathBuf;

/// Unrecoverable failures surfaced to the user. Anything constructed here
/// terminates the run; warnings go through `output` instead.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// An input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested output format has no registered formatter.
    #[error("invalid output format \"{0}\"")]
    UnknownFormat(String),

    /// Engine discovery, loading, or execution failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
