use thiserror::Error;

/// Errors surfaced by sink implementations during export.
///
/// Generation never fails; only the materialization step can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// Filesystem failure while materializing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by a custom sink implementation.
    #[error("sink error: {0}")]
    Sink(String),
}
