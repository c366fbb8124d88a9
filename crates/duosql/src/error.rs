//! Error types for duosql

use thiserror::Error;

/// Result type alias for duosql operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors surfaced by [`SelectBuilder::build`](crate::SelectBuilder::build).
///
/// Mutators never fail; misconfiguration is only reported at render time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No table was set via `from`, or it was set to an empty string.
    #[error("SELECT requires a FROM table")]
    MissingTable,
}
