//! Error type shared by generation, import and export.

/// Represents a failure reported by this crate.
///
/// Every fallible operation either produces a complete, valid value or returns one of these;
/// nothing is retried internally.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Unknown version number or format tag, or missing namespace/name for a name-based
    /// version.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Binary input that is not exactly 16 bytes, or a string that is not in the 8-4-4-4-12
    /// hexadecimal form.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Namespace argument that is neither a well-known namespace name nor a UUID string.
    #[error("invalid namespace: {0:?}")]
    InvalidNamespace(String),

    /// Neither a hardware node identifier nor random bytes could be obtained for a version 1
    /// UUID.
    #[error("node identifier unavailable: {0}")]
    NodeUnavailable(String),
}

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<crate::ParseError> for Error {
    fn from(src: crate::ParseError) -> Self {
        Self::MalformedInput(src.to_string())
    }
}
