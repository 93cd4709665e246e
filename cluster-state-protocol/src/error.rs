use std::io;
use std::result;
use thiserror::Error as ThisError;

pub type Result<T> = result::Result<T, Error>;

/// Cluster monitor error type. Errors either come from the monitor itself (invalid
/// configuration, serialization, I/O) or from the external clustering subsystem when it cannot
/// provide a membership view.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Internal IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Snapshot serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// General error
    #[error("General error: {0}")]
    General(String),
    /// Lower bound of a port range is greater than its upper bound.
    #[error("Invalid port range: {start}..={end}")]
    InvalidPortRange { start: u16, end: u16 },
    /// Malformed member address.
    #[error("Invalid member address: {0}")]
    InvalidAddress(String),
    /// The clustering subsystem could not provide its current membership view.
    #[error("Cluster state unavailable: {0}")]
    ClusterStateUnavailable(String),
    /// Timed out waiting for an operation to complete.
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error::General(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::General(err.to_string())
    }
}
