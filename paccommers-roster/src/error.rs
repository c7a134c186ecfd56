//! Roster error types.

use paccommers_tier::MembershipError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Membership(#[from] MembershipError),
}

/// Result type alias for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
