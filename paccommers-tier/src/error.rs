//! Tiering error types.
//!
//! Each tiering failure is a named variant.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembershipError {
    #[error("Membership has not been predicted yet; classify before pricing")]
    UninitializedMembership,

    #[error("Unknown membership tier: {0}")]
    UnknownTier(String),
}

/// Result type alias for tiering operations.
pub type MembershipResult<T> = Result<T, MembershipError>;
