//! Error types for guard evaluation
//!
//! All guard errors are transport failures reaching a collaborator.
//! They are recovered locally: the caller keeps whatever state it had,
//! shows a non-blocking notice with a retry affordance, and never turns
//! a failed lookup into a redirect.

use thiserror::Error;

/// Guard evaluation error types.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Failure reaching the identity provider
    #[error("Identity provider unavailable: {0}")]
    Identity(String),

    /// Failure reaching the subscription status lookup
    #[error("Subscription lookup failed: {0}")]
    Subscription(String),

    /// Failure reaching the platform role check
    #[error("Platform role lookup failed: {0}")]
    AdminCheck(String),
}

/// Result type for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;
