//! Error types returned by channel operations.
//!
//! [`LinkError`] covers the two recoverable failures of the crate:
//!
//! - [`LinkError::AlreadyJoined`]: an implicit join was refused because the
//!   subscriber already belongs to a channel.
//! - [`LinkError::ImmutableWriteRejected`]: a write hit a frozen function channel.
//!
//! An empty fan-out is not an error: `emit`/`broadcast` simply return `false`.
//! Both variants provide helper methods (`as_label`, `as_message`) for logging.

use thiserror::Error;

/// # Errors produced by subscription and binding operations.
///
/// Every variant is recoverable and leaves the target state untouched.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The subscriber is already joined to a channel (explicit or implicit).
    ///
    /// Disconnect it first, then retry.
    #[error("subscriber is already joined to a channel")]
    AlreadyJoined,

    /// The function channel is frozen; the existing binding is authoritative.
    #[error("function channel is immutable; write rejected")]
    ImmutableWriteRejected,
}

impl LinkError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use intercast::LinkError;
    ///
    /// assert_eq!(LinkError::AlreadyJoined.as_label(), "already_joined");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LinkError::AlreadyJoined => "already_joined",
            LinkError::ImmutableWriteRejected => "immutable_write_rejected",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LinkError::AlreadyJoined => {
                "subscriber already linked; disconnect before joining another channel".to_string()
            }
            LinkError::ImmutableWriteRejected => {
                "binding frozen by set_immutable; only the existing function is callable".to_string()
            }
        }
    }
}
