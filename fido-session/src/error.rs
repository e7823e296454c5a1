use std::fmt;

/// Errors raised while building a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The session handle has not cached an `authenticatorGetInfo` response yet.
    NoCachedInfo,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoCachedInfo => {
                f.write_str("the session has no cached authenticator info")
            }
        }
    }
}

impl std::error::Error for SessionError {}
