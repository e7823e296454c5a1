use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{SessionError, SessionHandle, SessionInfo};

/// The state of a logical session with an authenticator.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    /// The authenticator's info when the session state was observed.
    pub info: SessionInfo,

    /// Whether the authenticator is currently unlocked with a PIN or user verification.
    pub unlocked: bool,
}

impl Session {
    /// Build a session from the info cached by `handle`.
    ///
    /// Fails with [`SessionError::NoCachedInfo`] if the handle has not cached any info yet.
    pub fn new<H>(handle: &H, unlocked: bool) -> Result<Self, SessionError>
    where
        H: SessionHandle + ?Sized,
    {
        let cached = handle.cached_info().ok_or(SessionError::NoCachedInfo)?;
        Ok(Self::from_info(SessionInfo::new(&cached), unlocked))
    }

    /// Pair an existing snapshot with the unlocked state.
    pub fn from_info(info: SessionInfo, unlocked: bool) -> Self {
        log::debug!("Session observed, unlocked: {unlocked}");
        Self { info, unlocked }
    }
}

#[cfg(test)]
mod tests;
