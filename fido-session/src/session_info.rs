use fido_types::{
    ctap2::{get_info::Response, Aaguid},
    Bytes,
};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{InfoSource, Options};

/// A snapshot of an authenticator's info, taken from its `authenticatorGetInfo` response.
///
/// Two snapshots are equal, and hash alike, when their options, the bytes of their AAGUIDs and
/// their PIN requirements are equal. The AAGUID is owned by the snapshot, so changes to the
/// buffer it was copied from are never observed.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionInfo {
    /// The capability flags of the authenticator.
    pub options: Options,

    /// The AAGUID the authenticator claims, compared byte for byte.
    pub aaguid: Bytes,

    /// The minimum PIN length, in Unicode code points, the authenticator enforces.
    #[serde(rename = "min_pin_length")]
    pub min_pin_length: u32,

    /// A PIN change is required before the PIN can be used again.
    #[serde(rename = "force_pin_change")]
    pub force_pin_change: bool,
}

impl SessionInfo {
    /// Build a snapshot from an authenticator's info.
    ///
    /// The AAGUID is copied into a buffer owned by the snapshot. Values are taken as reported,
    /// in particular the minimum PIN length is not range checked.
    pub fn new<I>(info: &I) -> Self
    where
        I: InfoSource + ?Sized,
    {
        Self {
            options: Options::from_capabilities(info.options()),
            aaguid: Bytes::from(info.aaguid()),
            min_pin_length: info.min_pin_length(),
            force_pin_change: info.force_pin_change(),
        }
    }

    /// The AAGUID as a typed identifier, if it has the expected length.
    pub fn parsed_aaguid(&self) -> Option<Aaguid> {
        Aaguid::try_from(&*self.aaguid).ok()
    }
}

impl From<&Response> for SessionInfo {
    fn from(response: &Response) -> Self {
        Self::new(response)
    }
}
