//! The upstream collaborators a [`SessionInfo`](crate::SessionInfo) is built from.

use fido_types::{
    ctap2::get_info::{RawOptions, Response},
    CapabilityMap,
};

/// A supplier of an authenticator's info, typically a decoded `authenticatorGetInfo` response.
pub trait InfoSource {
    /// The type of the untyped option map.
    type Options: CapabilityMap + ?Sized;

    /// The supported options.
    fn options(&self) -> &Self::Options;

    /// The claimed AAGUID.
    fn aaguid(&self) -> &[u8];

    /// The minimum PIN length the authenticator enforces.
    fn min_pin_length(&self) -> u32;

    /// Whether the PIN must be changed before it can be used.
    fn force_pin_change(&self) -> bool;
}

impl<I: InfoSource + ?Sized> InfoSource for &I {
    type Options = I::Options;

    fn options(&self) -> &Self::Options {
        (**self).options()
    }

    fn aaguid(&self) -> &[u8] {
        (**self).aaguid()
    }

    fn min_pin_length(&self) -> u32 {
        (**self).min_pin_length()
    }

    fn force_pin_change(&self) -> bool {
        (**self).force_pin_change()
    }
}

impl InfoSource for Response {
    type Options = Option<RawOptions>;

    fn options(&self) -> &Self::Options {
        &self.options
    }

    fn aaguid(&self) -> &[u8] {
        self.aaguid.as_slice()
    }

    fn min_pin_length(&self) -> u32 {
        self.min_pin_length_or_default()
    }

    fn force_pin_change(&self) -> bool {
        self.force_pin_change_or_default()
    }
}

/// A live connection to an authenticator which caches the last GetInfo response it received.
#[cfg_attr(any(test, feature = "testable"), mockall::automock(type Info = Response;))]
pub trait SessionHandle {
    /// The type of the cached info.
    type Info: InfoSource;

    /// A snapshot of the cached info, or `None` if the authenticator was not queried yet.
    fn cached_info(&self) -> Option<Self::Info>;
}
