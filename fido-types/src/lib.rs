//! # FIDO Types
//!
//! Wire level type definitions for the parts of the [CTAP 2.1] `authenticatorGetInfo` response
//! that an authenticator management application inspects.
//!
//! The capability map returned by an authenticator is loosely typed: every option is a string
//! key with a value that *should* be a boolean. [`CapabilityMap`] abstracts over the different
//! map representations such a response may be decoded into so that typed records can be built
//! from any of them.
//!
//! [CTAP 2.1]: https://fidoalliance.org/specs/fido-v2.1-ps-20210615/fido-client-to-authenticator-protocol-v2.1-ps-errata-20220621.html

#[macro_use]
mod utils;
mod capability;

pub mod ctap2;

// Re-exports
pub use capability::{CapabilityMap, OptionValue};
pub use utils::{
    bytes::{Bytes, NotBase64Encoded},
    encoding,
};
