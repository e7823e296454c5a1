//! The types defined here are a representation of the parts of the [CTAP 2.1] specification that
//! describe an authenticator's identity and capabilities.
//!
//! [CTAP 2.1]: https://fidoalliance.org/specs/fido-v2.1-ps-20210615/fido-client-to-authenticator-protocol-v2.1-ps-errata-20220621.html

mod aaguid;

pub mod get_info;

pub use self::aaguid::*;
