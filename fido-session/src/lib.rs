//! # FIDO Session
//!
//! Typed, immutable and serializable snapshots of a FIDO2 authenticator's state, built from the
//! loosely typed `authenticatorGetInfo` response handed over by a CTAP2 transport.
//!
//! ```
//! use fido_session::{Options, SessionInfo};
//! use fido_types::ctap2::get_info::Response;
//!
//! let mut response = Response::default();
//! response.min_pin_length = Some(6);
//!
//! let info = SessionInfo::new(&response);
//! assert_eq!(info.options, Options::default());
//! assert_eq!(info.min_pin_length, 6);
//! assert_eq!(info.options.bio_enroll, None);
//! ```
//!
//! The records only ever copy data out of the transport's types, they keep no reference to the
//! transport and can be shared freely between threads or sent to a UI layer.

mod error;
mod options;
mod session;
mod session_info;
mod source;

pub use self::{
    error::SessionError,
    options::Options,
    session::Session,
    session_info::SessionInfo,
    source::{InfoSource, SessionHandle},
};

#[cfg(feature = "testable")]
pub use self::source::MockSessionHandle;
