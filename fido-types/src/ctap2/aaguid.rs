use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{encoding, Bytes};

/// An Authenticator Attestation GUID is a 128-bit identifier.
///
/// It indicates the type (e.g. make and model) of an Authenticator. Manufacturers are
/// [recommended][spec] to use the same AAGUID across all substantially identical authenticators,
/// which is what makes it useful for looking the model up in metadata. Authenticators doing self
/// or no attestation report an AAGUID made of only `0`s.
///
/// The value is opaque: it is only ever compared, displayed and serialized byte for byte.
///
/// [spec]: https://w3c.github.io/webauthn/#sctn-authenticator-model
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Aaguid(pub [u8; Self::LEN]);

impl Aaguid {
    /// Length in bytes of an AAGUID.
    pub const LEN: usize = 16;

    /// Generate empty AAGUID
    pub const fn new_empty() -> Self {
        Self([0; Self::LEN])
    }

    /// Whether this is the all-zero AAGUID used without attestation.
    pub fn is_empty(&self) -> bool {
        self.0 == [0; Self::LEN]
    }

    /// The raw bytes of the AAGUID.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Aaguid {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl From<[u8; Aaguid::LEN]> for Aaguid {
    fn from(inner: [u8; Aaguid::LEN]) -> Self {
        Aaguid(inner)
    }
}

impl TryFrom<&[u8]> for Aaguid {
    type Error = std::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Aaguid)
    }
}

impl From<Aaguid> for Bytes {
    fn from(src: Aaguid) -> Self {
        src.0.into()
    }
}

/// Formats as a lowercase UUID, e.g. `ee882879-721c-4913-9775-3dfcce97072a`.
impl fmt::Display for Aaguid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = encoding::hex(&self.0);
        write!(
            f,
            "{}-{}-{}-{}-{}",
            &hex[..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..]
        )
    }
}

impl Serialize for Aaguid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Aaguid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AaguidVisitor;
        impl<'de> serde::de::Visitor<'de> for AaguidVisitor {
            type Value = Aaguid;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "A byte string of {} bytes long", Aaguid::LEN)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Aaguid::try_from(v).map_err(|_| {
                    E::invalid_length(v.len(), &"a byte string of 16 bytes")
                })
            }
        }
        deserializer.deserialize_bytes(AaguidVisitor)
    }
}
