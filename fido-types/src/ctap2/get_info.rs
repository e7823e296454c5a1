//! <https://fidoalliance.org/specs/fido-v2.1-ps-20210615/fido-client-to-authenticator-protocol-v2.1-ps-errata-20220621.html#authenticatorGetInfo>
use std::{fmt, ops::Deref};

use ciborium::value::Value;
use indexmap::IndexMap;
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use super::Aaguid;
use crate::CapabilityMap;

/// The minimum PIN length an authenticator enforces when it does not report `minPINLength`.
pub const DEFAULT_MIN_PIN_LENGTH: u32 = 4;

serde_workaround! {
    /// An Authenticator's metadata and capabilities, as returned by `authenticatorGetInfo`.
    ///
    /// Only the members an authenticator management application inspects are kept, all other
    /// members are skipped while decoding.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Response {
        /// List of supported versions, e.g. "FIDO_2_0", "FIDO_2_1" or "U2F_V2".
        #[serde(rename = 0x01)]
        pub versions: Vec<String>,

        /// List of supported extensions. (Optional)
        #[serde(rename = 0x02; default, skip_serializing_if = Option::is_none)]
        pub extensions: Option<Vec<String>>,

        /// The claimed AAGUID. 16 bytes in length
        #[serde(rename = 0x03)]
        pub aaguid: Aaguid,

        /// List of supported options.
        #[serde(rename = 0x04; default, skip_serializing_if = Option::is_none)]
        pub options: Option<RawOptions>,

        /// If present and set to true, getPinToken and getPinUvAuthTokenUsingPinWithPermissions
        /// will return errors until after a successful PIN Change.
        #[serde(rename = 0x0C; default, skip_serializing_if = Option::is_none)]
        pub force_pin_change: Option<bool>,

        /// The current minimum PIN length, in Unicode code points, the authenticator enforces
        /// for ClientPIN.
        #[serde(rename = 0x0D; default, skip_serializing_if = Option::is_none)]
        pub min_pin_length: Option<u32>,

        /// The firmware version of the authenticator model identified by AAGUID.
        #[serde(rename = 0x0E; default, skip_serializing_if = Option::is_none)]
        pub firmware_version: Option<u32>,
    }
}

impl Response {
    /// Decode a GetInfo response from the CBOR payload following the status byte.
    pub fn from_cbor(data: &[u8]) -> Result<Self, ciborium::de::Error<std::io::Error>> {
        ciborium::de::from_reader(data)
    }

    /// The minimum PIN length, falling back to [`DEFAULT_MIN_PIN_LENGTH`] when absent.
    pub fn min_pin_length_or_default(&self) -> u32 {
        self.min_pin_length.unwrap_or(DEFAULT_MIN_PIN_LENGTH)
    }

    /// Whether a PIN change is required. Absent means no PIN change is required.
    pub fn force_pin_change_or_default(&self) -> bool {
        self.force_pin_change.unwrap_or_default()
    }
}

/// The untyped option map of a GetInfo response, in the order the authenticator sent it.
///
/// Option IDs are text strings. Authenticators are free to add vendor options and do not always
/// respect the boolean value type, so values are kept as they were received. Entries whose key is
/// not a text string are skipped rather than failing the whole response.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawOptions(IndexMap<String, Value>);

impl Deref for RawOptions {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<IndexMap<String, Value>> for RawOptions {
    fn from(inner: IndexMap<String, Value>) -> Self {
        RawOptions(inner)
    }
}

impl FromIterator<(String, Value)> for RawOptions {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        RawOptions(iter.into_iter().collect())
    }
}

impl CapabilityMap for RawOptions {
    type Value = Value;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        self.0.get(key)
    }
}

impl<'de> Deserialize<'de> for RawOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawOptionsVisitor;

        impl<'de> Visitor<'de> for RawOptionsVisitor {
            type Value = RawOptions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of option IDs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut options = IndexMap::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((key, value)) = map.next_entry::<Value, Value>()? {
                    match key {
                        Value::Text(key) => {
                            options.insert(key, value);
                        }
                        other => log::debug!("Skipping option with non-text ID {other:?}"),
                    }
                }
                Ok(RawOptions(options))
            }
        }

        deserializer.deserialize_map(RawOptionsVisitor)
    }
}

#[cfg(test)]
mod tests;
