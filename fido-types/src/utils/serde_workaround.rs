/// Derives [`serde::Deserialize`] and [`serde::Serialize`] for a struct whose field identifiers
/// are integers rather than strings, as in the CTAP2 CBOR maps. Serde derives can only name
/// struct fields with strings, including when using the `#[serde(rename)]` attribute.
///
/// Each field carries its integer key, optionally followed by `default` and a
/// `skip_serializing_if` predicate. Fields without `default` are required. Keys that are not
/// listed, including non-integer keys, are skipped while deserializing and a key seen twice is an
/// error.
///
/// Issues to keep an eye on for this workaround to no longer be relevant:
/// * rename for struct fields: <https://github.com/serde-rs/serde/pull/2209>
macro_rules! serde_workaround {
    (
        $(#[$attr:meta])*
        pub struct $name:ident {$(
            $(#[doc=$doc:literal])*
            #[serde(rename = $key:literal $(; $default:ident, skip_serializing_if = $skip:path)?)]
            $vis:vis $field:ident: $ty:ty,
        )*}
    ) => {
        $(#[$attr])*
        pub struct $name {$(
            $(#[doc=$doc])*
            $vis $field: $ty,
        )*}

        #[doc(hidden)]
        const _: () = {
            use serde::{
                de::{IgnoredAny, MapAccess},
                ser::SerializeMap,
                Deserialize, Serialize,
            };

            #[allow(non_camel_case_types)]
            #[derive(Clone, Copy)]
            enum Ident {
                $($field,)*
                Unknown,
            }

            impl Ident {
                fn from_key(key: u64) -> Self {
                    match key {
                        $($key => Ident::$field,)*
                        _ => Ident::Unknown,
                    }
                }

                fn name(self) -> &'static str {
                    match self {
                        $(Ident::$field => stringify!($field),)*
                        Ident::Unknown => "unknown",
                    }
                }
            }

            struct IdentVisitor;

            impl serde::de::Visitor<'_> for IdentVisitor {
                type Value = Ident;

                fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    f.write_str("an integer field identifier")
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    Ok(Ident::from_key(v))
                }

                fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    Ok(u64::try_from(v).map_or(Ident::Unknown, Ident::from_key))
                }

                fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    Ok(u64::try_from(v).map_or(Ident::Unknown, Ident::from_key))
                }

                fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    Ok(u64::try_from(v).map_or(Ident::Unknown, Ident::from_key))
                }

                fn visit_str<E>(self, _v: &str) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    Ok(Ident::Unknown)
                }
            }

            impl<'de> Deserialize<'de> for Ident {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    deserializer.deserialize_any(IdentVisitor)
                }
            }

            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    let len = 0 $(+ serde_workaround_struct_len!(self.$field $(; $skip)?))*;
                    let mut state = serializer.serialize_map(Some(len))?;
                    $(
                        serde_serialize_entry!(state; $key; self.$field $(; $skip)?);
                    )*
                    state.end()
                }
            }

            struct Visitor;

            impl<'de> serde::de::Visitor<'de> for Visitor {
                type Value = $name;

                fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    f.write_str(concat!("struct ", stringify!($name)))
                }

                fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    $(
                        let mut $field: Option<$ty> = None;
                    )*

                    while let Some(ident) = map.next_key::<Ident>()? {
                        match ident {
                            $(
                                Ident::$field => {
                                    if $field.is_some() {
                                        return Err(<A::Error as serde::de::Error>::duplicate_field(
                                            ident.name(),
                                        ));
                                    }
                                    $field = Some(map.next_value()?);
                                }
                            )*
                            Ident::Unknown => {
                                log::debug!(concat!("Skipping unsupported ", stringify!($name), " member"));
                                map.next_value::<IgnoredAny>()?;
                            }
                        }
                    }

                    Ok($name {
                        $($field: serde_visit_map!($field; Ident::$field $(; $default)?),)*
                    })
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    deserializer.deserialize_map(Visitor)
                }
            }
        };
    };
}

macro_rules! serde_workaround_struct_len {
    ($field:expr; $skip_if:path) => {
        if $skip_if(&$field) {
            0
        } else {
            1
        }
    };
    ($field:expr) => {
        1
    };
}

macro_rules! serde_serialize_entry {
    ($state:ident; $key:literal; $field:expr; $skip_if:path) => {
        if !$skip_if(&$field) {
            serde_serialize_entry!($state; $key; $field)
        }
    };
    ($state:ident; $key:literal; $field:expr) => {{
        let key: u8 = $key;
        $state.serialize_entry(&key, &$field)?;
    }};
}

macro_rules! serde_visit_map {
    ($field:ident; $ident:expr; default) => {
        $field.unwrap_or_default()
    };
    ($field:ident; $ident:expr) => {
        $field.ok_or_else(|| <A::Error as serde::de::Error>::missing_field($ident.name()))?
    };
}
