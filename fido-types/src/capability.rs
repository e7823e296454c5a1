//! Lookup over the untyped option map of an `authenticatorGetInfo` response.
//!
//! > All options are in the form of key-value pairs with string IDs and boolean values.
//!
//! Authenticators do not always follow that wording, and transports hand the map over in
//! whatever representation they decoded it into. The traits here let typed records query any of
//! those representations without caring about the concrete map or value type.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use indexmap::IndexMap;

/// A loosely typed value stored in a capability map.
pub trait OptionValue {
    /// The boolean held by this value, or `None` if it holds anything else.
    fn as_bool(&self) -> Option<bool>;
}

impl OptionValue for bool {
    fn as_bool(&self) -> Option<bool> {
        Some(*self)
    }
}

impl OptionValue for ciborium::value::Value {
    fn as_bool(&self) -> Option<bool> {
        ciborium::value::Value::as_bool(self)
    }
}

impl OptionValue for serde_json::Value {
    fn as_bool(&self) -> Option<bool> {
        serde_json::Value::as_bool(self)
    }
}

impl<V: OptionValue + ?Sized> OptionValue for &V {
    fn as_bool(&self) -> Option<bool> {
        (**self).as_bool()
    }
}

impl<V: OptionValue> OptionValue for Option<V> {
    fn as_bool(&self) -> Option<bool> {
        self.as_ref().and_then(OptionValue::as_bool)
    }
}

/// A read only mapping from capability name to a value of unspecified type.
pub trait CapabilityMap {
    /// The type of the values in the map.
    type Value: OptionValue + ?Sized;

    /// Look up the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<&Self::Value>;

    /// The boolean stored under `key`.
    ///
    /// Returns `default` when the key is absent or when its value is not a boolean.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_optional_bool(key).unwrap_or(default)
    }

    /// The boolean stored under `key`, or `None` when the key is absent or its value is not a
    /// boolean.
    fn get_optional_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    /// Whether `key` is present in the map, regardless of its value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<M: CapabilityMap + ?Sized> CapabilityMap for &M {
    type Value = M::Value;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        (**self).get(key)
    }
}

impl<M: CapabilityMap> CapabilityMap for Option<M> {
    type Value = M::Value;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        self.as_ref().and_then(|map| map.get(key))
    }
}

impl<V: OptionValue, S: BuildHasher> CapabilityMap for HashMap<String, V, S> {
    type Value = V;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        HashMap::get(self, key)
    }
}

impl<V: OptionValue> CapabilityMap for BTreeMap<String, V> {
    type Value = V;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        BTreeMap::get(self, key)
    }
}

impl<V: OptionValue, S: BuildHasher> CapabilityMap for IndexMap<String, V, S> {
    type Value = V;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        IndexMap::get(self, key)
    }
}

impl CapabilityMap for serde_json::Map<String, serde_json::Value> {
    type Value = serde_json::Value;

    fn get(&self, key: &str) -> Option<&Self::Value> {
        serde_json::Map::get(self, key)
    }
}
