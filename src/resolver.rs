use std::collections::HashMap;

use crate::props::{PropSchema, PropValue};

/// Instance-level prop overrides. Any subset (or superset, including stale
/// keys) of a schema's keys.
pub type Overrides = HashMap<String, PropValue>;

/// The complete value map for one render pass: every schema key resolved to
/// its override value or its schema default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedProps {
    values: HashMap<String, PropValue>,
}

impl ResolvedProps {
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// String coercion of the value under `key`, if present
    pub fn text(&self, key: &str) -> Option<String> {
        self.values.get(key).map(PropValue::as_text)
    }

    /// Truthiness of the value under `key`, if present
    pub fn truthy(&self, key: &str) -> Option<bool> {
        self.values.get(key).map(PropValue::truthy)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// View the resolved values as an override map. Feeding this back into
    /// [`resolve`] reproduces the same output (idempotence).
    pub fn to_overrides(&self) -> Overrides {
        self.values.clone()
    }
}

/// Merge instance overrides onto schema defaults.
///
/// For every key in the schema the output holds the override value when one
/// is present, else the schema default. Keys present only in the overrides
/// (stale data after a schema shrink or rename) are dropped silently. Pure
/// and total: never fails, never logs.
pub fn resolve(schema: &PropSchema, overrides: &Overrides) -> ResolvedProps {
    let mut values = HashMap::with_capacity(schema.len());
    for (key, def) in schema.iter() {
        let value = overrides
            .get(key)
            .cloned()
            .unwrap_or_else(|| def.default.clone());
        values.insert(key.to_string(), value);
    }
    ResolvedProps { values }
}
