use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HubError, HubResult};

/// Supported prop types for a component's customizable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    Text,
    RichText,
    Image,
    Link,
    Video,
    Number,
    /// Boolean toggle. Older data calls this type "boolean".
    #[serde(alias = "boolean")]
    Switch,
}

impl PropKind {
    /// Map a raw type string from older component records onto the current
    /// kind set. Unknown strings degrade to `Text`.
    pub fn from_legacy(raw: &str) -> PropKind {
        match raw {
            "text" => PropKind::Text,
            "rich_text" => PropKind::RichText,
            "image" => PropKind::Image,
            "link" => PropKind::Link,
            "video" => PropKind::Video,
            "number" => PropKind::Number,
            "switch" | "boolean" => PropKind::Switch,
            _ => PropKind::Text,
        }
    }

    /// The blank value a freshly added prop of this kind starts with
    pub fn default_value(&self) -> PropValue {
        match self {
            PropKind::Text | PropKind::RichText | PropKind::Image | PropKind::Link
            | PropKind::Video => PropValue::Text(String::new()),
            PropKind::Number => PropValue::Number(0.0),
            PropKind::Switch => PropValue::Bool(false),
        }
    }

    /// Display name shown in editor chrome
    pub fn label(&self) -> &'static str {
        match self {
            PropKind::Text => "Text",
            PropKind::RichText => "Rich Text",
            PropKind::Image => "Image",
            PropKind::Link => "Link",
            PropKind::Video => "Video",
            PropKind::Number => "Number",
            PropKind::Switch => "Switch",
        }
    }
}

/// A concrete prop value: schema default or instance override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl PropValue {
    /// String coercion used when a bound element displays this value
    pub fn as_text(&self) -> String {
        match self {
            PropValue::Text(s) => s.clone(),
            PropValue::Number(n) => format!("{}", n),
            PropValue::Bool(b) => b.to_string(),
        }
    }

    /// Truthiness used when a bound element derives visibility from this value
    pub fn truthy(&self) -> bool {
        match self {
            PropValue::Text(s) => !s.is_empty(),
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Bool(b) => *b,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// One prop's declared shape: kind, default value, and editor label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDefinition {
    #[serde(rename = "type")]
    pub kind: PropKind,
    pub default: PropValue,
    #[serde(default)]
    pub label: String,
}

impl PropDefinition {
    pub fn text(default: &str, label: &str) -> Self {
        Self {
            kind: PropKind::Text,
            default: PropValue::Text(default.to_string()),
            label: label.to_string(),
        }
    }

    pub fn switch(default: bool, label: &str) -> Self {
        Self {
            kind: PropKind::Switch,
            default: PropValue::Bool(default),
            label: label.to_string(),
        }
    }

    pub fn number(default: f64, label: &str) -> Self {
        Self {
            kind: PropKind::Number,
            default: PropValue::Number(default),
            label: label.to_string(),
        }
    }

    /// A blank definition for a freshly added prop of the given kind
    pub fn blank(kind: PropKind, label: &str) -> Self {
        Self {
            kind,
            default: kind.default_value(),
            label: label.to_string(),
        }
    }
}

/// A component's customizable surface: an ordered mapping of unique prop keys
/// to definitions. Insertion order is the natural display order in editor UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropSchema {
    entries: Vec<(String, PropDefinition)>,
}

impl PropSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop definition. Fails on a duplicate key.
    pub fn insert(&mut self, key: impl Into<String>, def: PropDefinition) -> HubResult<()> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(HubError::DuplicateProp { key });
        }
        self.entries.push((key, def));
        Ok(())
    }

    /// Remove a prop. Instance overrides referencing it become orphaned and
    /// are ignored by resolution from then on.
    pub fn remove(&mut self, key: &str) -> Option<PropDefinition> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Rename a prop in place, keeping its position and definition.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> HubResult<()> {
        let new = new.into();
        if self.contains_key(&new) {
            return Err(HubError::DuplicateProp { key: new });
        }
        match self.entries.iter_mut().find(|(k, _)| k == old) {
            Some(entry) => {
                entry.0 = new;
                Ok(())
            }
            None => Err(HubError::UnknownProp {
                key: old.to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropDefinition> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, def)| def)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropDefinition)> {
        self.entries.iter().map(|(k, def)| (k.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// PropSchema serializes as a plain mapping. Deserialization preserves the
// document's key order and rejects duplicate keys, the same fail-fast rule as
// the insert path.
impl Serialize for PropSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, def) in &self.entries {
            map.serialize_entry(key, def)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = PropSchema;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of prop key to prop definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PropSchema, A::Error> {
                let mut schema = PropSchema::new();
                while let Some((key, def)) = access.next_entry::<String, PropDefinition>()? {
                    schema.insert(key, def).map_err(de::Error::custom)?;
                }
                Ok(schema)
            }
        }

        deserializer.deserialize_map(SchemaVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_preserves_insertion_order() {
        let mut schema = PropSchema::new();
        schema
            .insert("title", PropDefinition::text("Welcome", "Headline"))
            .unwrap();
        schema
            .insert("show_cta", PropDefinition::switch(true, "Show CTA"))
            .unwrap();
        schema
            .insert("cta_text", PropDefinition::text("Get Started", "CTA Text"))
            .unwrap();

        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["title", "show_cta", "cta_text"]);
    }

    #[test]
    fn test_schema_rejects_duplicate_key() {
        let mut schema = PropSchema::new();
        schema
            .insert("title", PropDefinition::text("A", "Title"))
            .unwrap();
        let err = schema
            .insert("title", PropDefinition::text("B", "Title"))
            .unwrap_err();
        assert!(matches!(err, HubError::DuplicateProp { key } if key == "title"));
    }

    #[test]
    fn test_schema_rename_keeps_position() {
        let mut schema = PropSchema::new();
        schema
            .insert("title", PropDefinition::text("A", "Title"))
            .unwrap();
        schema
            .insert("subtitle", PropDefinition::text("B", "Subtitle"))
            .unwrap();
        schema.rename("title", "headline").unwrap();

        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["headline", "subtitle"]);
        assert!(schema.rename("missing", "other").is_err());
        assert!(matches!(
            schema.rename("subtitle", "headline").unwrap_err(),
            HubError::DuplicateProp { .. }
        ));
    }

    #[test]
    fn test_prop_value_coercions() {
        assert_eq!(PropValue::Text("hi".into()).as_text(), "hi");
        assert_eq!(PropValue::Number(3.0).as_text(), "3");
        assert_eq!(PropValue::Number(3.5).as_text(), "3.5");
        assert_eq!(PropValue::Bool(true).as_text(), "true");

        assert!(PropValue::Bool(true).truthy());
        assert!(!PropValue::Bool(false).truthy());
        assert!(!PropValue::Text(String::new()).truthy());
        assert!(PropValue::Text("x".into()).truthy());
        assert!(!PropValue::Number(0.0).truthy());
        assert!(PropValue::Number(0.5).truthy());
        assert!(!PropValue::Number(f64::NAN).truthy());
    }

    #[test]
    fn test_kind_defaults_and_legacy_mapping() {
        assert_eq!(PropKind::Text.default_value(), PropValue::Text(String::new()));
        assert_eq!(PropKind::Number.default_value(), PropValue::Number(0.0));
        assert_eq!(PropKind::Switch.default_value(), PropValue::Bool(false));

        let def = PropDefinition::blank(PropKind::Switch, "Show Icon");
        assert_eq!(def.default, PropValue::Bool(false));
        assert_eq!(def.label, "Show Icon");

        assert_eq!(PropKind::from_legacy("boolean"), PropKind::Switch);
        assert_eq!(PropKind::from_legacy("switch"), PropKind::Switch);
        assert_eq!(PropKind::from_legacy("rich_text"), PropKind::RichText);
        assert_eq!(PropKind::from_legacy("mystery"), PropKind::Text);
    }

    #[test]
    fn test_schema_yaml_round_trip() {
        let yaml = r#"
title:
  type: text
  default: "Welcome to Acme"
  label: Headline
show_cta:
  type: boolean
  default: true
  label: Show CTA
"#;
        let schema: PropSchema = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.len(), 2);
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["title", "show_cta"]);
        // legacy "boolean" maps to switch
        assert_eq!(schema.get("show_cta").unwrap().kind, PropKind::Switch);
        assert_eq!(schema.get("show_cta").unwrap().default, PropValue::Bool(true));

        let out = serde_yaml::to_string(&schema).unwrap();
        let back: PropSchema = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_schema_yaml_rejects_duplicate_key() {
        let yaml = r#"
title: { type: text, default: "A" }
title: { type: text, default: "B" }
"#;
        let result: Result<PropSchema, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
