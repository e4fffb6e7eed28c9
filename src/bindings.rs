use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::ElementDecl;
use crate::resolver::ResolvedProps;

/// Which prop keys one element's content and visibility are wired to.
/// Either side may be unwired.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementBinding {
    pub content: Option<String>,
    pub visibility: Option<String>,
}

/// Per-component map of element id to binding.
///
/// Content is soft-wired: a binding pointing at a prop key the schema no
/// longer has degrades to the element's static fallback at render time. A
/// component with zero bindings renders identically to one fully wired to
/// props that merely echo the fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementBindings {
    #[serde(flatten)]
    map: HashMap<String, ElementBinding>,
}

impl ElementBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the map from a component kind's element declarations, wiring each
    /// element to its declared default props.
    pub fn from_declarations(decls: &[ElementDecl]) -> Self {
        let mut map = HashMap::with_capacity(decls.len());
        for el in decls {
            map.insert(
                el.id.to_string(),
                ElementBinding {
                    content: el.content.map(str::to_string),
                    visibility: el.visibility.map(str::to_string),
                },
            );
        }
        Self { map }
    }

    pub fn get(&self, element_id: &str) -> Option<&ElementBinding> {
        self.map.get(element_id)
    }

    /// Rewire (or unwire, with `None`) an element's content binding.
    /// Unknown element ids get a fresh entry.
    pub fn set_content(&mut self, element_id: &str, prop_key: Option<String>) {
        self.map.entry(element_id.to_string()).or_default().content = prop_key;
    }

    /// Rewire (or unwire, with `None`) an element's visibility binding.
    pub fn set_visibility(&mut self, element_id: &str, prop_key: Option<String>) {
        self.map
            .entry(element_id.to_string())
            .or_default()
            .visibility = prop_key;
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Resolve an element's displayed text.
///
/// Returns the bound prop's string coercion when the element has a content
/// binding and the resolved props contain that key; in every other case the
/// static fallback is returned unchanged. Total: orphaned bindings degrade
/// silently.
pub fn resolve_content(
    element_id: &str,
    fallback: &str,
    bindings: &ElementBindings,
    props: &ResolvedProps,
) -> String {
    bindings
        .get(element_id)
        .and_then(|b| b.content.as_deref())
        .and_then(|key| props.text(key))
        .unwrap_or_else(|| fallback.to_string())
}

/// Resolve an element's visibility.
///
/// Returns the boolean coercion of the bound prop's value (never the raw
/// value) when the element has a visibility binding and the resolved props
/// contain that key; otherwise the fallback unchanged.
pub fn resolve_visible(
    element_id: &str,
    fallback: bool,
    bindings: &ElementBindings,
    props: &ResolvedProps,
) -> bool {
    bindings
        .get(element_id)
        .and_then(|b| b.visibility.as_deref())
        .and_then(|key| props.truthy(key))
        .unwrap_or(fallback)
}
