use serde::{Deserialize, Serialize};

use crate::props::PropSchema;

/// The closed set of component types the hub knows how to preview.
///
/// Every kind has one authoritative element declaration list (see
/// [`crate::elements::declarations`]) and one builtin renderer registered by
/// [`crate::preview::RendererRegistry::with_builtins`]. Adding a kind means
/// adding a variant here; the exhaustive matches downstream then refuse to
/// compile until the declarations and renderer exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    PrimaryButton,
    NavigationBar,
    Card,
    Hero,
    PricingTable,
    Testimonial,
    SecondaryButton,
    FeatureRow,
    Stats,
    CtaBanner,
    Footer,
    FeaturesGrid,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 12] = [
        ComponentKind::PrimaryButton,
        ComponentKind::NavigationBar,
        ComponentKind::Card,
        ComponentKind::Hero,
        ComponentKind::PricingTable,
        ComponentKind::Testimonial,
        ComponentKind::SecondaryButton,
        ComponentKind::FeatureRow,
        ComponentKind::Stats,
        ComponentKind::CtaBanner,
        ComponentKind::Footer,
        ComponentKind::FeaturesGrid,
    ];

    /// Display name shown in library chrome and the generic placeholder
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::PrimaryButton => "Primary Button",
            ComponentKind::NavigationBar => "Navigation Bar",
            ComponentKind::Card => "Card",
            ComponentKind::Hero => "Hero Section",
            ComponentKind::PricingTable => "Pricing Table",
            ComponentKind::Testimonial => "Testimonial Block",
            ComponentKind::SecondaryButton => "Secondary Button",
            ComponentKind::FeatureRow => "Feature Row",
            ComponentKind::Stats => "Stats Section",
            ComponentKind::CtaBanner => "CTA Banner",
            ComponentKind::Footer => "Footer",
            ComponentKind::FeaturesGrid => "Features Grid",
        }
    }
}

/// A shared component owned by a library.
///
/// `html_structure` and `css_styles` are the component's exportable source
/// strings; the preview pipeline renders from the kind's builtin layout, not
/// from these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignComponent {
    pub id: String,
    pub library_id: String,
    pub name: String,
    pub kind: ComponentKind,
    #[serde(default)]
    pub html_structure: String,
    #[serde(default)]
    pub css_styles: String,
    pub props_schema: PropSchema,
}

impl DesignComponent {
    pub fn new(
        id: impl Into<String>,
        library_id: impl Into<String>,
        name: impl Into<String>,
        kind: ComponentKind,
        props_schema: PropSchema,
    ) -> Self {
        Self {
            id: id.into(),
            library_id: library_id.into(),
            name: name.into(),
            kind,
            html_structure: String::new(),
            css_styles: String::new(),
            props_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_cover_all_variants() {
        for kind in ComponentKind::ALL {
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn test_kind_serde_uses_kebab_case() {
        let yaml = serde_yaml::to_string(&ComponentKind::NavigationBar).unwrap();
        assert_eq!(yaml.trim(), "navigation-bar");
        let kind: ComponentKind = serde_yaml::from_str("cta-banner").unwrap();
        assert_eq!(kind, ComponentKind::CtaBanner);
    }
}
