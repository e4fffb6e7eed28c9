use serde::{Deserialize, Serialize};

use crate::component::ComponentKind;
use crate::props::PropKind;

/// The kinds of bindable visual elements inside a component's fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Text,
    Button,
    Image,
    Container,
    Link,
    Badge,
}

/// One bindable slot in a component's layout.
///
/// Declarations are the single source of truth for element ids: the builtin
/// renderers and the binding layer both reference these consts, so a drifted
/// id is a compile error rather than a silently dead binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDecl {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ElementKind,
    /// Prop key this element's text content is wired to by default
    pub content: Option<&'static str>,
    /// Prop key this element's visibility is gated on by default
    pub visibility: Option<&'static str>,
}

const fn decl(
    id: &'static str,
    label: &'static str,
    kind: ElementKind,
    content: Option<&'static str>,
    visibility: Option<&'static str>,
) -> ElementDecl {
    ElementDecl {
        id,
        label,
        kind,
        content,
        visibility,
    }
}

// ─── Primary / secondary buttons ─────────────────────────────────────────────

pub const BTN_PRI_TEXT: ElementDecl = decl(
    "el-btn-pri-text",
    "Button Text",
    ElementKind::Button,
    Some("button_text"),
    None,
);
pub const BTN_PRI_ICON: ElementDecl = decl(
    "el-btn-pri-icon",
    "Icon",
    ElementKind::Badge,
    None,
    Some("show_icon"),
);

pub const BTN_SEC_TEXT: ElementDecl = decl(
    "el-btn-sec-text",
    "Button Text",
    ElementKind::Button,
    Some("label"),
    None,
);
pub const BTN_SEC_ICON: ElementDecl = decl(
    "el-btn-sec-icon",
    "Icon",
    ElementKind::Badge,
    None,
    Some("show_icon"),
);

// ─── Navigation bar ──────────────────────────────────────────────────────────

pub const NAV_LOGO: ElementDecl = decl(
    "el-nav-logo",
    "Logo Text",
    ElementKind::Heading,
    Some("logo_text"),
    None,
);
pub const NAV_PRODUCTS: ElementDecl = decl(
    "el-nav-products",
    "Nav Link: Products",
    ElementKind::Link,
    None,
    None,
);
pub const NAV_SOLUTIONS: ElementDecl = decl(
    "el-nav-solutions",
    "Nav Link: Solutions",
    ElementKind::Link,
    None,
    None,
);
pub const NAV_PRICING: ElementDecl = decl(
    "el-nav-pricing",
    "Nav Link: Pricing",
    ElementKind::Link,
    None,
    None,
);
pub const NAV_RESOURCES: ElementDecl = decl(
    "el-nav-resources",
    "Nav Link: Resources",
    ElementKind::Link,
    None,
    None,
);
pub const NAV_CTA: ElementDecl = decl(
    "el-nav-cta",
    "CTA Button",
    ElementKind::Button,
    None,
    Some("show_cta"),
);

// ─── Hero section ────────────────────────────────────────────────────────────

pub const HERO_BADGE: ElementDecl =
    decl("el-hero-badge", "Badge", ElementKind::Badge, None, None);
pub const HERO_TITLE: ElementDecl = decl(
    "el-hero-title",
    "Heading Large",
    ElementKind::Heading,
    Some("title"),
    None,
);
pub const HERO_SUBTITLE: ElementDecl = decl(
    "el-hero-subtitle",
    "Paragraph",
    ElementKind::Text,
    Some("subtitle"),
    None,
);
pub const HERO_CTA: ElementDecl = decl(
    "el-hero-cta",
    "Primary Button",
    ElementKind::Button,
    Some("cta_text"),
    Some("show_cta"),
);
pub const HERO_SECONDARY: ElementDecl = decl(
    "el-hero-secondary",
    "Secondary Button",
    ElementKind::Button,
    None,
    Some("show_cta"),
);

// ─── Card ────────────────────────────────────────────────────────────────────

pub const CARD_IMAGE: ElementDecl = decl(
    "el-card-image",
    "Cover Image",
    ElementKind::Image,
    None,
    Some("show_image"),
);
pub const CARD_TITLE: ElementDecl = decl(
    "el-card-title",
    "Card Title",
    ElementKind::Heading,
    Some("title"),
    None,
);
pub const CARD_SUBTITLE: ElementDecl = decl(
    "el-card-subtitle",
    "Card Subtitle",
    ElementKind::Text,
    Some("subtitle"),
    None,
);
pub const CARD_LINK: ElementDecl = decl(
    "el-card-link",
    "Learn More Link",
    ElementKind::Link,
    None,
    None,
);

// ─── Pricing table ───────────────────────────────────────────────────────────

pub const PRICE_BADGE: ElementDecl = decl(
    "el-price-badge",
    "Popular Badge",
    ElementKind::Badge,
    None,
    Some("show_badge"),
);
pub const PRICE_NAME: ElementDecl = decl(
    "el-price-name",
    "Plan Name",
    ElementKind::Heading,
    Some("plan_name"),
    None,
);
pub const PRICE_AMOUNT: ElementDecl = decl(
    "el-price-amount",
    "Price",
    ElementKind::Heading,
    Some("price"),
    None,
);
pub const PRICE_CTA: ElementDecl = decl(
    "el-price-cta",
    "Subscribe Button",
    ElementKind::Button,
    None,
    None,
);

// ─── Testimonial ─────────────────────────────────────────────────────────────

pub const QUOTE_TEXT: ElementDecl = decl(
    "el-quote-text",
    "Quote",
    ElementKind::Text,
    Some("quote"),
    None,
);
pub const QUOTE_AUTHOR: ElementDecl = decl(
    "el-quote-author",
    "Author",
    ElementKind::Heading,
    Some("author"),
    None,
);
pub const QUOTE_AVATAR: ElementDecl = decl(
    "el-quote-avatar",
    "Avatar",
    ElementKind::Container,
    None,
    Some("show_avatar"),
);

// ─── Feature row ─────────────────────────────────────────────────────────────

pub const FEAT_STEP: ElementDecl = decl(
    "el-feat-step",
    "Step Badge",
    ElementKind::Badge,
    Some("step_number"),
    Some("show_step"),
);
pub const FEAT_TITLE: ElementDecl = decl(
    "el-feat-title",
    "Feature Title",
    ElementKind::Heading,
    Some("title"),
    None,
);
pub const FEAT_DESC: ElementDecl = decl(
    "el-feat-desc",
    "Description",
    ElementKind::Text,
    Some("description"),
    None,
);
pub const FEAT_LINK: ElementDecl = decl(
    "el-feat-link",
    "Learn More Link",
    ElementKind::Link,
    None,
    None,
);
pub const FEAT_IMAGE: ElementDecl = decl(
    "el-feat-image",
    "Feature Image",
    ElementKind::Image,
    None,
    None,
);

// ─── Stats section ───────────────────────────────────────────────────────────

pub const STAT_1_VALUE: ElementDecl = decl(
    "el-stat-1-val",
    "Stat 1 Value",
    ElementKind::Heading,
    Some("stat_1_value"),
    None,
);
pub const STAT_1_LABEL: ElementDecl = decl(
    "el-stat-1-lbl",
    "Stat 1 Label",
    ElementKind::Text,
    Some("stat_1_label"),
    None,
);
pub const STAT_2_VALUE: ElementDecl = decl(
    "el-stat-2-val",
    "Stat 2 Value",
    ElementKind::Heading,
    Some("stat_2_value"),
    None,
);
pub const STAT_2_LABEL: ElementDecl = decl(
    "el-stat-2-lbl",
    "Stat 2 Label",
    ElementKind::Text,
    Some("stat_2_label"),
    None,
);
pub const STAT_3_VALUE: ElementDecl = decl(
    "el-stat-3-val",
    "Stat 3 Value",
    ElementKind::Heading,
    Some("stat_3_value"),
    None,
);
pub const STAT_3_LABEL: ElementDecl = decl(
    "el-stat-3-lbl",
    "Stat 3 Label",
    ElementKind::Text,
    Some("stat_3_label"),
    None,
);

// ─── CTA banner ──────────────────────────────────────────────────────────────

pub const CTA_TITLE: ElementDecl = decl(
    "el-cta-title",
    "Headline",
    ElementKind::Heading,
    Some("title"),
    None,
);
pub const CTA_SUBTITLE: ElementDecl = decl(
    "el-cta-subtitle",
    "Subtitle",
    ElementKind::Text,
    Some("subtitle"),
    None,
);
pub const CTA_BTN: ElementDecl = decl(
    "el-cta-btn",
    "Primary Button",
    ElementKind::Button,
    Some("cta_text"),
    None,
);
pub const CTA_SECONDARY: ElementDecl = decl(
    "el-cta-secondary",
    "Secondary Button",
    ElementKind::Button,
    None,
    Some("show_secondary_cta"),
);

// ─── Footer ──────────────────────────────────────────────────────────────────

pub const FOOTER_NAME: ElementDecl = decl(
    "el-footer-name",
    "Company Name",
    ElementKind::Heading,
    Some("company_name"),
    None,
);
pub const FOOTER_TAGLINE: ElementDecl = decl(
    "el-footer-tagline",
    "Tagline",
    ElementKind::Text,
    Some("tagline"),
    None,
);
pub const FOOTER_SOCIAL: ElementDecl = decl(
    "el-footer-social",
    "Social Links",
    ElementKind::Container,
    None,
    Some("show_social"),
);

// ─── Features grid ───────────────────────────────────────────────────────────

pub const GRID_TITLE: ElementDecl = decl(
    "el-grid-title",
    "Section Title",
    ElementKind::Heading,
    Some("title"),
    None,
);
pub const GRID_SUBTITLE: ElementDecl = decl(
    "el-grid-subtitle",
    "Section Subtitle",
    ElementKind::Text,
    Some("subtitle"),
    None,
);
pub const GRID_C1_TITLE: ElementDecl = decl(
    "el-grid-c1-title",
    "Card 1 Title",
    ElementKind::Heading,
    Some("card_1_title"),
    None,
);
pub const GRID_C1_DESC: ElementDecl = decl(
    "el-grid-c1-desc",
    "Card 1 Description",
    ElementKind::Text,
    Some("card_1_desc"),
    None,
);
pub const GRID_C2_TITLE: ElementDecl = decl(
    "el-grid-c2-title",
    "Card 2 Title",
    ElementKind::Heading,
    Some("card_2_title"),
    None,
);
pub const GRID_C2_DESC: ElementDecl = decl(
    "el-grid-c2-desc",
    "Card 2 Description",
    ElementKind::Text,
    Some("card_2_desc"),
    None,
);
pub const GRID_C3_TITLE: ElementDecl = decl(
    "el-grid-c3-title",
    "Card 3 Title",
    ElementKind::Heading,
    Some("card_3_title"),
    None,
);
pub const GRID_C3_DESC: ElementDecl = decl(
    "el-grid-c3-desc",
    "Card 3 Description",
    ElementKind::Text,
    Some("card_3_desc"),
    None,
);

/// The fixed element set for each component kind, in paint order.
pub fn declarations(kind: ComponentKind) -> &'static [ElementDecl] {
    match kind {
        ComponentKind::PrimaryButton => &[BTN_PRI_TEXT, BTN_PRI_ICON],
        ComponentKind::SecondaryButton => &[BTN_SEC_TEXT, BTN_SEC_ICON],
        ComponentKind::NavigationBar => &[
            NAV_LOGO,
            NAV_PRODUCTS,
            NAV_SOLUTIONS,
            NAV_PRICING,
            NAV_RESOURCES,
            NAV_CTA,
        ],
        ComponentKind::Hero => &[HERO_BADGE, HERO_TITLE, HERO_SUBTITLE, HERO_CTA, HERO_SECONDARY],
        ComponentKind::Card => &[CARD_IMAGE, CARD_TITLE, CARD_SUBTITLE, CARD_LINK],
        ComponentKind::PricingTable => &[PRICE_BADGE, PRICE_NAME, PRICE_AMOUNT, PRICE_CTA],
        ComponentKind::Testimonial => &[QUOTE_TEXT, QUOTE_AUTHOR, QUOTE_AVATAR],
        ComponentKind::FeatureRow => &[FEAT_STEP, FEAT_TITLE, FEAT_DESC, FEAT_LINK, FEAT_IMAGE],
        ComponentKind::Stats => &[
            STAT_1_VALUE,
            STAT_1_LABEL,
            STAT_2_VALUE,
            STAT_2_LABEL,
            STAT_3_VALUE,
            STAT_3_LABEL,
        ],
        ComponentKind::CtaBanner => &[CTA_TITLE, CTA_SUBTITLE, CTA_BTN, CTA_SECONDARY],
        ComponentKind::Footer => &[FOOTER_NAME, FOOTER_TAGLINE, FOOTER_SOCIAL],
        ComponentKind::FeaturesGrid => &[
            GRID_TITLE,
            GRID_SUBTITLE,
            GRID_C1_TITLE,
            GRID_C1_DESC,
            GRID_C2_TITLE,
            GRID_C2_DESC,
            GRID_C3_TITLE,
            GRID_C3_DESC,
        ],
    }
}

/// Which prop kinds may feed an element kind's content binding.
/// Containers carry no content at all.
pub fn content_compat(kind: ElementKind) -> &'static [PropKind] {
    match kind {
        ElementKind::Heading => &[PropKind::Text, PropKind::RichText, PropKind::Number],
        ElementKind::Text => &[PropKind::Text, PropKind::RichText],
        ElementKind::Button => &[PropKind::Text],
        ElementKind::Badge => &[PropKind::Text],
        ElementKind::Image => &[PropKind::Image],
        ElementKind::Link => &[PropKind::Link, PropKind::Text],
        ElementKind::Container => &[],
    }
}

pub fn is_content_compatible(element: ElementKind, prop: PropKind) -> bool {
    content_compat(element).contains(&prop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_element_ids_unique_within_each_kind() {
        for kind in ComponentKind::ALL {
            let mut seen = HashSet::new();
            for el in declarations(kind) {
                assert!(seen.insert(el.id), "duplicate element id {}", el.id);
            }
        }
    }

    #[test]
    fn test_every_kind_declares_elements() {
        for kind in ComponentKind::ALL {
            assert!(!declarations(kind).is_empty(), "{:?} has no elements", kind);
        }
    }

    #[test]
    fn test_content_compat() {
        assert!(is_content_compatible(ElementKind::Heading, PropKind::Number));
        assert!(is_content_compatible(ElementKind::Link, PropKind::Text));
        assert!(!is_content_compatible(ElementKind::Button, PropKind::Image));
        assert!(content_compat(ElementKind::Container).is_empty());
    }

    #[test]
    fn test_hero_declarations_match_builtin_bindings() {
        let els = declarations(ComponentKind::Hero);
        assert_eq!(els[1].id, "el-hero-title");
        assert_eq!(els[1].content, Some("title"));
        assert_eq!(els[3].visibility, Some("show_cta"));
    }
}
