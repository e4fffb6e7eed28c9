//! Built-in demo workspace: the "Acme Corp" data set used by the preview
//! binary and the integration tests.
//!
//! One shared library carries the brand tokens, eight components and the
//! asset records; three consumer sites have installed it at different
//! versions and built their pages from its components. Everything is seeded
//! through the regular store APIs so the demo exercises the same validation
//! as live data.

use crate::component::{ComponentKind, DesignComponent};
use crate::error::HubResult;
use crate::props::{PropDefinition, PropSchema};
use crate::rbac::Role;
use crate::store::{LayoutStore, LibraryStore, PageLayout, SectionInstance};
use crate::tokens::{Token, TokenKind};
use crate::workspace::{
    Asset, Library, LibraryInstallation, Plan, Site, SiteType, User, Workspace,
};

/// Id of the demo workspace's single shared library.
pub const DEMO_LIBRARY_ID: &str = "lib-001";

/// The demo workspace: Acme Corp, its users and sites, the Acme Brand
/// library with tokens, components, assets, and the three installations.
pub fn demo_library_store() -> LibraryStore {
    // ids in the seed are distinct and parents precede children, so the
    // fallible insert paths cannot fire
    seed_library_store().unwrap()
}

/// Page layouts for the three demo consumer sites.
pub fn demo_layout_store() -> LayoutStore {
    // instance ids are distinct within each page
    seed_layout_store().unwrap()
}

fn seed_library_store() -> HubResult<LibraryStore> {
    let mut store = LibraryStore::new();

    store.set_workspace(Workspace {
        id: "ws-001".to_string(),
        name: "Acme Corp".to_string(),
        plan: Plan::Enterprise,
    });

    store.add_user(user("user-001", "alex@acme.com", "Alex Morgan", Role::Owner))?;
    store.add_user(user("user-002", "sam@acme.com", "Sam Chen", Role::Designer))?;
    store.add_user(user("user-003", "jordan@acme.com", "Jordan Lee", Role::Marketer))?;
    store.add_user(user("user-004", "taylor@acme.com", "Taylor Kim", Role::Admin))?;

    store.add_site(site(
        "site-002",
        "Marketing Website",
        "2025-12-01T09:00:00Z",
        "2026-02-10T11:00:00Z",
    ))?;
    store.add_site(site(
        "site-003",
        "Support Portal",
        "2026-01-05T08:00:00Z",
        "2026-02-12T16:45:00Z",
    ))?;
    store.add_site(site(
        "site-004",
        "Company Blog",
        "2026-01-15T10:00:00Z",
        "2026-02-14T09:20:00Z",
    ))?;

    store.add_library(Library {
        id: DEMO_LIBRARY_ID.to_string(),
        source_site_id: String::new(),
        name: "Acme Brand".to_string(),
        version: 5,
        description: "Complete design system with brand tokens, UI primitives, marketing \
                      sections, and content blocks for all Acme web properties."
            .to_string(),
        created_at: "2025-11-01T10:00:00Z".to_string(),
        updated_at: "2026-02-15T14:30:00Z".to_string(),
    })?;

    for (id, key, value, kind) in [
        ("var-001", "Primary Color", "#E46209", TokenKind::Color),
        ("var-002", "Text primary", "#3A3A37", TokenKind::Color),
        ("var-003", "Text secondary", "#4B4B4B", TokenKind::Color),
        ("var-004", "Text placeholder", "#61615E", TokenKind::Color),
        ("var-005", "Background", "#FFFFFF", TokenKind::Color),
        ("var-006", "Accent background", "#F8F5EE", TokenKind::Color),
        ("var-007", "Light", "#FFFFFF", TokenKind::Color),
        ("var-008", "Dark background", "#1F1F1F", TokenKind::Color),
        ("var-009", "Primary Hover", "#CA3701", TokenKind::Color),
        ("var-010", "Accent background 2", "#FCFCFA", TokenKind::Color),
        ("var-011", "Inter", "Inter", TokenKind::Font),
        ("var-012", "Poppins", "Poppins", TokenKind::Font),
        ("var-013", "Heading 1", "48px", TokenKind::TextStyle),
        ("var-014", "Heading 2", "40px", TokenKind::TextStyle),
        ("var-015", "Heading 3", "24px", TokenKind::TextStyle),
        ("var-016", "Heading 4", "18px", TokenKind::TextStyle),
        ("var-017", "Heading 5", "16px", TokenKind::TextStyle),
        ("var-018", "Heading 6", "14px", TokenKind::TextStyle),
        ("var-019", "Paragraph 1", "18px", TokenKind::TextStyle),
        ("var-020", "Paragraph 2", "16px", TokenKind::TextStyle),
        ("var-021", "Paragraph 3", "14px", TokenKind::TextStyle),
        ("var-022", "Button border-radius", "12px", TokenKind::Size),
        ("var-023", "Input border-radius", "100px", TokenKind::Size),
        ("var-024", "Checkbox border-radius", "100px", TokenKind::Size),
        ("var-025", "Card border-radius", "8px", TokenKind::Size),
        ("var-026", "Image border-radius", "24px", TokenKind::Size),
    ] {
        store.add_token(Token::new(id, DEMO_LIBRARY_ID, key, value, kind))?;
    }

    store.add_component(component(
        "comp-btn-primary",
        "Primary Button",
        ComponentKind::PrimaryButton,
        &[("button_text", PropDefinition::text("Get Started", "Button Text"))],
        r#"<button class="btn-primary"><slot name="text">Get Started</slot></button>"#,
        ".btn-primary { padding: 10px 20px; font-weight: 600; color: #FFFFFF; \
         background: var(--Primary-Color); border-radius: var(--Button-border-radius); \
         font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-002",
        "Navigation Bar",
        ComponentKind::NavigationBar,
        &[
            ("logo_text", PropDefinition::text("Acme", "Logo Text")),
            ("show_cta", PropDefinition::switch(true, "Show CTA Button")),
        ],
        r#"<nav class="navbar"><div class="nav-logo"><slot name="logo">Logo</slot></div><div class="nav-links" data-slot="nav-content"></div></nav>"#,
        ".navbar { display: flex; align-items: center; justify-content: space-between; \
         padding: 12px 24px; border-bottom: 1px solid #E5E7EB; font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-004",
        "Hero Section",
        ComponentKind::Hero,
        &[
            ("title", PropDefinition::text("Welcome to Acme", "Headline")),
            ("subtitle", PropDefinition::text("Build something amazing.", "Subheadline")),
            ("show_cta", PropDefinition::switch(true, "Show CTA")),
            ("cta_text", PropDefinition::text("Get Started", "CTA Text")),
        ],
        r#"<section class="hero"><h1 class="hero-title"><slot name="title">Welcome</slot></h1><p class="hero-subtitle"><slot name="subtitle">Description</slot></p></section>"#,
        ".hero { text-align: center; padding: 64px 24px; font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-008",
        "Feature Row",
        ComponentKind::FeatureRow,
        &[
            ("step_number", PropDefinition::text("1", "Step Number")),
            ("title", PropDefinition::text("Feature title", "Title")),
            (
                "description",
                PropDefinition::text("Feature description goes here.", "Description"),
            ),
            ("image_right", PropDefinition::switch(true, "Image on Right")),
            ("show_step", PropDefinition::switch(true, "Show Step Number")),
        ],
        r#"<section class="feature-row"><div class="feature-text"></div><div class="feature-visual"></div></section>"#,
        ".feature-row { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; \
         padding: 48px; align-items: center; font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-009",
        "Stats Section",
        ComponentKind::Stats,
        &[
            ("stat_1_value", PropDefinition::text("134%", "Stat 1 Value")),
            ("stat_1_label", PropDefinition::text("increase in traffic", "Stat 1 Label")),
            ("stat_2_value", PropDefinition::text("10x", "Stat 2 Value")),
            ("stat_2_label", PropDefinition::text("faster deployments", "Stat 2 Label")),
            ("stat_3_value", PropDefinition::text("99.9%", "Stat 3 Value")),
            ("stat_3_label", PropDefinition::text("uptime guaranteed", "Stat 3 Label")),
        ],
        r#"<section class="stats"><div class="stats-grid" data-slot="stats"></div></section>"#,
        ".stats { padding: 48px; background: linear-gradient(135deg, var(--Primary-Color), \
         var(--Dark-background)); font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-010",
        "CTA Banner",
        ComponentKind::CtaBanner,
        &[
            ("title", PropDefinition::text("Ready to get started?", "Headline")),
            (
                "subtitle",
                PropDefinition::text("Join thousands of teams using our platform.", "Subtitle"),
            ),
            ("cta_text", PropDefinition::text("Start Free Trial", "Button Text")),
            (
                "show_secondary_cta",
                PropDefinition::switch(true, "Show Secondary Button"),
            ),
        ],
        r#"<section class="cta-banner"><h2></h2><p></p><button></button></section>"#,
        ".cta-banner { text-align: center; padding: 64px; background: var(--Accent-background); \
         font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-011",
        "Footer",
        ComponentKind::Footer,
        &[
            ("company_name", PropDefinition::text("Acme", "Company Name")),
            ("tagline", PropDefinition::text("Build something amazing.", "Tagline")),
            ("show_social", PropDefinition::switch(true, "Show Social Links")),
        ],
        r#"<footer class="footer"><div class="footer-grid"></div><div class="footer-bottom"></div></footer>"#,
        ".footer { padding: 48px; background: var(--Dark-background); color: var(--Light); \
         font-family: var(--Poppins); }",
    )?)?;
    store.add_component(component(
        "comp-012",
        "Features Grid",
        ComponentKind::FeaturesGrid,
        &[
            ("title", PropDefinition::text("Why choose us", "Section Title")),
            (
                "subtitle",
                PropDefinition::text("Everything you need to scale.", "Section Subtitle"),
            ),
            ("card_1_title", PropDefinition::text("Lightning Fast", "Card 1 Title")),
            (
                "card_1_desc",
                PropDefinition::text(
                    "Deploy globally in seconds with our edge network.",
                    "Card 1 Description",
                ),
            ),
            ("card_2_title", PropDefinition::text("Enterprise Security", "Card 2 Title")),
            (
                "card_2_desc",
                PropDefinition::text(
                    "SOC 2 compliant with end-to-end encryption.",
                    "Card 2 Description",
                ),
            ),
            ("card_3_title", PropDefinition::text("Team Collaboration", "Card 3 Title")),
            (
                "card_3_desc",
                PropDefinition::text(
                    "Real-time editing and review workflows.",
                    "Card 3 Description",
                ),
            ),
        ],
        r#"<section class="features-grid"><div data-slot="features"></div></section>"#,
        ".features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; \
         padding: 48px; font-family: var(--Poppins); }",
    )?)?;

    store.add_asset(asset(
        "asset-001",
        "acme-logo.svg",
        "/assets/logos/acme-logo.svg",
        "logos",
        "image/svg+xml",
        4200,
        "2025-11-01T10:00:00Z",
    ))?;
    store.add_asset(asset(
        "asset-002",
        "acme-logo-dark.svg",
        "/assets/logos/acme-logo-dark.svg",
        "logos",
        "image/svg+xml",
        4500,
        "2025-11-01T10:00:00Z",
    ))?;
    store.add_asset(asset(
        "asset-003",
        "icon-arrow.svg",
        "/assets/icons/icon-arrow.svg",
        "icons",
        "image/svg+xml",
        800,
        "2025-11-02T10:00:00Z",
    ))?;
    store.add_asset(asset(
        "asset-004",
        "icon-check.svg",
        "/assets/icons/icon-check.svg",
        "icons",
        "image/svg+xml",
        620,
        "2025-11-02T10:00:00Z",
    ))?;
    store.add_asset(asset(
        "asset-005",
        "hero-bg.jpg",
        "/assets/images/hero-bg.jpg",
        "images",
        "image/jpeg",
        245000,
        "2025-11-10T10:00:00Z",
    ))?;
    store.add_asset(asset(
        "asset-006",
        "pattern-dots.png",
        "/assets/patterns/pattern-dots.png",
        "patterns",
        "image/png",
        18000,
        "2025-12-12T10:00:00Z",
    ))?;

    store.install(installation("inst-001", "site-002", 4, "2025-12-01T09:30:00Z"))?;
    store.install(installation("inst-002", "site-003", 5, "2026-01-05T08:30:00Z"))?;
    store.install(installation("inst-003", "site-004", 3, "2026-01-15T11:00:00Z"))?;

    Ok(store)
}

fn seed_layout_store() -> HubResult<LayoutStore> {
    let mut store = LayoutStore::new();
    store.insert_layout("site-002", marketing_layout()?);
    store.insert_layout("site-003", support_layout()?);
    store.insert_layout("site-004", blog_layout()?);
    Ok(store)
}

fn marketing_layout() -> HubResult<PageLayout> {
    let mut layout = PageLayout::new();
    layout.push(
        SectionInstance::new("sec-mkt-01", "comp-002")
            .with_override("logo_text", "Acme")
            .with_override("show_cta", true),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-02", "comp-004")
            .with_override("title", "Ship faster with Acme")
            .with_override(
                "subtitle",
                "The all-in-one platform for modern teams. Build, deploy, and scale your \
                 products with confidence.",
            )
            .with_override("show_cta", true)
            .with_override("cta_text", "Start Free Trial"),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-03", "comp-008")
            .with_override("step_number", "1")
            .with_override("title", "Attract more leads with omnichannel campaigns")
            .with_override(
                "description",
                "Create, publish, and measure marketing campaigns across social, email, and \
                 ads — all from one centralized workspace. Drive awareness with tools that \
                 meet your audience where they are.",
            )
            .with_override("image_right", true)
            .with_override("show_step", true),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-04", "comp-008")
            .with_override("step_number", "2")
            .with_override("title", "Convert visitors into qualified leads")
            .with_override(
                "description",
                "Personalized experiences create brand loyalty. Use smart forms, contextual \
                 CTAs, and dynamic content to capture high-quality leads that convert into \
                 customers.",
            )
            .with_override("image_right", false)
            .with_override("show_step", true),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-05", "comp-008")
            .with_override("step_number", "3")
            .with_override("title", "Maximize your impact with analytics")
            .with_override(
                "description",
                "Visualize metrics like contacts generated, budget allocation, and ROI \
                 effortlessly. Use advancement reporting to map the customer journey and \
                 optimize every touchpoint.",
            )
            .with_override("image_right", true)
            .with_override("show_step", true),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-06", "comp-009")
            .with_override("stat_1_value", "134%")
            .with_override("stat_1_label", "increase in website traffic in 12 months")
            .with_override("stat_2_value", "10x")
            .with_override("stat_2_label", "faster deployment times")
            .with_override("stat_3_value", "99.9%")
            .with_override("stat_3_label", "uptime guaranteed"),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-07", "comp-012")
            .with_override("title", "Why teams choose Acme")
            .with_override(
                "subtitle",
                "Everything you need to build, deploy, and scale — without the complexity.",
            )
            .with_override("card_1_title", "Lightning Fast")
            .with_override(
                "card_1_desc",
                "Deploy globally in seconds with our edge network and automatic CDN \
                 distribution.",
            )
            .with_override("card_2_title", "Enterprise Security")
            .with_override(
                "card_2_desc",
                "SOC 2 compliant with end-to-end encryption and role-based access controls.",
            )
            .with_override("card_3_title", "Team Collaboration")
            .with_override(
                "card_3_desc",
                "Real-time editing, branching, and review workflows built for modern teams.",
            ),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-09", "comp-010")
            .with_override("title", "Ready to grow your business?")
            .with_override(
                "subtitle",
                "Join 10,000+ teams already using Acme to attract, convert, and retain \
                 customers.",
            )
            .with_override("cta_text", "Start Free Trial")
            .with_override("show_secondary_cta", true),
    )?;
    layout.push(
        SectionInstance::new("sec-mkt-10", "comp-011")
            .with_override("company_name", "Acme")
            .with_override("tagline", "The all-in-one platform for modern teams.")
            .with_override("show_social", true),
    )?;
    Ok(layout)
}

fn support_layout() -> HubResult<PageLayout> {
    let mut layout = PageLayout::new();
    layout.push(
        SectionInstance::new("sec-sup-01", "comp-002")
            .with_override("logo_text", "Acme Support")
            .with_override("show_cta", false),
    )?;
    layout.push(
        SectionInstance::new("sec-sup-02", "comp-004")
            .with_override("title", "How can we help?")
            .with_override(
                "subtitle",
                "Search our knowledge base or browse common topics below to find the answers \
                 you need.",
            )
            .with_override("show_cta", true)
            .with_override("cta_text", "Search Docs"),
    )?;
    layout.push(
        SectionInstance::new("sec-sup-03", "comp-012")
            .with_override("title", "Browse by topic")
            .with_override(
                "subtitle",
                "Find guides, tutorials, and documentation for every feature.",
            )
            .with_override("card_1_title", "Getting Started")
            .with_override(
                "card_1_desc",
                "Quick-start guides, onboarding tutorials, and first-steps documentation to \
                 get you up and running.",
            )
            .with_override("card_2_title", "Account & Billing")
            .with_override(
                "card_2_desc",
                "Manage your subscription, update payment methods, view invoices, and \
                 configure team settings.",
            )
            .with_override("card_3_title", "API Reference")
            .with_override(
                "card_3_desc",
                "Complete REST API docs, SDKs, webhooks, and integration guides for \
                 developers.",
            ),
    )?;
    layout.push(
        SectionInstance::new("sec-sup-04", "comp-008")
            .with_override("step_number", "1")
            .with_override("title", "Submit a support request")
            .with_override(
                "description",
                "Can't find what you're looking for? Our support team is available 24/7 via \
                 live chat, email, or phone. Most tickets are resolved within 4 hours.",
            )
            .with_override("image_right", true)
            .with_override("show_step", false),
    )?;
    layout.push(
        SectionInstance::new("sec-sup-05", "comp-009")
            .with_override("stat_1_value", "< 4hr")
            .with_override("stat_1_label", "average response time")
            .with_override("stat_2_value", "98%")
            .with_override("stat_2_label", "customer satisfaction")
            .with_override("stat_3_value", "24/7")
            .with_override("stat_3_label", "support availability"),
    )?;
    layout.push(
        SectionInstance::new("sec-sup-06", "comp-010")
            .with_override("title", "Still need help?")
            .with_override(
                "subtitle",
                "Our team is here to assist you with any questions or issues.",
            )
            .with_override("cta_text", "Open a Ticket")
            .with_override("show_secondary_cta", true),
    )?;
    layout.push(
        SectionInstance::new("sec-sup-07", "comp-011")
            .with_override("company_name", "Acme")
            .with_override("tagline", "Support that scales with you.")
            .with_override("show_social", false),
    )?;
    Ok(layout)
}

fn blog_layout() -> HubResult<PageLayout> {
    let mut layout = PageLayout::new();
    layout.push(
        SectionInstance::new("sec-blog-01", "comp-002")
            .with_override("logo_text", "Acme Blog")
            .with_override("show_cta", true),
    )?;
    layout.push(
        SectionInstance::new("sec-blog-02", "comp-004")
            .with_override("title", "Insights & Updates")
            .with_override(
                "subtitle",
                "Engineering deep-dives, product news, and design thinking from the Acme \
                 team.",
            )
            .with_override("show_cta", false)
            .with_override("cta_text", "Subscribe"),
    )?;
    layout.push(
        SectionInstance::new("sec-blog-03", "comp-012")
            .with_override("title", "Latest articles")
            .with_override(
                "subtitle",
                "Stay up to date with the latest from our engineering and design teams.",
            )
            .with_override("card_1_title", "Introducing Acme v5")
            .with_override(
                "card_1_desc",
                "A look at our biggest release yet — redesigned dashboard, new API, and 3x \
                 faster builds.",
            )
            .with_override("card_2_title", "Design Systems at Scale")
            .with_override(
                "card_2_desc",
                "How our team manages shared libraries across 30+ consumer sites without \
                 breaking things.",
            )
            .with_override("card_3_title", "The Future of CSS Tokens")
            .with_override(
                "card_3_desc",
                "Why design tokens are replacing hardcoded values — and how to migrate your \
                 existing codebase.",
            ),
    )?;
    layout.push(
        SectionInstance::new("sec-blog-04", "comp-008")
            .with_override("step_number", "1")
            .with_override("title", "Subscribe to our newsletter")
            .with_override(
                "description",
                "Get the latest articles, product updates, and engineering insights \
                 delivered straight to your inbox every week. No spam, unsubscribe anytime.",
            )
            .with_override("image_right", false)
            .with_override("show_step", false),
    )?;
    layout.push(
        SectionInstance::new("sec-blog-06", "comp-010")
            .with_override("title", "Never miss an update")
            .with_override(
                "subtitle",
                "Join 5,000+ developers and designers who read our newsletter.",
            )
            .with_override("cta_text", "Subscribe Now")
            .with_override("show_secondary_cta", false),
    )?;
    layout.push(
        SectionInstance::new("sec-blog-07", "comp-011")
            .with_override("company_name", "Acme")
            .with_override("tagline", "Engineering and design insights.")
            .with_override("show_social", true),
    )?;
    Ok(layout)
}

// ─── Record builders ─────────────────────────────────────────────────────────

fn user(id: &str, email: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        avatar_url: None,
        workspace_id: "ws-001".to_string(),
        role,
    }
}

fn site(id: &str, name: &str, created_at: &str, updated_at: &str) -> Site {
    Site {
        id: id.to_string(),
        workspace_id: "ws-001".to_string(),
        name: name.to_string(),
        site_type: SiteType::Consumer,
        created_at: created_at.to_string(),
        updated_at: updated_at.to_string(),
    }
}

fn component(
    id: &str,
    name: &str,
    kind: ComponentKind,
    props: &[(&str, PropDefinition)],
    html: &str,
    css: &str,
) -> HubResult<DesignComponent> {
    let mut schema = PropSchema::new();
    for (key, def) in props {
        schema.insert(*key, def.clone())?;
    }
    let mut component = DesignComponent::new(id, DEMO_LIBRARY_ID, name, kind, schema);
    component.html_structure = html.to_string();
    component.css_styles = css.to_string();
    Ok(component)
}

fn asset(
    id: &str,
    name: &str,
    storage_path: &str,
    folder: &str,
    file_type: &str,
    file_size: u64,
    created_at: &str,
) -> Asset {
    Asset {
        id: id.to_string(),
        library_id: DEMO_LIBRARY_ID.to_string(),
        name: name.to_string(),
        storage_path: storage_path.to_string(),
        folder: folder.to_string(),
        file_type: file_type.to_string(),
        file_size,
        created_at: created_at.to_string(),
    }
}

fn installation(id: &str, site_id: &str, version: u32, installed_at: &str) -> LibraryInstallation {
    LibraryInstallation {
        id: id.to_string(),
        library_id: DEMO_LIBRARY_ID.to_string(),
        consumer_site_id: site_id.to_string(),
        installed_version: version,
        installed_at: installed_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_library_counts() {
        let store = demo_library_store();
        assert_eq!(store.workspace().unwrap().name, "Acme Corp");
        assert_eq!(store.users().len(), 4);
        assert_eq!(store.sites().len(), 3);
        assert_eq!(store.libraries().len(), 1);
        assert_eq!(store.tokens(DEMO_LIBRARY_ID).unwrap().len(), 26);
        assert_eq!(store.components_by_library(DEMO_LIBRARY_ID).len(), 8);
        assert_eq!(store.assets_by_library(DEMO_LIBRARY_ID).len(), 6);
    }

    #[test]
    fn test_demo_installations_lag_or_match_library() {
        let store = demo_library_store();
        // site-002 sits at v4 and site-004 at v3; site-003 is current
        assert!(store.has_update(store.installation("inst-001").unwrap()));
        assert!(!store.has_update(store.installation("inst-002").unwrap()));
        assert!(store.has_update(store.installation("inst-003").unwrap()));
    }

    #[test]
    fn test_demo_layouts_reference_known_components() {
        let store = demo_library_store();
        let layouts = demo_layout_store();
        assert_eq!(layouts.sections("site-002").len(), 9);
        assert_eq!(layouts.sections("site-003").len(), 7);
        assert_eq!(layouts.sections("site-004").len(), 6);
        assert!(layouts.sections("site-999").is_empty());

        for site_id in layouts.site_ids() {
            for section in layouts.sections(site_id) {
                assert!(
                    store.component(&section.component_id).is_some(),
                    "{} instantiates unknown {}",
                    section.instance_id,
                    section.component_id
                );
                assert!(section.is_linked);
            }
        }
    }

    #[test]
    fn test_demo_overrides_resolve_against_schemas() {
        let store = demo_library_store();
        let layouts = demo_layout_store();
        let hero = layouts
            .sections("site-002")
            .iter()
            .find(|s| s.component_id == "comp-004")
            .unwrap();
        let schema = &store.component("comp-004").unwrap().props_schema;
        let props = resolve(schema, &hero.prop_overrides);
        assert_eq!(props.text("title").as_deref(), Some("Ship faster with Acme"));
        assert_eq!(props.truthy("show_cta"), Some(true));

        // the support navbar turns its CTA off
        let nav = layouts.sections("site-003").first().unwrap();
        let schema = &store.component("comp-002").unwrap().props_schema;
        let props = resolve(schema, &nav.prop_overrides);
        assert_eq!(props.text("logo_text").as_deref(), Some("Acme Support"));
        assert_eq!(props.truthy("show_cta"), Some(false));
    }

    #[test]
    fn test_demo_schema_defaults_survive_seeding() {
        let store = demo_library_store();
        let schema = &store.component("comp-010").unwrap().props_schema;
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["title", "subtitle", "cta_text", "show_secondary_cta"]);
        assert_eq!(
            schema.get("cta_text").unwrap().default,
            crate::props::PropValue::Text("Start Free Trial".to_string())
        );
    }
}
