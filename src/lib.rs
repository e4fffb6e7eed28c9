//! # Design Hub Core
//!
//! The shared-library engine behind a multi-site design hub: design tokens,
//! component prop schemas, instance overrides, element content bindings, and
//! an HTML preview pipeline for the builtin section library.
//!
//! ## Features
//! - Per-library design token sets with typed values and dark-mode variants
//! - Prop schemas with typed defaults and total override resolution
//! - Element bindings wiring a component's fixed layout to its props
//! - Twelve builtin section renderers with sizing tiers and selection handles
//! - Page layouts of linked/detached section instances per consumer site
//! - Workspace, site, installation and role records with update tracking
//!
//! ## Example — preview one component
//! ```ignore
//! use designhub::{demo_library_store, render_preview, RenderOptions};
//!
//! let store = demo_library_store();
//! let hero = store.component("comp-004").expect("demo component");
//! let tokens = store.tokens(&hero.library_id).expect("demo tokens");
//!
//! let node = render_preview(hero, tokens, &Default::default(), &RenderOptions::default());
//! println!("{}", designhub::render_html(&node));
//! ```
//!
//! ## Example — render a full site page
//! ```ignore
//! use designhub::{demo_layout_store, demo_library_store, render_site_page, RenderOptions};
//!
//! let store = demo_library_store();
//! let layouts = demo_layout_store();
//! let layout = layouts.layout("site-002").expect("demo site");
//!
//! let html = render_site_page(&store, layout, "Marketing Website", &RenderOptions::default());
//! ```

pub mod bindings;
pub mod component;
pub mod elements;
pub mod error;
pub mod fixtures;
pub mod html;
pub mod preview;
pub mod props;
pub mod rbac;
pub mod resolver;
pub mod sections;
pub mod store;
pub mod tokens;
pub mod workspace;

// --- Core types ---
pub use component::{ComponentKind, DesignComponent};
pub use error::{HubError, HubResult};
pub use props::{PropDefinition, PropKind, PropSchema, PropValue};
pub use resolver::{resolve, Overrides, ResolvedProps};

// --- Tokens and bindings ---
pub use bindings::{resolve_content, resolve_visible, ElementBinding, ElementBindings};
pub use elements::{declarations, ElementDecl, ElementKind};
pub use tokens::{StyleVars, Token, TokenKind, TokenSet};

// --- Preview pipeline ---
pub use html::{page_to_html, render_html};
pub use preview::{
    render_component, render_page, PreviewElement, PreviewNode, RenderContext, RenderOptions,
    RendererRegistry, Scale, SectionRenderer, Selection,
};

// --- Workspace and layouts ---
pub use fixtures::{demo_layout_store, demo_library_store, DEMO_LIBRARY_ID};
pub use rbac::{can, Action, Role};
pub use store::{LayoutStore, LibraryStore, PageLayout, SectionInstance};
pub use workspace::{Asset, Library, LibraryInstallation, Plan, Site, SiteType, User, Workspace};

/// Render a component preview with the builtin renderers and the default
/// element bindings for its kind.
///
/// Callers that need custom bindings or a custom renderer set use
/// [`preview::render_component`] directly.
pub fn render_preview(
    component: &DesignComponent,
    tokens: &TokenSet,
    overrides: &Overrides,
    opts: &RenderOptions,
) -> PreviewNode {
    let registry = RendererRegistry::with_builtins();
    let bindings = ElementBindings::from_declarations(declarations(component.kind));
    preview::render_component(&registry, component, tokens, overrides, &bindings, opts)
}

/// Render a site page to a standalone HTML document: every section in page
/// order, resolved against the store, wrapped in the base page shell.
pub fn render_site_page(
    store: &LibraryStore,
    layout: &PageLayout,
    title: &str,
    opts: &RenderOptions,
) -> String {
    let registry = RendererRegistry::with_builtins();
    let sections = render_page(&registry, store, layout, opts);
    page_to_html(title, &sections)
}
