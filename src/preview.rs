use std::collections::HashMap;

use crate::bindings::{resolve_content, resolve_visible, ElementBindings};
use crate::component::{ComponentKind, DesignComponent};
use crate::elements::{self, ElementDecl};
use crate::resolver::{resolve, Overrides, ResolvedProps};
use crate::store::{LibraryStore, PageLayout};
use crate::tokens::{StyleVars, TokenSet};

/// Sizing tier for the preview surface. Affects paddings and font tiers
/// only; structure, texts and visibility are scale-independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scale {
    Sm,
    #[default]
    Md,
}

impl Scale {
    pub fn pick<'a>(&self, sm: &'a str, md: &'a str) -> &'a str {
        match self {
            Scale::Sm => sm,
            Scale::Md => md,
        }
    }
}

/// Whether the render carries selection metadata.
///
/// `Active` models an editing surface where elements are clickable and at
/// most one is highlighted; `Inactive` is the consumer-facing preview. The
/// two produce identical trees apart from the `source` handles.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Inactive,
    Active {
        selected: Option<String>,
    },
}

impl Selection {
    pub fn active(selected: Option<&str>) -> Self {
        Selection::Active {
            selected: selected.map(str::to_string),
        }
    }
}

/// Selection metadata attached to a bindable element in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementHandle {
    pub element_id: String,
    pub selected: bool,
}

/// A node in the rendered preview tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewNode {
    Element(PreviewElement),
    Text(String),
}

impl PreviewNode {
    pub fn text(content: impl Into<String>) -> Self {
        PreviewNode::Text(content.into())
    }

    /// Bindable element ids in paint order. This is the click-dispatch
    /// surface: stable across scale and selection state.
    pub fn element_ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let PreviewNode::Element(el) = self {
            if let Some(ref handle) = el.source {
                out.push(handle.element_id.as_str());
            }
            for child in &el.children {
                child.collect_ids(out);
            }
        }
    }

    /// Strip selection handles, recursively. Used to compare editing and
    /// consumer renders of the same inputs.
    pub fn without_handles(&self) -> PreviewNode {
        match self {
            PreviewNode::Text(s) => PreviewNode::Text(s.clone()),
            PreviewNode::Element(el) => PreviewNode::Element(PreviewElement {
                tag: el.tag.clone(),
                class_names: el.class_names.clone(),
                styles: el.styles.clone(),
                source: None,
                children: el.children.iter().map(|c| c.without_handles()).collect(),
            }),
        }
    }
}

impl From<PreviewElement> for PreviewNode {
    fn from(el: PreviewElement) -> Self {
        PreviewNode::Element(el)
    }
}

/// An element in the preview tree: a tag, classes, inline styles, optional
/// selection handle and children.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewElement {
    pub tag: String,
    pub class_names: Vec<String>,
    pub styles: Vec<(String, String)>,
    pub source: Option<ElementHandle>,
    pub children: Vec<PreviewNode>,
}

impl PreviewElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_names: Vec::new(),
            styles: Vec::new(),
            source: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.class_names.push(name.into());
        self
    }

    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((name.into(), value.into()));
        self
    }

    pub fn styles(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.styles.extend(pairs);
        self
    }

    pub fn source(mut self, handle: Option<ElementHandle>) -> Self {
        self.source = handle;
        self
    }

    pub fn child(mut self, node: impl Into<PreviewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe_child(mut self, node: Option<PreviewNode>) -> Self {
        if let Some(node) = node {
            self.children.push(node);
        }
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(PreviewNode::Text(content.into()))
    }
}

/// Everything a section renderer may consult. Renderers never see raw
/// overrides or tokens; props arrive resolved and tokens arrive as the
/// fixed style-variable namespace.
pub struct RenderContext<'a> {
    pub scale: Scale,
    pub seamless: bool,
    pub props: &'a ResolvedProps,
    pub bindings: &'a ElementBindings,
    pub vars: &'a StyleVars,
    pub selection: &'a Selection,
}

impl<'a> RenderContext<'a> {
    /// Displayed text for a declared element: bound prop when wired and
    /// present, the given static fallback otherwise.
    pub fn content(&self, decl: &ElementDecl, fallback: &str) -> String {
        resolve_content(decl.id, fallback, self.bindings, self.props)
    }

    /// Whether a declared element is shown. Elements declared without a
    /// visibility gate default to shown; gated elements default to hidden
    /// when their binding is unwired or orphaned.
    pub fn visible(&self, decl: &ElementDecl) -> bool {
        resolve_visible(
            decl.id,
            decl.visibility.is_none(),
            self.bindings,
            self.props,
        )
    }

    /// Selection handle for a declared element. `None` whenever selection is
    /// inactive, so consumer previews carry no editing metadata at all.
    pub fn handle(&self, decl: &ElementDecl) -> Option<ElementHandle> {
        match self.selection {
            Selection::Inactive => None,
            Selection::Active { selected } => Some(ElementHandle {
                element_id: decl.id.to_string(),
                selected: selected.as_deref() == Some(decl.id),
            }),
        }
    }
}

/// Renders one component kind into a preview subtree.
pub trait SectionRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode;
}

/// Kind-keyed dispatch table for section renderers.
///
/// `register` replaces silently; this is the extension point for custom
/// kinds. Rendering an unregistered kind yields a neutral placeholder
/// instead of failing, so a library referencing a renderer this build does
/// not carry still previews.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<ComponentKind, Box<dyn SectionRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all twelve builtin section renderers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::sections::register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, kind: ComponentKind, renderer: Box<dyn SectionRenderer>) {
        self.renderers.insert(kind, renderer);
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn render(&self, component: &DesignComponent, ctx: &RenderContext) -> PreviewNode {
        match self.renderers.get(&component.kind) {
            Some(renderer) => renderer.render(ctx),
            None => placeholder(&component.name),
        }
    }
}

fn placeholder(name: &str) -> PreviewNode {
    PreviewElement::new("div")
        .class("preview-placeholder")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .style("height", "96px")
        .style("border", "1px dashed var(--preview-border)")
        .style("border-radius", "var(--preview-radius)")
        .style("font-size", "12px")
        .style("color", "var(--preview-muted)")
        .text(name)
        .into()
}

/// Render options for the top-level entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub scale: Scale,
    pub seamless: bool,
    pub selection: Selection,
}

/// Top-level render: resolve props against the component's schema, derive
/// style variables from the tokens, render the section and wrap it in the
/// preview frame. Seamless drops the frame chrome but keeps the custom
/// properties the section depends on.
pub fn render_component(
    registry: &RendererRegistry,
    component: &DesignComponent,
    tokens: &TokenSet,
    overrides: &Overrides,
    bindings: &ElementBindings,
    opts: &RenderOptions,
) -> PreviewNode {
    let props = resolve(&component.props_schema, overrides);
    let vars = StyleVars::from_tokens(tokens);
    let ctx = RenderContext {
        scale: opts.scale,
        seamless: opts.seamless,
        props: &props,
        bindings,
        vars: &vars,
        selection: &opts.selection,
    };
    let section = registry.render(component, &ctx);

    let frame = if opts.seamless {
        PreviewElement::new("div")
            .class("preview-seamless")
            .styles(vars.custom_properties())
            .style("width", "100%")
    } else {
        PreviewElement::new("div")
            .class("preview-frame")
            .styles(vars.custom_properties())
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("padding", opts.scale.pick("16px", "24px"))
            .style("border", "1px solid var(--preview-border)")
            .style("border-radius", "8px")
            .style("background", "var(--preview-bg)")
    };
    frame.child(section).into()
}

/// Render every section of a page, in order, resolved against the store.
///
/// Each section looks up its component, seeds the default element bindings
/// for the component's kind, and renders seamless so sections stack flush.
/// Sections naming an unknown component are skipped; a page render never
/// fails.
pub fn render_page(
    registry: &RendererRegistry,
    store: &LibraryStore,
    layout: &PageLayout,
    opts: &RenderOptions,
) -> Vec<PreviewNode> {
    let empty = TokenSet::new();
    layout
        .iter()
        .filter_map(|section| {
            let component = store.component(&section.component_id)?;
            let tokens = store.tokens(&component.library_id).unwrap_or(&empty);
            let bindings =
                ElementBindings::from_declarations(elements::declarations(component.kind));
            let section_opts = RenderOptions {
                scale: opts.scale,
                seamless: true,
                selection: opts.selection.clone(),
            };
            Some(render_component(
                registry,
                component,
                tokens,
                &section.prop_overrides,
                &bindings,
                &section_opts,
            ))
        })
        .collect()
}
