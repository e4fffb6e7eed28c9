use designhub::{
    can, declarations, demo_layout_store, demo_library_store, render_html, render_preview,
    render_site_page, resolve, resolve_content, resolve_visible, Action, ComponentKind,
    DesignComponent, ElementBindings, HubError, Overrides, PageLayout, PreviewNode,
    PropDefinition, PropSchema, PropValue, RenderOptions, RendererRegistry, Role, Scale,
    SectionInstance, Selection, TokenSet, DEMO_LIBRARY_ID,
};

fn texts(node: &PreviewNode) -> Vec<String> {
    fn walk(node: &PreviewNode, out: &mut Vec<String>) {
        match node {
            PreviewNode::Text(s) => out.push(s.clone()),
            PreviewNode::Element(el) => {
                for child in &el.children {
                    walk(child, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(node, &mut out);
    out
}

// Prop resolution
#[test]
fn test_schema_defaults_fill_empty_overrides() {
    let mut schema = PropSchema::new();
    schema
        .insert("label", PropDefinition::text("Get Started", "Label"))
        .unwrap();

    let resolved = resolve(&schema, &Overrides::new());
    assert_eq!(resolved.text("label").as_deref(), Some("Get Started"));
    assert_eq!(resolved.len(), 1);
}

#[test]
fn test_added_prop_resolves_with_override() {
    let mut schema = PropSchema::new();
    schema
        .insert("label", PropDefinition::text("Get Started", "Label"))
        .unwrap();
    schema
        .insert("show_icon", PropDefinition::switch(false, "Show Icon"))
        .unwrap();

    let mut overrides = Overrides::new();
    overrides.insert("show_icon".to_string(), PropValue::Bool(true));

    let resolved = resolve(&schema, &overrides);
    assert_eq!(resolved.text("label").as_deref(), Some("Get Started"));
    assert_eq!(resolved.truthy("show_icon"), Some(true));
    assert_eq!(resolved.len(), 2);
}

#[test]
fn test_false_override_beats_true_default() {
    let mut schema = PropSchema::new();
    schema
        .insert("show_cta", PropDefinition::switch(true, "Show CTA"))
        .unwrap();

    let mut overrides = Overrides::new();
    overrides.insert("show_cta".to_string(), PropValue::Bool(false));

    let resolved = resolve(&schema, &overrides);
    assert_eq!(resolved.truthy("show_cta"), Some(false));
}

#[test]
fn test_resolution_is_idempotent_under_full_override() {
    let store = demo_library_store();
    let hero = store.component("comp-004").unwrap();

    let mut overrides = Overrides::new();
    overrides.insert("title".to_string(), "Launch week".into());

    let once = resolve(&hero.props_schema, &overrides);
    let twice = resolve(&hero.props_schema, &once.to_overrides());
    assert_eq!(once, twice);
}

// Element bindings
#[test]
fn test_orphaned_content_binding_falls_back() {
    // the binding names a prop the schema no longer carries
    let mut bindings = ElementBindings::new();
    bindings.set_content("el-hero-title", Some("title".to_string()));

    let props = resolve(&PropSchema::new(), &Overrides::new());
    let text = resolve_content("el-hero-title", "Welcome to Acme", &bindings, &props);
    assert_eq!(text, "Welcome to Acme");
}

#[test]
fn test_visibility_binding_coerces_to_bool() {
    let mut schema = PropSchema::new();
    schema
        .insert("caption", PropDefinition::text("", "Caption"))
        .unwrap();

    let mut bindings = ElementBindings::new();
    bindings.set_visibility("el-caption", Some("caption".to_string()));

    let hidden = resolve(&schema, &Overrides::new());
    assert!(!resolve_visible("el-caption", true, &bindings, &hidden));

    let mut overrides = Overrides::new();
    overrides.insert("caption".to_string(), "Figure 1".into());
    let shown = resolve(&schema, &overrides);
    assert!(resolve_visible("el-caption", false, &bindings, &shown));
}

#[test]
fn test_every_kind_declares_unique_elements() {
    for kind in ComponentKind::ALL {
        let decls = declarations(kind);
        assert!(!decls.is_empty(), "{:?} declares no elements", kind);
        for (i, decl) in decls.iter().enumerate() {
            assert!(
                decls[i + 1..].iter().all(|other| other.id != decl.id),
                "{:?} repeats element id {}",
                kind,
                decl.id
            );
        }
    }
}

// Page layout editing
#[test]
fn test_unlink_detaches_without_deleting() {
    let mut layout = PageLayout::new();
    layout
        .push(SectionInstance::new("sec-01", "comp-004").with_override("title", "Custom headline"))
        .unwrap();

    assert!(layout.unlink("sec-01"));
    let section = layout.get("sec-01").unwrap();
    assert!(!section.is_linked);
    assert_eq!(
        section.prop_overrides.get("title"),
        Some(&PropValue::Text("Custom headline".to_string()))
    );
    // the detached section is still present and addressable
    assert_eq!(layout.len(), 1);
    assert!(layout.select("sec-01"));
}

#[test]
fn test_select_first_instance_among_duplicates() {
    let mut layout = PageLayout::new();
    layout.push(SectionInstance::new("sec-a", "comp-010")).unwrap();
    layout.push(SectionInstance::new("sec-b", "comp-008")).unwrap();
    layout.push(SectionInstance::new("sec-c", "comp-008")).unwrap();

    assert!(layout.select_first_instance_of_component("comp-008"));
    assert_eq!(layout.selected_id(), Some("sec-b"));
}

#[test]
fn test_stale_instance_ids_are_no_ops() {
    let mut layouts = demo_layout_store();
    let layout = layouts.layout_mut("site-002").unwrap();

    assert!(!layout.select("sec-mkt-99"));
    assert!(!layout.remove("sec-mkt-99"));
    assert!(!layout.update_override("sec-mkt-99", "title", "x"));
    assert!(!layout.unlink("sec-mkt-99"));

    assert_eq!(layout.len(), 9);
    assert_eq!(layout.selected_id(), None);
}

// Demo workspace
#[test]
fn test_demo_workspace_shape() {
    let store = demo_library_store();
    let layouts = demo_layout_store();

    assert_eq!(store.workspace().unwrap().id, "ws-001");
    assert_eq!(store.users().len(), 4);
    assert_eq!(store.sites().len(), 3);
    assert_eq!(store.tokens(DEMO_LIBRARY_ID).unwrap().len(), 26);
    assert_eq!(store.components_by_library(DEMO_LIBRARY_ID).len(), 8);
    assert_eq!(store.assets_by_library(DEMO_LIBRARY_ID).len(), 6);

    assert_eq!(layouts.sections("site-002").len(), 9);
    assert_eq!(layouts.sections("site-003").len(), 7);
    assert_eq!(layouts.sections("site-004").len(), 6);
}

#[test]
fn test_demo_update_tracking() {
    let mut store = demo_library_store();

    let inst = store.installation("inst-001").unwrap().clone();
    assert!(store.has_update(&inst));
    let inst = store.installation("inst-002").unwrap().clone();
    assert!(!store.has_update(&inst));

    assert!(store.accept_updates("inst-001"));
    let inst = store.installation("inst-001").unwrap().clone();
    assert_eq!(inst.installed_version, 5);
    assert!(!store.has_update(&inst));

    assert!(!store.accept_updates("inst-999"));
}

#[test]
fn test_duplicate_ids_rejected_across_store() {
    let mut store = demo_library_store();

    let dup = DesignComponent::new(
        "comp-004",
        DEMO_LIBRARY_ID,
        "Hero Again",
        ComponentKind::Hero,
        PropSchema::new(),
    );
    assert!(matches!(
        store.add_component(dup).unwrap_err(),
        HubError::DuplicateComponent { .. }
    ));

    let orphan = DesignComponent::new(
        "comp-900",
        "lib-900",
        "Orphan",
        ComponentKind::Card,
        PropSchema::new(),
    );
    assert!(matches!(
        store.add_component(orphan).unwrap_err(),
        HubError::UnknownLibrary { .. }
    ));
}

// Preview rendering
#[test]
fn test_hero_preview_resolves_overrides_and_defaults() {
    let store = demo_library_store();
    let hero = store.component("comp-004").unwrap();
    let tokens = store.tokens(DEMO_LIBRARY_ID).unwrap();

    let mut overrides = Overrides::new();
    overrides.insert("title".to_string(), "Ship faster with Acme".into());

    let node = render_preview(hero, tokens, &overrides, &RenderOptions::default());
    let html = render_html(&node);
    assert!(html.contains("Ship faster with Acme"));
    assert!(html.contains("Build something amazing."));
    assert!(html.contains("Get Started"));
}

#[test]
fn test_gated_elements_drop_out_of_tree() {
    let store = demo_library_store();
    let hero = store.component("comp-004").unwrap();
    let tokens = store.tokens(DEMO_LIBRARY_ID).unwrap();

    let mut overrides = Overrides::new();
    overrides.insert("show_cta".to_string(), PropValue::Bool(false));

    let node = render_preview(hero, tokens, &overrides, &RenderOptions::default());
    let all = texts(&node);
    assert!(!all.contains(&"Get Started".to_string()));
    assert!(!all.contains(&"Learn More".to_string()));
    assert!(all.contains(&"Welcome to Acme".to_string()));
}

#[test]
fn test_unregistered_kind_renders_placeholder() {
    let registry = RendererRegistry::new();
    let component = DesignComponent::new(
        "comp-x",
        DEMO_LIBRARY_ID,
        "Mystery Section",
        ComponentKind::Hero,
        PropSchema::new(),
    );
    let node = designhub::render_component(
        &registry,
        &component,
        &TokenSet::new(),
        &Overrides::new(),
        &ElementBindings::new(),
        &RenderOptions::default(),
    );
    let html = render_html(&node);
    assert!(html.contains("preview-placeholder"));
    assert!(html.contains("Mystery Section"));
}

#[test]
fn test_selection_changes_attributes_not_structure() {
    let store = demo_library_store();
    let hero = store.component("comp-004").unwrap();
    let tokens = store.tokens(DEMO_LIBRARY_ID).unwrap();

    let inactive = render_preview(hero, tokens, &Overrides::new(), &RenderOptions::default());
    let active = render_preview(
        hero,
        tokens,
        &Overrides::new(),
        &RenderOptions {
            selection: Selection::active(Some("el-hero-title")),
            ..Default::default()
        },
    );

    assert_eq!(active.without_handles(), inactive.without_handles());
    assert_eq!(
        active.element_ids(),
        vec![
            "el-hero-badge",
            "el-hero-title",
            "el-hero-subtitle",
            "el-hero-cta",
            "el-hero-secondary",
        ]
    );
    assert!(inactive.element_ids().is_empty());

    let html = render_html(&active);
    assert!(html.contains(r#"data-element="el-hero-title""#));
    assert!(html.contains(r#"data-selected="true""#));
    let html = render_html(&inactive);
    assert!(!html.contains("data-element"));
}

#[test]
fn test_scale_changes_sizing_not_content() {
    let store = demo_library_store();
    let hero = store.component("comp-004").unwrap();
    let tokens = store.tokens(DEMO_LIBRARY_ID).unwrap();

    let sm = render_preview(
        hero,
        tokens,
        &Overrides::new(),
        &RenderOptions {
            scale: Scale::Sm,
            ..Default::default()
        },
    );
    let md = render_preview(hero, tokens, &Overrides::new(), &RenderOptions::default());

    assert_eq!(texts(&sm), texts(&md));
    assert_ne!(render_html(&sm), render_html(&md));
}

// Site pages
#[test]
fn test_marketing_page_renders_end_to_end() {
    let store = demo_library_store();
    let layouts = demo_layout_store();
    let layout = layouts.layout("site-002").unwrap();

    let html = render_site_page(&store, layout, "Marketing Website", &RenderOptions::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Marketing Website</title>"));
    assert!(html.contains("Ship faster with Acme"));
    assert!(html.contains("increase in website traffic in 12 months"));
    assert!(html.contains("Why teams choose Acme"));
    assert!(html.contains("\u{A9} 2026 Acme. All rights reserved."));
    // consumer pages carry no editing attributes (the stylesheet still
    // defines the affordances, so match the attribute form)
    assert!(!html.contains(r#"data-element=""#));
}

#[test]
fn test_all_demo_sites_render() {
    let store = demo_library_store();
    let layouts = demo_layout_store();

    for (site_id, marker) in [
        ("site-002", "Ship faster with Acme"),
        ("site-003", "How can we help?"),
        ("site-004", "Insights &amp; Updates"),
    ] {
        let layout = layouts.layout(site_id).unwrap();
        let html = render_site_page(&store, layout, site_id, &RenderOptions::default());
        assert!(html.contains(marker), "{} misses {:?}", site_id, marker);
    }
}

#[test]
fn test_page_skips_sections_with_unknown_components() {
    let store = demo_library_store();
    let mut layout = PageLayout::new();
    layout
        .push(SectionInstance::new("sec-01", "comp-999"))
        .unwrap();
    layout
        .push(SectionInstance::new("sec-02", "comp-010"))
        .unwrap();

    let html = render_site_page(&store, &layout, "Sparse", &RenderOptions::default());
    assert!(html.contains("Ready to get started?"));
    assert_eq!(html.matches("preview-seamless").count(), 1);
}

// YAML layouts
#[test]
fn test_yaml_layout_parses_and_renders() {
    let yaml = r#"
- instanceId: sec-01
  componentId: comp-004
  propOverrides:
    title: Launch week
    show_cta: false
- instanceId: sec-02
  componentId: comp-011
  propOverrides:
    company_name: Initech
  isLinked: false
"#;
    let sections: Vec<SectionInstance> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].is_linked);
    assert!(!sections[1].is_linked);

    let mut layout = PageLayout::new();
    for section in sections {
        layout.push(section).unwrap();
    }

    let store = demo_library_store();
    let html = render_site_page(&store, &layout, "landing.yaml", &RenderOptions::default());
    assert!(html.contains("Launch week"));
    assert!(html.contains("\u{A9} 2026 Initech. All rights reserved."));
    assert!(!html.contains("Get Started"));
}

#[test]
fn test_yaml_layout_rejects_duplicate_instance_ids() {
    let yaml = r#"
- instanceId: sec-01
  componentId: comp-004
- instanceId: sec-01
  componentId: comp-010
"#;
    let sections: Vec<SectionInstance> = serde_yaml::from_str(yaml).unwrap();
    let mut layout = PageLayout::new();
    let mut result = Ok(());
    for section in sections {
        result = layout.push(section);
        if result.is_err() {
            break;
        }
    }
    assert!(matches!(
        result.unwrap_err(),
        HubError::DuplicateInstance { id } if id == "sec-01"
    ));
}

#[test]
fn test_section_instance_round_trips_through_yaml() {
    let original = SectionInstance::new("sec-mkt-02", "comp-004")
        .with_override("title", "Ship faster with Acme")
        .with_override("show_cta", true);

    let yaml = serde_yaml::to_string(&original).unwrap();
    let back: SectionInstance = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, original);
}

// Schema validation
#[test]
fn test_schema_rejects_duplicate_keys_in_yaml() {
    let yaml = r#"
title: { type: text, default: "A", label: Title }
title: { type: text, default: "B", label: Title }
"#;
    let result: Result<PropSchema, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}

#[test]
fn test_component_yaml_maps_legacy_boolean_kind() {
    let yaml = r#"
id: comp-200
library_id: lib-001
name: Banner
kind: cta-banner
props_schema:
  title: { type: text, default: "Hi", label: Title }
  show_secondary_cta: { type: boolean, default: false, label: Secondary }
"#;
    let component: DesignComponent = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(component.kind, ComponentKind::CtaBanner);
    let keys: Vec<&str> = component.props_schema.keys().collect();
    assert_eq!(keys, vec!["title", "show_secondary_cta"]);
    assert!(component.html_structure.is_empty());

    let resolved = resolve(&component.props_schema, &Overrides::new());
    assert_eq!(resolved.truthy("show_secondary_cta"), Some(false));
}

// Roles
#[test]
fn test_role_permission_matrix() {
    for action in Action::ALL {
        assert!(can(Role::Owner, action));
        assert!(can(Role::Admin, action));
        assert!(!can(Role::ContentEditor, action));
    }

    assert!(can(Role::Marketer, Action::UseSharedElements));
    assert!(!can(Role::Marketer, Action::CreateLibrary));

    assert!(can(Role::SiteManager, Action::AcceptUpdates));
    assert!(can(Role::SiteManager, Action::ManageSites));
    assert!(!can(Role::SiteManager, Action::ManageWorkspace));

    assert!(can(Role::Designer, Action::ManageSourceAssets));
    assert!(!can(Role::Designer, Action::ManageWorkspace));
}
