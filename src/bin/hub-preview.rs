use std::env;
use std::fs;
use std::process;

use designhub::{
    demo_layout_store, demo_library_store, render_site_page, HubError, PageLayout, RenderOptions,
    Scale, SectionInstance,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let mut scale = Scale::Md;
    let mut list = false;
    let mut target: Option<String> = None;

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => list = true,
            "--scale" => match iter.next().map(String::as_str) {
                Some("sm") => scale = Scale::Sm,
                Some("md") => scale = Scale::Md,
                Some(other) => {
                    eprintln!("Unknown scale '{}': expected sm or md", other);
                    process::exit(1);
                }
                None => {
                    eprintln!("--scale requires a value (sm or md)");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option '{}'", other);
                print_usage();
                process::exit(1);
            }
            other => target = Some(other.to_string()),
        }
    }

    if list {
        list_demo_sites();
        return;
    }

    let Some(target) = target else {
        print_usage();
        process::exit(1);
    };

    let opts = RenderOptions {
        scale,
        ..Default::default()
    };
    match render_target(&target, &opts) {
        Ok(html) => print!("{}", html),
        Err(e) => {
            eprintln!("✗ {} failed to render:", target);
            print_error(&e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: hub-preview <site-id|layout.yaml> [--scale sm|md] [--list]");
    eprintln!();
    eprintln!("Renders a demo site page, or a YAML layout of section instances");
    eprintln!("resolved against the demo library, as a standalone HTML document.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  hub-preview site-002 > page.html");
    eprintln!("  hub-preview landing.yaml --scale sm");
    eprintln!("  hub-preview --list");
}

fn list_demo_sites() {
    let store = demo_library_store();
    let layouts = demo_layout_store();
    for site_id in layouts.site_ids() {
        let name = store
            .site(site_id)
            .map(|s| s.name.as_str())
            .unwrap_or("(unnamed)");
        println!(
            "{}  {} ({} sections)",
            site_id,
            name,
            layouts.sections(site_id).len()
        );
    }
}

fn render_target(target: &str, opts: &RenderOptions) -> Result<String, HubError> {
    let store = demo_library_store();
    let layouts = demo_layout_store();

    if let Some(layout) = layouts.layout(target) {
        let title = store
            .site(target)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| target.to_string());
        return Ok(render_site_page(&store, layout, &title, opts));
    }

    // not a demo site id, so treat it as a YAML layout file
    let content = fs::read_to_string(target)
        .map_err(|e| HubError::ValidationError(format!("Failed to read file: {}", e)))?;
    let sections: Vec<SectionInstance> = serde_yaml::from_str(&content)?;

    let mut layout = PageLayout::new();
    for section in sections {
        layout.push(section)?;
    }
    Ok(render_site_page(&store, &layout, target, opts))
}

fn print_error(error: &HubError) {
    match error {
        HubError::ValidationError(msg) => {
            eprintln!("  Validation error:");
            eprintln!("    {}", msg);
        }
        HubError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        HubError::DuplicateInstance { id } => {
            eprintln!("  Duplicate section instance id '{}'", id);
            eprintln!("    Each placed section needs a unique instance id");
        }
        HubError::InvalidTokenValue { key, value, reason } => {
            eprintln!("  Invalid value '{}' for token '{}':", value, key);
            eprintln!("    {}", reason);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
