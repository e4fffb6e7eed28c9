//! Serializes preview trees to safe static HTML.
//! No script, no inline event handlers; only structure and styles. Selection
//! handles become `data-element` / `data-selected` attributes so an embedding
//! surface can wire click dispatch without re-walking the tree.

use std::fmt::Write;

use crate::preview::{PreviewElement, PreviewNode};

/// Base document styles for rendered pages. Component styling is carried
/// inline by the tree; this only resets the page shell and defines the
/// selection affordances.
pub const PREVIEW_BASE_STYLES: &str = "html,body{margin:0;background:#F3F4F6;color:#111827;font-family:system-ui,-apple-system,'Segoe UI',sans-serif;}\
main.hub-page{max-width:960px;margin:0 auto;background:#FFFFFF;}\
h2,h3,h4,p{margin:0;}\
button{border:none;background:none;padding:0;font:inherit;cursor:pointer;}\
[data-element]{cursor:pointer;}\
[data-element]:hover{outline:1px dashed #94A3B8;outline-offset:2px;}\
[data-element][data-selected=\"true\"]{outline:2px solid #2563EB;outline-offset:2px;}";

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_element(el: &PreviewElement, out: &mut String) -> std::fmt::Result {
    write!(out, "<{}", el.tag)?;
    if !el.class_names.is_empty() {
        write!(out, " class=\"{}\"", escape_html(&el.class_names.join(" ")))?;
    }
    if let Some(ref handle) = el.source {
        write!(out, " data-element=\"{}\"", escape_html(&handle.element_id))?;
        if handle.selected {
            write!(out, " data-selected=\"true\"")?;
        }
    }
    if !el.styles.is_empty() {
        let css: Vec<String> = el
            .styles
            .iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect();
        write!(out, " style=\"{}\"", escape_html(&css.join(";")))?;
    }
    write!(out, ">")?;
    for child in &el.children {
        write_node(child, out)?;
    }
    write!(out, "</{}>", el.tag)
}

fn write_node(node: &PreviewNode, out: &mut String) -> std::fmt::Result {
    match node {
        PreviewNode::Element(el) => write_element(el, out),
        PreviewNode::Text(text) => write!(out, "{}", escape_html(text)),
    }
}

/// Serialize one preview tree to an HTML fragment.
pub fn render_html(node: &PreviewNode) -> String {
    let mut out = String::new();
    // fmt::Write on a String cannot fail
    let _ = write_node(node, &mut out);
    out
}

/// Wrap rendered sections in a minimal standalone document. Sections stack
/// flush inside the page shell, in the order given.
pub fn page_to_html(title: &str, sections: &[PreviewNode]) -> String {
    let mut body = String::new();
    for section in sections {
        let _ = write_node(section, &mut body);
        body.push('\n');
    }

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>{}</style>
</head>
<body>
<main class="hub-page">
{}</main>
</body>
</html>
"#,
        escape_html(title),
        PREVIEW_BASE_STYLES,
        body
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::ElementHandle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_simple_element() {
        let node: PreviewNode = PreviewElement::new("p")
            .class("lead")
            .style("color", "var(--preview-muted)")
            .style("font-size", "14px")
            .text("Hello")
            .into();
        assert_eq!(
            render_html(&node),
            "<p class=\"lead\" style=\"color:var(--preview-muted);font-size:14px\">Hello</p>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node: PreviewNode = PreviewElement::new("span")
            .text("<b>\"A & B\"</b>")
            .into();
        assert_eq!(
            render_html(&node),
            "<span>&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_handles_become_data_attributes() {
        let unselected: PreviewNode = PreviewElement::new("h2")
            .source(Some(ElementHandle {
                element_id: "el-hero-title".into(),
                selected: false,
            }))
            .text("Title")
            .into();
        assert_eq!(
            render_html(&unselected),
            "<h2 data-element=\"el-hero-title\">Title</h2>"
        );

        let selected: PreviewNode = PreviewElement::new("h2")
            .source(Some(ElementHandle {
                element_id: "el-hero-title".into(),
                selected: true,
            }))
            .text("Title")
            .into();
        assert_eq!(
            render_html(&selected),
            "<h2 data-element=\"el-hero-title\" data-selected=\"true\">Title</h2>"
        );
    }

    #[test]
    fn test_nested_children_render_in_order() {
        let node: PreviewNode = PreviewElement::new("div")
            .style("display", "flex")
            .child(PreviewElement::new("span").text("a"))
            .child(PreviewNode::text("b"))
            .child(PreviewElement::new("span").text("c"))
            .into();
        assert_eq!(
            render_html(&node),
            "<div style=\"display:flex\"><span>a</span>b<span>c</span></div>"
        );
    }

    #[test]
    fn test_page_wraps_sections() {
        let section: PreviewNode = PreviewElement::new("div").text("one").into();
        let html = page_to_html("Acme <Marketing>", &[section.clone(), section]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme &lt;Marketing&gt;</title>"));
        assert!(html.contains(PREVIEW_BASE_STYLES));
        assert_eq!(html.matches("<div>one</div>").count(), 2);
        assert!(html.contains("</main>"));
    }
}
