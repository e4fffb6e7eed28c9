//! Builtin section renderers, one per component kind.
//!
//! Every renderer produces a fixed layout: structure and static texts are
//! baked in, while bindable element content and visibility flow through the
//! render context. Colors and radii only ever reference the `--preview-*`
//! custom properties, so a library's tokens restyle every section without
//! touching the renderers.

use std::sync::OnceLock;

use regex::Regex;

use crate::component::ComponentKind;
use crate::elements::*;
use crate::preview::{PreviewElement, PreviewNode, RenderContext, RendererRegistry, SectionRenderer};

pub(crate) fn register_builtins(registry: &mut RendererRegistry) {
    registry.register(ComponentKind::PrimaryButton, Box::new(PrimaryButtonRenderer));
    registry.register(ComponentKind::SecondaryButton, Box::new(SecondaryButtonRenderer));
    registry.register(ComponentKind::NavigationBar, Box::new(NavigationBarRenderer));
    registry.register(ComponentKind::Hero, Box::new(HeroRenderer));
    registry.register(ComponentKind::Card, Box::new(CardRenderer));
    registry.register(ComponentKind::PricingTable, Box::new(PricingTableRenderer));
    registry.register(ComponentKind::Testimonial, Box::new(TestimonialRenderer));
    registry.register(ComponentKind::FeatureRow, Box::new(FeatureRowRenderer));
    registry.register(ComponentKind::Stats, Box::new(StatsRenderer));
    registry.register(ComponentKind::CtaBanner, Box::new(CtaBannerRenderer));
    registry.register(ComponentKind::Footer, Box::new(FooterRenderer));
    registry.register(ComponentKind::FeaturesGrid, Box::new(FeaturesGridRenderer));
}

// ─── Shared layout helpers ───────────────────────────────────────────────────

fn div() -> PreviewElement {
    PreviewElement::new("div")
}

fn col(gap: &str) -> PreviewElement {
    div()
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("gap", gap)
}

fn row(gap: &str) -> PreviewElement {
    div()
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", gap)
}

fn grid(columns: usize, gap: &str) -> PreviewElement {
    div()
        .style("display", "grid")
        .style("grid-template-columns", format!("repeat({columns}, 1fr)"))
        .style("gap", gap)
}

fn glyph(symbol: &str, size: &str, color: &str) -> PreviewElement {
    PreviewElement::new("span")
        .style("font-size", size)
        .style("line-height", "1")
        .style("color", color)
        .text(symbol)
}

fn first_initial(text: &str) -> String {
    text.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Centers a standalone component when it is rendered seamless (full page
/// width); framed previews center through the frame itself.
fn standalone(ctx: &RenderContext, padding: &str, inner: PreviewElement) -> PreviewNode {
    let wrapper = if ctx.seamless {
        div()
            .style("display", "flex")
            .style("justify-content", "center")
            .style("padding", padding)
    } else {
        div()
    };
    wrapper.child(inner).into()
}

// ─── Buttons ─────────────────────────────────────────────────────────────────

pub struct PrimaryButtonRenderer;

impl SectionRenderer for PrimaryButtonRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let label = ctx.content(&BTN_PRI_TEXT, "Click me");
        let mut button = PreviewElement::new("button")
            .source(ctx.handle(&BTN_PRI_TEXT))
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("gap", "8px")
            .style("padding", ctx.scale.pick("8px 20px", "10px 24px"))
            .style("font-size", ctx.scale.pick("12px", "14px"))
            .style("font-weight", "600")
            .style("color", "#FFFFFF")
            .style("background-color", "var(--preview-primary)")
            .style("border-radius", "var(--preview-radius)")
            .text(label);
        if ctx.visible(&BTN_PRI_ICON) {
            button = button.child(
                glyph("\u{2192}", "14px", "#FFFFFF").source(ctx.handle(&BTN_PRI_ICON)),
            );
        }
        standalone(ctx, "32px 0", button)
    }
}

pub struct SecondaryButtonRenderer;

impl SectionRenderer for SecondaryButtonRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let label = ctx.content(&BTN_SEC_TEXT, "Learn more");
        let variant = ctx
            .props
            .text("variant")
            .unwrap_or_else(|| "filled".to_string());
        let mut button = PreviewElement::new("button")
            .source(ctx.handle(&BTN_SEC_TEXT))
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("gap", "8px")
            .style("padding", ctx.scale.pick("8px 20px", "10px 24px"))
            .style("font-size", ctx.scale.pick("12px", "14px"))
            .style("font-weight", "600");
        button = if variant == "filled" {
            button
                .style("background-color", "var(--preview-secondary)")
                .style("color", "#FFFFFF")
                .style("border-radius", "var(--preview-radius)")
        } else {
            button
                .style("color", "var(--preview-primary)")
                .style("border", "1.5px solid var(--preview-primary)")
                .style("border-radius", "var(--preview-radius)")
                .style("background-color", "transparent")
        };
        button = button.text(label);
        if ctx.visible(&BTN_SEC_ICON) {
            let color = if variant == "filled" {
                "#FFFFFF"
            } else {
                "var(--preview-primary)"
            };
            button =
                button.child(glyph("\u{2192}", "14px", color).source(ctx.handle(&BTN_SEC_ICON)));
        }
        standalone(ctx, "32px 0", button)
    }
}

// ─── Navigation bar ──────────────────────────────────────────────────────────

pub struct NavigationBarRenderer;

impl SectionRenderer for NavigationBarRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let logo_text = ctx.content(&NAV_LOGO, "Acme");
        let text_size = ctx.scale.pick("10px", "12px");

        let logo_mark = div()
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", "28px")
            .style("height", "28px")
            .style("border-radius", "6px")
            .style("font-size", "10px")
            .style("font-weight", "700")
            .style("color", "#FFFFFF")
            .style("background-color", "var(--preview-primary)")
            .text(first_initial(&logo_text));
        let brand = row("12px").child(logo_mark).child(
            PreviewElement::new("span")
                .source(ctx.handle(&NAV_LOGO))
                .style("font-size", text_size)
                .style("font-weight", "600")
                .style("color", "var(--preview-text)")
                .text(logo_text),
        );

        let mut links = row("20px");
        for (decl, label) in [
            (&NAV_PRODUCTS, "Products"),
            (&NAV_SOLUTIONS, "Solutions"),
            (&NAV_PRICING, "Pricing"),
            (&NAV_RESOURCES, "Resources"),
        ] {
            links = links.child(
                PreviewElement::new("span")
                    .source(ctx.handle(decl))
                    .style("font-size", text_size)
                    .style("color", "var(--preview-muted)")
                    .text(ctx.content(decl, label)),
            );
        }
        if ctx.visible(&NAV_CTA) {
            links = links.child(
                PreviewElement::new("button")
                    .source(ctx.handle(&NAV_CTA))
                    .style("padding", "6px 12px")
                    .style("font-size", text_size)
                    .style("font-weight", "500")
                    .style("color", "#FFFFFF")
                    .style("background-color", "var(--preview-primary)")
                    .style("border-radius", "var(--preview-radius)")
                    .text(ctx.content(&NAV_CTA, "Get Started")),
            );
        }

        div()
            .style("width", "100%")
            .child(
                div()
                    .style("display", "flex")
                    .style("align-items", "center")
                    .style("justify-content", "space-between")
                    .style("padding", "12px 24px")
                    .style("border-bottom", "1px solid var(--preview-border)")
                    .child(brand)
                    .child(links),
            )
            .into()
    }
}

// ─── Hero section ────────────────────────────────────────────────────────────

pub struct HeroRenderer;

impl SectionRenderer for HeroRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let heading_size = ctx.scale.pick("20px", "30px");
        let text_size = ctx.scale.pick("10px", "14px");

        let badge = PreviewElement::new("span")
            .source(ctx.handle(&HERO_BADGE))
            .style("display", "inline-block")
            .style("border-radius", "9999px")
            .style("padding", "4px 12px")
            .style("font-size", ctx.scale.pick("10px", "12px"))
            .style("font-weight", "500")
            .style(
                "background-color",
                "color-mix(in srgb, var(--preview-primary) 10%, transparent)",
            )
            .style("color", "var(--preview-primary)")
            .text(ctx.content(&HERO_BADGE, "New Release"));

        let title = PreviewElement::new("h2")
            .source(ctx.handle(&HERO_TITLE))
            .style("font-size", heading_size)
            .style("font-weight", "700")
            .style("line-height", "1.25")
            .style("letter-spacing", "-0.025em")
            .style("color", "var(--preview-text)")
            .text(ctx.content(&HERO_TITLE, "Welcome to Acme"));

        let subtitle = PreviewElement::new("p")
            .source(ctx.handle(&HERO_SUBTITLE))
            .style("max-width", "448px")
            .style("font-size", text_size)
            .style("line-height", "1.625")
            .style("color", "var(--preview-muted)")
            .text(ctx.content(&HERO_SUBTITLE, "Build something amazing."));

        let button_size = ctx.scale.pick("12px", "14px");
        let cta = ctx.visible(&HERO_CTA).then(|| {
            PreviewElement::new("button")
                .source(ctx.handle(&HERO_CTA))
                .style("padding", "10px 20px")
                .style("font-size", button_size)
                .style("font-weight", "600")
                .style("color", "#FFFFFF")
                .style("background-color", "var(--preview-primary)")
                .style("border-radius", "var(--preview-radius)")
                .text(ctx.content(&HERO_CTA, "Get Started"))
                .into()
        });
        let secondary = ctx.visible(&HERO_SECONDARY).then(|| {
            PreviewElement::new("button")
                .source(ctx.handle(&HERO_SECONDARY))
                .style("padding", "10px 20px")
                .style("font-size", button_size)
                .style("font-weight", "600")
                .style("color", "var(--preview-text)")
                .style("border", "1px solid var(--preview-border)")
                .style("border-radius", "var(--preview-radius)")
                .text(ctx.content(&HERO_SECONDARY, "Learn More"))
                .into()
        });

        let mut inner = col("20px")
            .style("align-items", "center")
            .style("margin", "0 auto")
            .style("max-width", "512px")
            .style("padding", "0 24px")
            .child(badge)
            .child(title)
            .child(subtitle);
        if cta.is_some() || secondary.is_some() {
            inner = inner.child(
                row("12px")
                    .style("justify-content", "center")
                    .style("padding-top", "8px")
                    .maybe_child(cta)
                    .maybe_child(secondary),
            );
        }

        div()
            .style("width", "100%")
            .style("padding", "64px 0")
            .style("text-align", "center")
            .child(inner)
            .into()
    }
}

// ─── Card ────────────────────────────────────────────────────────────────────

pub struct CardRenderer;

impl SectionRenderer for CardRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "12px");
        let mut card = div()
            .style("overflow", "hidden")
            .style("width", "100%")
            .style("max-width", if ctx.seamless { "384px" } else { "280px" })
            .style("border", "1px solid var(--preview-border)")
            .style("border-radius", "var(--preview-radius)")
            .style("background-color", "var(--preview-bg)");

        if ctx.visible(&CARD_IMAGE) {
            card = card.child(
                div()
                    .source(ctx.handle(&CARD_IMAGE))
                    .style("height", "128px")
                    .style(
                        "background",
                        "linear-gradient(135deg, var(--preview-primary), var(--preview-secondary))",
                    )
                    .style("opacity", "0.85"),
            );
        }

        let link = row("4px")
            .source(ctx.handle(&CARD_LINK))
            .style("padding-top", "4px")
            .child(glyph("\u{203A}", "12px", "var(--preview-primary)"))
            .child(
                PreviewElement::new("span")
                    .style("font-size", text_size)
                    .style("font-weight", "500")
                    .style("color", "var(--preview-primary)")
                    .text(ctx.content(&CARD_LINK, "Learn more")),
            );

        card = card.child(
            col("8px")
                .style("padding", "16px")
                .child(
                    PreviewElement::new("p")
                        .source(ctx.handle(&CARD_TITLE))
                        .style("font-size", ctx.scale.pick("12px", "14px"))
                        .style("font-weight", "600")
                        .style("color", "var(--preview-text)")
                        .text(ctx.content(&CARD_TITLE, "Card Title")),
                )
                .child(
                    PreviewElement::new("p")
                        .source(ctx.handle(&CARD_SUBTITLE))
                        .style("font-size", text_size)
                        .style("line-height", "1.625")
                        .style("color", "var(--preview-muted)")
                        .text(ctx.content(&CARD_SUBTITLE, "Card subtitle")),
                )
                .child(link),
        );

        standalone(ctx, "24px", card)
    }
}

// ─── Pricing table ───────────────────────────────────────────────────────────

fn price_parts(price: &str) -> (String, String) {
    static PRICE_SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = PRICE_SPLIT_REGEX.get_or_init(|| Regex::new(r"^([^/]+)(/.*)?$").unwrap());
    match re.captures(price) {
        Some(caps) => (
            caps.get(1).map_or(price, |m| m.as_str()).to_string(),
            caps.get(2).map_or("", |m| m.as_str()).to_string(),
        ),
        None => (price.to_string(), String::new()),
    }
}

pub struct PricingTableRenderer;

impl SectionRenderer for PricingTableRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "12px");
        let highlighted = ctx.visible(&PRICE_BADGE);
        let (amount, period) = price_parts(&ctx.content(&PRICE_AMOUNT, "$29/mo"));

        let mut header = row("0")
            .style("justify-content", "space-between")
            .child(
                PreviewElement::new("span")
                    .source(ctx.handle(&PRICE_NAME))
                    .style("font-size", ctx.scale.pick("12px", "14px"))
                    .style("font-weight", "700")
                    .style("color", "var(--preview-text)")
                    .text(ctx.content(&PRICE_NAME, "Pro Plan")),
            );
        if highlighted {
            header = header.child(
                PreviewElement::new("span")
                    .source(ctx.handle(&PRICE_BADGE))
                    .style("border-radius", "9999px")
                    .style("padding", "2px 8px")
                    .style("font-size", "9px")
                    .style("font-weight", "500")
                    .style("color", "#FFFFFF")
                    .style("background-color", "var(--preview-primary)")
                    .text(ctx.content(&PRICE_BADGE, "Popular")),
            );
        }

        let mut price_line = div().child(
            PreviewElement::new("span")
                .source(ctx.handle(&PRICE_AMOUNT))
                .style("font-size", "30px")
                .style("font-weight", "700")
                .style("color", "var(--preview-text)")
                .text(amount),
        );
        if !period.is_empty() {
            price_line = price_line.child(
                PreviewElement::new("span")
                    .style("font-size", text_size)
                    .style("color", "var(--preview-muted)")
                    .text(period),
            );
        }

        let mut features = col("8px");
        for feature in ["10 projects", "5GB storage", "Priority support", "API access"] {
            features = features.child(
                row("8px")
                    .child(glyph("\u{2713}", "14px", "var(--preview-success)"))
                    .child(
                        PreviewElement::new("span")
                            .style("font-size", text_size)
                            .style("color", "var(--preview-text)")
                            .text(feature),
                    ),
            );
        }

        let card = col("16px")
            .style("padding", "20px")
            .style("width", "100%")
            .style("max-width", if ctx.seamless { "320px" } else { "240px" })
            .style(
                "border",
                if highlighted {
                    "2px solid var(--preview-primary)"
                } else {
                    "1px solid var(--preview-border)"
                },
            )
            .style("border-radius", "var(--preview-radius)")
            .style("background-color", "var(--preview-bg)")
            .child(header)
            .child(price_line)
            .child(features)
            .child(
                PreviewElement::new("button")
                    .source(ctx.handle(&PRICE_CTA))
                    .style("width", "100%")
                    .style("padding", "8px 0")
                    .style("font-size", text_size)
                    .style("font-weight", "600")
                    .style("color", "#FFFFFF")
                    .style("background-color", "var(--preview-primary)")
                    .style("border-radius", "var(--preview-radius)")
                    .text(ctx.content(&PRICE_CTA, "Subscribe")),
            );

        standalone(ctx, "24px", card)
    }
}

// ─── Testimonial ─────────────────────────────────────────────────────────────

pub struct TestimonialRenderer;

impl SectionRenderer for TestimonialRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "12px");
        let quote = ctx.content(&QUOTE_TEXT, "This product changed everything for us.");
        let author = ctx.content(&QUOTE_AUTHOR, "Jane Doe, CEO");

        // "Name, Role" convention; everything after the first comma is the role
        let mut parts = author.splitn(2, ',');
        let author_name = parts.next().unwrap_or(&author).trim().to_string();
        let author_role = parts.next().map(str::trim).unwrap_or("").to_string();

        let mut stars = row("2px");
        for _ in 0..5 {
            stars = stars.child(glyph("\u{2605}", "14px", "var(--preview-primary)"));
        }

        let quote_box = col("12px")
            .style("padding", "16px")
            .style("border-left", "3px solid var(--preview-primary)")
            .style(
                "background-color",
                "color-mix(in srgb, var(--preview-primary) 4%, transparent)",
            )
            .style(
                "border-radius",
                "0 var(--preview-radius) var(--preview-radius) 0",
            )
            .child(stars)
            .child(
                PreviewElement::new("p")
                    .source(ctx.handle(&QUOTE_TEXT))
                    .style("font-style", "italic")
                    .style("font-size", text_size)
                    .style("line-height", "1.625")
                    .style("color", "var(--preview-text)")
                    .text(format!("\u{201C}{quote}\u{201D}")),
            );

        let mut byline = row("12px").style("padding", "0 4px");
        if ctx.visible(&QUOTE_AVATAR) {
            byline = byline.child(
                div()
                    .source(ctx.handle(&QUOTE_AVATAR))
                    .style("display", "flex")
                    .style("align-items", "center")
                    .style("justify-content", "center")
                    .style("width", "32px")
                    .style("height", "32px")
                    .style("border-radius", "9999px")
                    .style("font-size", "12px")
                    .style("font-weight", "700")
                    .style("color", "#FFFFFF")
                    .style("background-color", "var(--preview-secondary)")
                    .text(first_initial(&author_name)),
            );
        }
        let mut who = div().child(
            PreviewElement::new("p")
                .source(ctx.handle(&QUOTE_AUTHOR))
                .style("font-size", text_size)
                .style("font-weight", "600")
                .style("color", "var(--preview-text)")
                .text(author_name),
        );
        if !author_role.is_empty() {
            who = who.child(
                PreviewElement::new("p")
                    .style("font-size", "10px")
                    .style("color", "var(--preview-muted)")
                    .text(author_role),
            );
        }
        byline = byline.child(who);

        let inner = col("12px")
            .style("width", "100%")
            .style("max-width", if ctx.seamless { "448px" } else { "300px" })
            .child(quote_box)
            .child(byline);

        standalone(ctx, "40px 24px", inner)
    }
}

// ─── Feature row ─────────────────────────────────────────────────────────────

pub struct FeatureRowRenderer;

impl SectionRenderer for FeatureRowRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "14px");
        let heading_size = ctx.scale.pick("14px", "20px");
        let image_right = ctx.props.truthy("image_right").unwrap_or(false);

        let mut text_column = col("12px").style("padding", "0 24px");
        if ctx.visible(&FEAT_STEP) {
            let step = ctx.content(&FEAT_STEP, "1");
            text_column = text_column.child(
                div().child(
                    PreviewElement::new("span")
                        .source(ctx.handle(&FEAT_STEP))
                        .style("display", "inline-block")
                        .style("border-radius", "9999px")
                        .style("padding", "2px 10px")
                        .style("font-size", ctx.scale.pick("10px", "12px"))
                        .style("font-weight", "600")
                        .style(
                            "background-color",
                            "color-mix(in srgb, var(--preview-primary) 10%, transparent)",
                        )
                        .style("color", "var(--preview-primary)")
                        .text(format!("Step {step}")),
                ),
            );
        }
        text_column = text_column
            .child(
                PreviewElement::new("h3")
                    .source(ctx.handle(&FEAT_TITLE))
                    .style("font-size", heading_size)
                    .style("font-weight", "700")
                    .style("color", "var(--preview-text)")
                    .text(ctx.content(&FEAT_TITLE, "Feature title")),
            )
            .child(
                PreviewElement::new("p")
                    .source(ctx.handle(&FEAT_DESC))
                    .style("font-size", text_size)
                    .style("line-height", "1.625")
                    .style("color", "var(--preview-muted)")
                    .text(ctx.content(&FEAT_DESC, "Feature description goes here.")),
            )
            .child(
                row("6px")
                    .source(ctx.handle(&FEAT_LINK))
                    .style("padding-top", "4px")
                    .child(
                        PreviewElement::new("span")
                            .style("font-size", ctx.scale.pick("10px", "12px"))
                            .style("font-weight", "600")
                            .style("color", "var(--preview-primary)")
                            .text(ctx.content(&FEAT_LINK, "Learn more")),
                    )
                    .child(glyph("\u{2192}", "12px", "var(--preview-primary)")),
            );

        let visual = div()
            .source(ctx.handle(&FEAT_IMAGE))
            .style("margin", "0 24px")
            .style("aspect-ratio", "4 / 3")
            .style("border-radius", "8px")
            .style(
                "background",
                "linear-gradient(135deg, color-mix(in srgb, var(--preview-primary) 15%, transparent), color-mix(in srgb, var(--preview-secondary) 15%, transparent))",
            )
            .style("border", "1px solid var(--preview-border)")
            .child(
                col("8px")
                    .style("height", "100%")
                    .style("align-items", "center")
                    .style("justify-content", "center")
                    .style("padding", "16px")
                    .style("opacity", "0.4")
                    .child(
                        div()
                            .style("height", "8px")
                            .style("width", "75%")
                            .style("border-radius", "4px")
                            .style("background-color", "var(--preview-primary)"),
                    )
                    .child(
                        div()
                            .style("height", "8px")
                            .style("width", "50%")
                            .style("border-radius", "4px")
                            .style("background-color", "var(--preview-muted)"),
                    )
                    .child(
                        div()
                            .style("margin-top", "8px")
                            .style("height", "32px")
                            .style("width", "32px")
                            .style("border-radius", "9999px")
                            .style("background-color", "var(--preview-primary)"),
                    ),
            );

        let mut layout = grid(2, "32px").style("align-items", "center");
        layout = if image_right {
            layout.child(text_column).child(visual)
        } else {
            layout.child(visual).child(text_column)
        };

        div()
            .style("width", "100%")
            .style("padding", "48px 0")
            .child(layout)
            .into()
    }
}

// ─── Stats section ───────────────────────────────────────────────────────────

pub struct StatsRenderer;

impl SectionRenderer for StatsRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "12px");
        let value_size = ctx.scale.pick("20px", "30px");
        let stats = [
            (&STAT_1_VALUE, &STAT_1_LABEL, "134%", "increase in traffic"),
            (&STAT_2_VALUE, &STAT_2_LABEL, "10x", "faster deployments"),
            (&STAT_3_VALUE, &STAT_3_LABEL, "99.9%", "uptime guaranteed"),
        ];

        let mut layout = grid(3, "24px")
            .style("padding", "0 24px")
            .style("text-align", "center");
        for (value_decl, label_decl, value_fallback, label_fallback) in stats {
            layout = layout.child(
                col("4px")
                    .child(
                        PreviewElement::new("p")
                            .source(ctx.handle(value_decl))
                            .style("font-size", value_size)
                            .style("font-weight", "700")
                            .style("color", "#FFFFFF")
                            .text(ctx.content(value_decl, value_fallback)),
                    )
                    .child(
                        PreviewElement::new("p")
                            .source(ctx.handle(label_decl))
                            .style("font-size", text_size)
                            .style("color", "rgba(255,255,255,0.75)")
                            .text(ctx.content(label_decl, label_fallback)),
                    ),
            );
        }

        div()
            .style("width", "100%")
            .style("padding", "48px 0")
            .style(
                "background",
                "linear-gradient(135deg, var(--preview-primary), var(--preview-secondary))",
            )
            .child(layout)
            .into()
    }
}

// ─── CTA banner ──────────────────────────────────────────────────────────────

pub struct CtaBannerRenderer;

impl SectionRenderer for CtaBannerRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let heading_size = ctx.scale.pick("18px", "24px");
        let text_size = ctx.scale.pick("10px", "14px");
        let button_size = ctx.scale.pick("12px", "14px");

        let mut buttons = row("12px")
            .style("justify-content", "center")
            .style("padding-top", "8px")
            .child(
                PreviewElement::new("button")
                    .source(ctx.handle(&CTA_BTN))
                    .style("padding", "10px 20px")
                    .style("font-size", button_size)
                    .style("font-weight", "600")
                    .style("color", "#FFFFFF")
                    .style("background-color", "var(--preview-primary)")
                    .style("border-radius", "var(--preview-radius)")
                    .text(ctx.content(&CTA_BTN, "Start Free Trial")),
            );
        if ctx.visible(&CTA_SECONDARY) {
            buttons = buttons.child(
                PreviewElement::new("button")
                    .source(ctx.handle(&CTA_SECONDARY))
                    .style("padding", "10px 20px")
                    .style("font-size", button_size)
                    .style("font-weight", "600")
                    .style("color", "var(--preview-text)")
                    .style("border", "1px solid var(--preview-border)")
                    .style("border-radius", "var(--preview-radius)")
                    .text(ctx.content(&CTA_SECONDARY, "Contact Sales")),
            );
        }

        div()
            .style("width", "100%")
            .style("padding", "64px 0")
            .style("text-align", "center")
            .style(
                "background-color",
                "color-mix(in srgb, var(--preview-primary) 6%, white)",
            )
            .child(
                col("16px")
                    .style("align-items", "center")
                    .style("margin", "0 auto")
                    .style("max-width", "448px")
                    .style("padding", "0 24px")
                    .child(
                        PreviewElement::new("h3")
                            .source(ctx.handle(&CTA_TITLE))
                            .style("font-size", heading_size)
                            .style("font-weight", "700")
                            .style("color", "var(--preview-text)")
                            .text(ctx.content(&CTA_TITLE, "Ready to get started?")),
                    )
                    .child(
                        PreviewElement::new("p")
                            .source(ctx.handle(&CTA_SUBTITLE))
                            .style("font-size", text_size)
                            .style("color", "var(--preview-muted)")
                            .text(ctx.content(
                                &CTA_SUBTITLE,
                                "Join thousands of teams using our platform.",
                            )),
                    )
                    .child(buttons),
            )
            .into()
    }
}

// ─── Footer ──────────────────────────────────────────────────────────────────

const FOOTER_COLUMNS: &[(&str, [&str; 4])] = &[
    ("Product", ["Features", "Pricing", "Changelog", "Integrations"]),
    ("Company", ["About", "Blog", "Careers", "Contact"]),
    ("Resources", ["Documentation", "Help Center", "Community", "Status"]),
    ("Legal", ["Privacy", "Terms", "Security", "Cookies"]),
];

pub struct FooterRenderer;

impl SectionRenderer for FooterRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "12px");
        let company = ctx.content(&FOOTER_NAME, "Acme");

        let logo_mark = div()
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", "24px")
            .style("height", "24px")
            .style("border-radius", "6px")
            .style("font-size", "9px")
            .style("font-weight", "700")
            .style("color", "#FFFFFF")
            .style("background-color", "var(--preview-primary)")
            .text(first_initial(&company));

        let mut brand = col("12px")
            .child(row("8px").child(logo_mark).child(
                PreviewElement::new("span")
                    .source(ctx.handle(&FOOTER_NAME))
                    .style("font-size", text_size)
                    .style("font-weight", "600")
                    .style("color", "#FFFFFF")
                    .text(company.clone()),
            ))
            .child(
                PreviewElement::new("p")
                    .source(ctx.handle(&FOOTER_TAGLINE))
                    .style("font-size", text_size)
                    .style("line-height", "1.625")
                    .style("color", "rgba(255,255,255,0.5)")
                    .text(ctx.content(&FOOTER_TAGLINE, "Build something amazing.")),
            );
        if ctx.visible(&FOOTER_SOCIAL) {
            let mut social = row("12px")
                .source(ctx.handle(&FOOTER_SOCIAL))
                .style("padding-top", "4px");
            for _ in 0..4 {
                social = social.child(
                    div()
                        .style("width", "14px")
                        .style("height", "14px")
                        .style("border-radius", "9999px")
                        .style("background-color", "rgba(255,255,255,0.4)"),
                );
            }
            brand = brand.child(social);
        }

        let mut columns = grid(5, "24px").child(brand);
        for (title, items) in FOOTER_COLUMNS {
            let mut item_list = col("8px");
            for item in items {
                item_list = item_list.child(
                    PreviewElement::new("p")
                        .style("font-size", text_size)
                        .style("color", "rgba(255,255,255,0.4)")
                        .text(*item),
                );
            }
            columns = columns.child(
                col("12px")
                    .child(
                        PreviewElement::new("p")
                            .style("font-size", text_size)
                            .style("font-weight", "600")
                            .style("color", "rgba(255,255,255,0.7)")
                            .text(*title),
                    )
                    .child(item_list),
            );
        }

        let mut legal = row("16px");
        for item in ["Privacy", "Terms", "Cookies"] {
            legal = legal.child(
                PreviewElement::new("span")
                    .style("font-size", text_size)
                    .style("color", "rgba(255,255,255,0.3)")
                    .text(item),
            );
        }
        let bottom = row("0")
            .style("justify-content", "space-between")
            .style("border-top", "1px solid rgba(255,255,255,0.1)")
            .style("padding-top", "24px")
            .child(
                PreviewElement::new("p")
                    .style("font-size", text_size)
                    .style("color", "rgba(255,255,255,0.3)")
                    .text(format!("\u{A9} 2026 {company}. All rights reserved.")),
            )
            .child(legal);

        div()
            .style("width", "100%")
            .style("background-color", "var(--preview-text)")
            .child(
                col("32px")
                    .style("padding", "40px 24px")
                    .child(columns)
                    .child(bottom),
            )
            .into()
    }
}

// ─── Features grid ───────────────────────────────────────────────────────────

pub struct FeaturesGridRenderer;

impl SectionRenderer for FeaturesGridRenderer {
    fn render(&self, ctx: &RenderContext) -> PreviewNode {
        let text_size = ctx.scale.pick("10px", "12px");
        let heading_size = ctx.scale.pick("14px", "20px");
        let cards = [
            (&GRID_C1_TITLE, &GRID_C1_DESC, "Lightning Fast", "Deploy globally in seconds with our edge network."),
            (&GRID_C2_TITLE, &GRID_C2_DESC, "Enterprise Security", "SOC 2 compliant with end-to-end encryption."),
            (&GRID_C3_TITLE, &GRID_C3_DESC, "Team Collaboration", "Real-time editing and review workflows."),
        ];

        let header = col("8px")
            .style("align-items", "center")
            .style("margin", "0 auto")
            .style("max-width", "512px")
            .style("padding", "0 24px 32px")
            .style("text-align", "center")
            .child(
                PreviewElement::new("h3")
                    .source(ctx.handle(&GRID_TITLE))
                    .style("font-size", heading_size)
                    .style("font-weight", "700")
                    .style("color", "var(--preview-text)")
                    .text(ctx.content(&GRID_TITLE, "Why choose us")),
            )
            .child(
                PreviewElement::new("p")
                    .source(ctx.handle(&GRID_SUBTITLE))
                    .style("font-size", text_size)
                    .style("color", "var(--preview-muted)")
                    .text(ctx.content(&GRID_SUBTITLE, "Everything you need to scale.")),
            );

        let mut layout = grid(3, "16px").style("padding", "0 24px");
        for (title_decl, desc_decl, title_fallback, desc_fallback) in cards {
            let icon_box = div()
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("width", "36px")
                .style("height", "36px")
                .style("border-radius", "8px")
                .style(
                    "background-color",
                    "color-mix(in srgb, var(--preview-primary) 10%, transparent)",
                )
                .child(glyph("\u{25C6}", "16px", "var(--preview-primary)"));
            layout = layout.child(
                col("12px")
                    .style("border-radius", "8px")
                    .style("padding", "20px")
                    .style("border", "1px solid var(--preview-border)")
                    .style("background-color", "var(--preview-bg)")
                    .child(icon_box)
                    .child(
                        PreviewElement::new("h4")
                            .source(ctx.handle(title_decl))
                            .style("font-size", ctx.scale.pick("10px", "14px"))
                            .style("font-weight", "600")
                            .style("color", "var(--preview-text)")
                            .text(ctx.content(title_decl, title_fallback)),
                    )
                    .child(
                        PreviewElement::new("p")
                            .source(ctx.handle(desc_decl))
                            .style("font-size", text_size)
                            .style("line-height", "1.625")
                            .style("color", "var(--preview-muted)")
                            .text(ctx.content(desc_decl, desc_fallback)),
                    ),
            );
        }

        div()
            .style("width", "100%")
            .style("padding", "48px 0")
            .child(header)
            .child(layout)
            .into()
    }
}
