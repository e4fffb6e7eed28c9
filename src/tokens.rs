use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{HubError, HubResult};

/// Token category. Only `color` values are shape-checked on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Color,
    Size,
    Font,
    TextStyle,
}

/// A named design token belonging to one library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub library_id: String,
    pub key: String,
    pub value_default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_dark: Option<String>,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Token {
    pub fn new(
        id: impl Into<String>,
        library_id: impl Into<String>,
        key: impl Into<String>,
        value_default: impl Into<String>,
        kind: TokenKind,
    ) -> Self {
        Self {
            id: id.into(),
            library_id: library_id.into(),
            key: key.into(),
            value_default: value_default.into(),
            value_dark: None,
            kind,
        }
    }

    pub fn with_dark(mut self, value_dark: impl Into<String>) -> Self {
        self.value_dark = Some(value_dark.into());
        self
    }
}

fn hex_color_regex() -> &'static Regex {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// One library's tokens, in declaration order. Keys are unique; color values
/// must be 6-digit hex. Both rules fail at insert time, not at lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: Token) -> HubResult<()> {
        if self.tokens.iter().any(|t| t.key == token.key) {
            return Err(HubError::DuplicateToken {
                key: token.key.clone(),
            });
        }
        if token.kind == TokenKind::Color {
            check_color(&token.key, &token.value_default)?;
            if let Some(ref dark) = token.value_dark {
                check_color(&token.key, dark)?;
            }
        }
        self.tokens.push(token);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.key == key)
    }

    /// Light-mode value for a key.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.get(key).map(|t| t.value_default.as_str())
    }

    /// Dark-mode value for a key, falling back to the default value when the
    /// token has no dark variant.
    pub fn resolve_dark(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(|t| t.value_dark.as_deref().unwrap_or(&t.value_default))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn check_color(key: &str, value: &str) -> HubResult<()> {
    if hex_color_regex().is_match(value) {
        Ok(())
    } else {
        Err(HubError::InvalidTokenValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "color tokens must be 6-digit hex (#RRGGBB)".to_string(),
        })
    }
}

/// The fixed style-variable namespace every section renderer draws from.
///
/// Each field is looked up in the library's tokens by its well-known key and
/// falls back to a baked-in value, so a library missing some (or all) brand
/// tokens still previews sensibly. Renderers never read tokens directly.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleVars {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub muted: String,
    pub bg: String,
    pub border: String,
    pub success: String,
    pub danger: String,
    pub radius: String,
}

impl StyleVars {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        let pick = |key: &str, fallback: &str| {
            tokens
                .resolve(key)
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            primary: pick("brand-primary", "#0055FF"),
            secondary: pick("brand-secondary", "#6B21A8"),
            text: pick("text-primary", "#111827"),
            muted: pick("text-muted", "#6B7280"),
            bg: pick("surface-bg", "#FFFFFF"),
            border: pick("surface-border", "#E5E7EB"),
            success: pick("action-success", "#059669"),
            danger: pick("action-danger", "#DC2626"),
            radius: pick("radius-md", "8px"),
        }
    }

    /// Inline custom-property declarations for the preview frame. Renderers
    /// reference these through `var(--preview-…)`.
    pub fn custom_properties(&self) -> Vec<(String, String)> {
        vec![
            ("--preview-primary".to_string(), self.primary.clone()),
            ("--preview-secondary".to_string(), self.secondary.clone()),
            ("--preview-text".to_string(), self.text.clone()),
            ("--preview-muted".to_string(), self.muted.clone()),
            ("--preview-bg".to_string(), self.bg.clone()),
            ("--preview-border".to_string(), self.border.clone()),
            ("--preview-success".to_string(), self.success.clone()),
            ("--preview-danger".to_string(), self.danger.clone()),
            ("--preview-radius".to_string(), self.radius.clone()),
        ]
    }
}

impl Default for StyleVars {
    fn default() -> Self {
        Self::from_tokens(&TokenSet::new())
    }
}
