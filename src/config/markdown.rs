//! Markdown renderer options exposed to the external engine.
//!
//! The pipeline core does not render Markdown itself; these options are the
//! configuration contract handed to the engine's Markdown subsystem, plus the
//! heading-anchor settings that pair with [`crate::utils::slug::anchor_slug`].
//! The driver serializes them into the output directory so the engine reads
//! the same contract the config file was validated against.

use serde::{Deserialize, Serialize};

/// Options for the engine's Markdown parser.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Pass embedded raw HTML through unchanged
    pub html: bool,

    /// Soft line breaks become `<br>`
    pub breaks: bool,

    /// Smart punctuation substitution (quotes, dashes, ellipses)
    pub typographer: bool,

    /// Heading-anchor rendering options
    pub anchor: AnchorConfig,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            html: true,
            breaks: true,
            typographer: true,
            anchor: AnchorConfig::default(),
        }
    }
}

/// Heading-anchor rendering options.
///
/// Anchors are rendered as a link bearing `class` and `symbol`, placed before
/// the heading text when `before` is set, for headings at `level` or deeper.
/// Level 1 headings are the page title and skip anchors by default.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorConfig {
    /// Link text of the anchor
    pub symbol: String,

    /// CSS class of the anchor link
    pub class: String,

    /// Render the anchor before the heading text
    pub before: bool,

    /// Minimum heading level that receives an anchor
    pub level: u8,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            symbol: "#".to_string(),
            class: "heading-anchor".to_string(),
            before: true,
            level: 2,
        }
    }
}
