//! Configuration options for Markdown conversion

use std::fmt;
use std::str::FromStr;

use crate::NotemarkError;

/// Heading style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// Use ATX-style headings (prefixed with #)
    #[default]
    Atx,
    /// Use ATX-style headings closed with a matching run of #
    AtxClosed,
    /// Use setext-style headings (underlined with = or -)
    /// Only works for h1 and h2, falls back to ATX for h3-h9
    Setext,
}

impl FromStr for HeadingStyle {
    type Err = NotemarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atx" => Ok(HeadingStyle::Atx),
            "atx_closed" | "atx-closed" => Ok(HeadingStyle::AtxClosed),
            "setext" | "underlined" => Ok(HeadingStyle::Setext),
            other => Err(NotemarkError::InvalidOptions(format!(
                "unknown heading style `{other}` (expected atx, atx_closed or setext)"
            ))),
        }
    }
}

impl fmt::Display for HeadingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeadingStyle::Atx => "atx",
            HeadingStyle::AtxClosed => "atx_closed",
            HeadingStyle::Setext => "setext",
        };
        f.write_str(name)
    }
}

/// Default bullet glyphs, cycled by list nesting depth
pub const DEFAULT_BULLETS: &str = "*+-";

/// Options for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Heading style (atx, atx_closed or setext)
    pub heading_style: HeadingStyle,

    /// Bullet glyphs for unordered lists; must not be empty
    pub bullets: Vec<char>,
}

impl ConversionOptions {
    /// Replace the bullet glyphs with the characters of `glyphs`
    pub fn with_bullets(mut self, glyphs: &str) -> Self {
        self.bullets = glyphs.chars().collect();
        self
    }

    /// Replace the heading style
    pub fn with_heading_style(mut self, heading_style: HeadingStyle) -> Self {
        self.heading_style = heading_style;
        self
    }

    /// Check the invariants the renderers rely on
    pub fn validate(&self) -> crate::Result<()> {
        if self.bullets.is_empty() {
            return Err(NotemarkError::InvalidOptions(
                "at least one bullet glyph is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Atx,
            bullets: DEFAULT_BULLETS.chars().collect(),
        }
    }
}
