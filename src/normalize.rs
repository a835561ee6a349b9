//! Coercion of free-text model replies into fixed-shape results.
//!
//! Brand summaries are all-or-nothing: a reply either decodes into the
//! required shape and is passed through untouched, or the whole result is
//! replaced by [`fallback_brand_summary`]. Long-form replies are sliced by
//! line position and never fail; short replies yield short or empty fields.

use crate::models::{BrandSummary, FontPair, LongFormContent};
use std::fmt;
use tracing::warn;

pub const FALLBACK_PALETTE: [&str; 3] = ["#EAE0D5", "#DAD2BC", "#A99985"];
pub const FALLBACK_HEADING_FONT: &str = "Playfair Display";
pub const FALLBACK_BODY_FONT: &str = "Poppins";
pub const FALLBACK_HEADLINE: &str = "Simplicity Shaped by the Future";
pub const FALLBACK_TAGLINE: &str = "A dance between silence and structure.";

pub const DEFAULT_FONT_PAIR_BODY: &str = "Inter";
pub const DEFAULT_HEADLINE: &str = "Where Design Meets Inspiration";
pub const DEFAULT_TAGLINE: &str = "Design that speaks to the soul";

const MAX_FONT_PAIRS: usize = 2;

/// Why a reply could not be used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// The model call itself failed.
    Upstream(String),
    /// The model answered, but not in the expected shape.
    Unparseable(String),
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Upstream(reason) => write!(f, "upstream failure: {}", reason),
            Fallback::Unparseable(reason) => write!(f, "unparseable reply: {}", reason),
        }
    }
}

/// The fixed record substituted for any unusable brand summary.
pub fn fallback_brand_summary() -> BrandSummary {
    BrandSummary {
        color_palette: FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect(),
        fonts: vec![FontPair::new(FALLBACK_HEADING_FONT, FALLBACK_BODY_FONT)],
        headline: FALLBACK_HEADLINE.to_string(),
        tagline: FALLBACK_TAGLINE.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// Typed decode of a JSON brand summary reply.
///
/// All four keys are required with their declared types; palette length and
/// color format are not checked, and extra keys are preserved.
pub fn decode_brand_summary(raw: &str) -> Result<BrandSummary, Fallback> {
    serde_json::from_str(raw).map_err(|e| Fallback::Unparseable(e.to_string()))
}

/// Fold a model call outcome into a brand summary, substituting the fallback
/// record on any failure.
pub fn normalize_brand_summary(reply: crate::Result<String>) -> BrandSummary {
    let decoded = reply
        .map_err(|e| Fallback::Upstream(e.to_string()))
        .and_then(|raw| decode_brand_summary(&raw));

    match decoded {
        Ok(summary) => summary,
        Err(reason) => {
            warn!("Using fallback brand summary ({})", reason);
            fallback_brand_summary()
        }
    }
}

/// Up to `end - start` items starting at `start`, clamped to what exists.
fn take_range(items: &[&str], start: usize, end: usize) -> Vec<String> {
    let start = start.min(items.len());
    let end = end.min(items.len()).max(start);
    items[start..end].iter().map(|item| item.to_string()).collect()
}

/// Positional extraction of a long-form reply.
///
/// Line 0 is the title, line 1 the description, lines 2..5 the visual
/// elements, lines 5..7 the font lines and everything after the textures.
/// Only title and description are trimmed. Missing lines produce empty
/// strings or shorter lists, never an error.
pub fn parse_long_form(raw: &str) -> LongFormContent {
    let lines: Vec<&str> = raw.split('\n').collect();
    LongFormContent {
        title: lines.first().map(|l| l.trim().to_string()).unwrap_or_default(),
        description: lines.get(1).map(|l| l.trim().to_string()).unwrap_or_default(),
        visual_elements: take_range(&lines, 2, 5),
        fonts: take_range(&lines, 5, 7),
        textures: take_range(&lines, 7, lines.len()),
    }
}

/// Comma-separated colors, trimmed. A blank reply yields no colors.
pub fn parse_color_palette(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|color| color.trim().to_string()).collect()
}

/// A single `heading:body` line. Anything other than exactly one separator
/// is rejected.
pub fn parse_font_pair(raw: &str) -> Result<FontPair, Fallback> {
    let mut parts = raw.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(heading), Some(body), None) => Ok(FontPair::new(heading.trim(), body.trim())),
        _ => Err(Fallback::Unparseable(format!(
            "expected 'heading:body', got {:?}",
            raw
        ))),
    }
}

pub fn default_font_pair() -> FontPair {
    FontPair::new(FALLBACK_HEADING_FONT, DEFAULT_FONT_PAIR_BODY)
}

pub fn font_pair_or_default(raw: &str) -> FontPair {
    parse_font_pair(raw).unwrap_or_else(|reason| {
        warn!("Using default font pair ({})", reason);
        default_font_pair()
    })
}

/// Every `heading:body` line in a multi-line reply, at most two.
pub fn parse_font_pairs(raw: &str) -> Vec<FontPair> {
    raw.lines()
        .filter_map(|line| parse_font_pair(line).ok())
        .take(MAX_FONT_PAIRS)
        .collect()
}

pub fn headline_or_default(raw: &str) -> String {
    non_blank_or(raw, DEFAULT_HEADLINE)
}

pub fn tagline_or_default(raw: &str) -> String {
    non_blank_or(raw, DEFAULT_TAGLINE)
}

fn non_blank_or(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Headline and tagline from `Headline:` / `Tagline:` prefixed lines, with
/// the defaults kept for whichever is missing. Later lines win.
pub fn parse_copy(raw: &str) -> (String, String) {
    let mut headline = DEFAULT_HEADLINE.to_string();
    let mut tagline = DEFAULT_TAGLINE.to_string();

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix("Headline:") {
            headline = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Tagline:") {
            tagline = rest.trim().to_string();
        }
    }

    (headline, tagline)
}

/// Non-blank trimmed lines.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
