//! Data models and structures
//!
//! Defines the request payloads, normalized generation results and persisted
//! moodboard records shared by the generator, store and HTTP layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied description of the moodboard to generate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodboardRequest {
    pub theme: String,
    pub style: String,
    pub color_palette: Vec<String>,
    pub mood: String,
    #[serde(default)]
    pub additional_notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Free-form vibe text plus style tags, the input of the brand summary prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodBrief {
    pub vibe_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&MoodboardRequest> for MoodBrief {
    fn from(request: &MoodboardRequest) -> Self {
        let tags = [request.theme.clone(), request.style.clone()]
            .into_iter()
            .chain(request.tags.iter().cloned())
            .collect();

        Self {
            vibe_text: request.mood.clone(),
            tags,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontPair {
    pub heading: String,
    pub body: String,
}

impl FontPair {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Short-form generation result: palette, one font pair and two lines of copy.
///
/// Keys the model adds beyond the required ones are kept in `extra` so a
/// decoded reply serializes back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandSummary {
    pub color_palette: Vec<String>,
    pub fonts: Vec<FontPair>,
    pub headline: String,
    pub tagline: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Long-form generation result extracted line by line from the model reply.
///
/// `fonts` holds the raw reply lines; they are not split into pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LongFormContent {
    pub title: String,
    pub description: String,
    pub visual_elements: Vec<String>,
    pub fonts: Vec<String>,
    pub textures: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    #[default]
    BrandSummary,
    LongForm,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum GeneratedContent {
    BrandSummary(BrandSummary),
    LongForm(LongFormContent),
}

impl GeneratedContent {
    pub fn format(&self) -> ContentFormat {
        match self {
            GeneratedContent::BrandSummary(_) => ContentFormat::BrandSummary,
            GeneratedContent::LongForm(_) => ContentFormat::LongForm,
        }
    }

    /// Text stored as the moodboard's description.
    pub fn description(&self) -> &str {
        match self {
            GeneratedContent::BrandSummary(summary) => &summary.tagline,
            GeneratedContent::LongForm(content) => &content.description,
        }
    }
}

/// The content blob stored with a moodboard: generated fields at the top
/// level, the original request and the reference images alongside.
///
/// Generated fields serialize first so a same-named key passed through from
/// the model reply cannot replace `format`, `request` or `images`.
#[derive(Debug, Clone, Serialize)]
pub struct MoodboardContent {
    #[serde(flatten)]
    pub generated: GeneratedContent,
    pub format: ContentFormat,
    pub request: MoodboardRequest,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodboardResponse {
    pub title: String,
    pub description: String,
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodResponse {
    pub content: BrandSummary,
    pub images: Vec<String>,
}

/// A moodboard ready to be inserted; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMoodboard {
    pub title: String,
    pub description: String,
    pub content: serde_json::Value,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodboardRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: serde_json::Value,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
