//! Moodboard copy generation.
//!
//! Each entry point renders a prompt, makes one model call and normalizes
//! the reply. Only the long-form path reports model failures; every other
//! path substitutes its fixed default.

use crate::ai::{ChatRequest, ChatService};
use crate::models::{BrandSummary, FontPair, LongFormContent, MoodBrief, MoodboardRequest};
use crate::normalize;
use crate::{prompts, Result};
use std::sync::Arc;
use tracing::{info, warn};

const CREATIVE_TEMPERATURE: f32 = 0.7;
const BRAND_SUMMARY_MAX_TOKENS: u32 = 500;
const AUXILIARY_MAX_TOKENS: u32 = 150;
const SHORT_COPY_MAX_TOKENS: u32 = 50;

#[derive(Clone)]
pub struct MoodGenerator {
    chat: Arc<dyn ChatService>,
}

impl MoodGenerator {
    pub fn new(chat: Arc<dyn ChatService>) -> Self {
        Self { chat }
    }

    /// Long-form moodboard copy, sliced line by line from the reply.
    pub async fn moodboard_content(&self, request: &MoodboardRequest) -> Result<LongFormContent> {
        let chat_request = ChatRequest::new(
            prompts::MOODBOARD_SYSTEM.trim(),
            prompts::moodboard_prompt(request),
        );

        let raw = self.chat.complete(&chat_request).await?;
        let content = normalize::parse_long_form(&raw);
        info!("Generated long-form moodboard {:?}", content.title);
        Ok(content)
    }

    /// Short-form brand summary. Never fails; see
    /// [`normalize::normalize_brand_summary`].
    pub async fn brand_summary(&self, brief: &MoodBrief) -> BrandSummary {
        let chat_request = ChatRequest::new(
            prompts::BRAND_SYSTEM.trim(),
            prompts::brand_summary_prompt(brief),
        )
        .with_temperature(CREATIVE_TEMPERATURE)
        .with_max_tokens(BRAND_SUMMARY_MAX_TOKENS);

        normalize::normalize_brand_summary(self.chat.complete(&chat_request).await)
    }

    pub async fn color_palette(&self, vibe: &str) -> Vec<String> {
        let raw = self
            .auxiliary_text(prompts::color_palette_prompt(vibe), AUXILIARY_MAX_TOKENS)
            .await;
        normalize::parse_color_palette(&raw)
    }

    pub async fn font_pair(&self, vibe: &str) -> FontPair {
        let raw = self
            .auxiliary_text(prompts::font_pair_prompt(vibe), AUXILIARY_MAX_TOKENS)
            .await;
        normalize::font_pair_or_default(&raw)
    }

    pub async fn headline(&self, vibe: &str) -> String {
        let raw = self
            .auxiliary_text(prompts::headline_prompt(vibe), SHORT_COPY_MAX_TOKENS)
            .await;
        normalize::headline_or_default(&raw)
    }

    pub async fn tagline(&self, vibe: &str) -> String {
        let raw = self
            .auxiliary_text(prompts::tagline_prompt(vibe), SHORT_COPY_MAX_TOKENS)
            .await;
        normalize::tagline_or_default(&raw)
    }

    /// Related keywords for a moodboard, one per reply line.
    pub async fn suggestions(&self, keywords: &[String]) -> Vec<String> {
        let raw = self
            .auxiliary_text(prompts::suggestions_prompt(keywords), AUXILIARY_MAX_TOKENS)
            .await;
        normalize::parse_suggestions(&raw)
    }

    /// Trimmed reply text, or empty on failure so each caller's own default
    /// applies.
    async fn auxiliary_text(&self, prompt: String, max_tokens: u32) -> String {
        let request = ChatRequest::new(prompts::ASSISTANT_SYSTEM.trim(), prompt)
            .with_temperature(CREATIVE_TEMPERATURE)
            .with_max_tokens(max_tokens);

        match self.chat.complete(&request).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Auxiliary generation failed: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockChatClient;
    use crate::normalize::{fallback_brand_summary, DEFAULT_HEADLINE, DEFAULT_TAGLINE};
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn generator(chat: &MockChatClient) -> MoodGenerator {
        MoodGenerator::new(Arc::new(chat.clone()))
    }

    fn brief() -> MoodBrief {
        MoodBrief {
            vibe_text: "minimalist scandinavian".to_string(),
            tags: vec!["modern".to_string(), "cozy".to_string()],
        }
    }

    #[tokio::test]
    async fn test_brand_summary_passes_valid_reply_through() {
        let chat = MockChatClient::new().with_response(
            r##"{"color_palette": ["#FFFFFF", "#D9D9D9", "#1A1A1A"], "fonts": [{"heading": "Inter", "body": "Lora"}], "headline": "Quiet Rooms", "tagline": "Less, but better."}"##,
        );

        let summary = generator(&chat).brand_summary(&brief()).await;

        assert_eq!(summary.headline, "Quiet Rooms");
        assert_eq!(summary.fonts, vec![FontPair::new("Inter", "Lora")]);
    }

    #[tokio::test]
    async fn test_brand_summary_request_parameters() {
        let chat = MockChatClient::new().with_response("not json");
        generator(&chat).brand_summary(&brief()).await;

        let request = &chat.get_requests()[0];
        assert_eq!(request.system, prompts::BRAND_SYSTEM.trim());
        assert!(request.prompt.contains("Tags: modern, cozy"));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(500));
    }

    #[tokio::test]
    async fn test_brand_summary_falls_back_on_prose_and_failure() {
        let chat = MockChatClient::new()
            .with_response("I think a warm palette would be lovely.")
            .with_failure("service unavailable");
        let generator = generator(&chat);

        let first = generator.brand_summary(&brief()).await;
        let second = generator.brand_summary(&brief()).await;

        assert_eq!(first, fallback_brand_summary());
        assert_eq!(second, fallback_brand_summary());
    }

    #[tokio::test]
    async fn test_moodboard_content_uses_long_form_prompt() {
        let chat = MockChatClient::new().with_response("Loft Nights\nSoft industrial glow");
        let request = MoodboardRequest {
            theme: "loft".to_string(),
            style: "industrial".to_string(),
            color_palette: vec!["#111111".to_string()],
            mood: "moody".to_string(),
            additional_notes: String::new(),
            tags: Vec::new(),
        };

        let content = generator(&chat).moodboard_content(&request).await.unwrap();

        assert_eq!(content.title, "Loft Nights");
        assert_eq!(content.description, "Soft industrial glow");
        assert!(content.visual_elements.is_empty());

        let sent = &chat.get_requests()[0];
        assert!(sent.prompt.contains("loft project with industrial style"));
        assert_eq!(sent.temperature, None);
        assert_eq!(sent.max_tokens, None);
    }

    #[tokio::test]
    async fn test_moodboard_content_propagates_model_failure() {
        let chat = MockChatClient::new().with_failure("timeout");
        let request = MoodboardRequest {
            theme: String::new(),
            style: String::new(),
            color_palette: Vec::new(),
            mood: String::new(),
            additional_notes: String::new(),
            tags: Vec::new(),
        };

        let err = generator(&chat).moodboard_content(&request).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_color_palette_parses_and_degrades_to_empty() {
        let chat = MockChatClient::new()
            .with_response("#FFFFFF, #000000, #FF0000")
            .with_failure("down");
        let generator = generator(&chat);

        assert_eq!(
            generator.color_palette("retro").await,
            vec!["#FFFFFF", "#000000", "#FF0000"]
        );
        assert!(generator.color_palette("retro").await.is_empty());
    }

    #[tokio::test]
    async fn test_font_pair_defaults() {
        let chat = MockChatClient::new()
            .with_response("Oswald:Source Sans Pro")
            .with_response("Oswald and Source Sans Pro")
            .with_failure("down");
        let generator = generator(&chat);

        assert_eq!(
            generator.font_pair("retro").await,
            FontPair::new("Oswald", "Source Sans Pro")
        );
        assert_eq!(
            generator.font_pair("retro").await,
            FontPair::new("Playfair Display", "Inter")
        );
        assert_eq!(
            generator.font_pair("retro").await,
            FontPair::new("Playfair Display", "Inter")
        );
    }

    #[tokio::test]
    async fn test_headline_and_tagline_defaults() {
        let chat = MockChatClient::new()
            .with_response("  Built for Tomorrow  ")
            .with_response("")
            .with_failure("down");
        let generator = generator(&chat);

        assert_eq!(generator.headline("retro").await, "Built for Tomorrow");
        assert_eq!(generator.tagline("retro").await, DEFAULT_TAGLINE);
        assert_eq!(generator.headline("retro").await, DEFAULT_HEADLINE);

        let requests = chat.get_requests();
        assert_eq!(requests[0].max_tokens, Some(50));
        assert_eq!(requests[0].system, prompts::ASSISTANT_SYSTEM.trim());
    }

    #[tokio::test]
    async fn test_suggestions() {
        let chat = MockChatClient::new()
            .with_response("brutalism\n\nconcrete\n")
            .with_failure("down");
        let generator = generator(&chat);
        let keywords = vec!["loft".to_string()];

        assert_eq!(
            generator.suggestions(&keywords).await,
            vec!["brutalism", "concrete"]
        );
        assert!(generator.suggestions(&keywords).await.is_empty());
    }
}
