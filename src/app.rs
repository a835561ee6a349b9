//! Application orchestration for generating and storing moodboards.

use crate::ai::{ChatService, OpenAiChatClient};
use crate::config::Config;
use crate::generator::MoodGenerator;
use crate::images::{ImageSearchService, SerpApiImageClient};
use crate::models::{
    ContentFormat, GeneratedContent, MoodBrief, MoodResponse, MoodboardContent, MoodboardRecord,
    MoodboardRequest, MoodboardResponse, NewMoodboard,
};
use crate::store::{MoodboardStore, SqliteMoodboardStore};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const MOODBOARD_IMAGE_COUNT: usize = 5;
const MOOD_IMAGE_COUNT: usize = 9;

/// Coordinates generation, image lookup and persistence for each request.
pub struct App {
    generator: MoodGenerator,
    images: Arc<dyn ImageSearchService>,
    store: Arc<dyn MoodboardStore>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub chat: Arc<dyn ChatService>,
    pub images: Arc<dyn ImageSearchService>,
    pub store: Arc<dyn MoodboardStore>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            generator: MoodGenerator::new(services.chat),
            images: services.images,
            store: services.store,
        }
    }

    /// Construct an app from loaded configuration: OpenAI chat, SerpAPI image
    /// search and the SQLite store at `DATABASE_URL`.
    pub async fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        info!("Chat provider: OpenAI (model: {})", config.openai_model);
        let chat = OpenAiChatClient::new_with_client(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            timeout,
            http_client.clone(),
        )
        .with_base_url(config.openai_base_url.clone());

        let images =
            SerpApiImageClient::new_with_client(config.image_search_key(), timeout, http_client)
                .with_base_url(config.serpapi_base_url.clone());

        let store = SqliteMoodboardStore::connect(&config.database_url).await?;
        info!("Connected to database");

        Ok(Self::with_services(AppServices {
            chat: Arc::new(chat),
            images: Arc::new(images),
            store: Arc::new(store),
        }))
    }

    pub fn generator(&self) -> &MoodGenerator {
        &self.generator
    }

    /// Generate, illustrate and store a moodboard.
    ///
    /// Brand summaries absorb model failures into the fallback record; the
    /// long form reports them. Storage failures are always reported.
    pub async fn generate_moodboard(
        &self,
        request: MoodboardRequest,
        format: ContentFormat,
    ) -> Result<MoodboardResponse> {
        info!("Generating {:?} moodboard for theme {:?}", format, request.theme);

        let generated = match format {
            ContentFormat::BrandSummary => GeneratedContent::BrandSummary(
                self.generator
                    .brand_summary(&MoodBrief::from(&request))
                    .await,
            ),
            ContentFormat::LongForm => GeneratedContent::LongForm(
                self.generator
                    .moodboard_content(&request)
                    .await
                    .inspect_err(|e| error!("Moodboard generation failed: {}", e))?,
            ),
        };

        let query = format!("{} {} {}", request.theme, request.style, request.mood);
        let images = self
            .images
            .search_images(&query, MOODBOARD_IMAGE_COUNT)
            .await;

        let title = format!("{} Moodboard", request.theme);
        let description = generated.description().to_string();
        let content = serde_json::to_value(MoodboardContent {
            format: generated.format(),
            generated,
            request,
            images,
        })?;

        let record = self
            .store
            .insert(NewMoodboard {
                title,
                description,
                content,
                user_id: None,
            })
            .await
            .inspect_err(|e| error!("Failed to store moodboard: {}", e))?;
        info!("Stored moodboard {}", record.id);

        Ok(MoodboardResponse {
            title: record.title,
            description: record.description,
            content: record.content,
        })
    }

    /// Brand summary plus reference images for a vibe, without storing it.
    pub async fn generate_mood(&self, brief: MoodBrief) -> MoodResponse {
        let content = self.generator.brand_summary(&brief).await;

        let query = std::iter::once(brief.vibe_text.as_str())
            .chain(brief.tags.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        let images = self.images.search_images(&query, MOOD_IMAGE_COUNT).await;

        MoodResponse { content, images }
    }

    pub async fn list_moodboards(&self, skip: u32, limit: u32) -> Result<Vec<MoodboardRecord>> {
        self.store.list(skip, limit).await
    }
}
