//! Text generation service integration
//!
//! Provides the [`ChatService`] seam the generator talks to, an OpenAI
//! implementation and a scriptable mock for tests.

pub mod mock;
pub mod openai;

pub use mock::MockChatClient;
pub use openai::OpenAiChatClient;

use crate::Result;
use async_trait::async_trait;

/// One system-plus-user exchange sent to a text generation model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send the request and return the raw text of the first completion.
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}
