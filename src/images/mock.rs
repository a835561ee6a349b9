use super::{fallback_images, ImageSearchService};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// [`ImageSearchService`] that records queries and answers from a fixed list.
#[derive(Clone)]
pub struct MockImageSearchClient {
    images: Option<Vec<String>>,
    queries: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockImageSearchClient {
    /// Answers with the fallback list.
    pub fn new() -> Self {
        Self {
            images: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    /// `(query, count)` pairs received so far.
    pub fn get_queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockImageSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSearchService for MockImageSearchClient {
    async fn search_images(&self, query: &str, count: usize) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), count));

        match &self.images {
            Some(images) => images.iter().take(count).cloned().collect(),
            None => fallback_images(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_image_search_records_queries() {
        let client = MockImageSearchClient::new().with_images(vec![
            "https://img.test/a.jpg".to_string(),
            "https://img.test/b.jpg".to_string(),
        ]);

        let images = client.search_images("loft", 1).await;

        assert_eq!(images, vec!["https://img.test/a.jpg"]);
        assert_eq!(client.get_queries(), vec![("loft".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_mock_image_search_defaults_to_fallback() {
        let client = MockImageSearchClient::new();
        assert_eq!(client.search_images("x", 3).await, fallback_images(3));
    }
}
