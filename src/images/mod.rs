//! Reference image search
//!
//! Looks up illustrative image URLs for a moodboard. Lookups never fail:
//! without a usable credential, or when the provider errors, a fixed list of
//! fallback URLs is returned instead.

pub mod mock;
pub mod serpapi;

pub use mock::MockImageSearchClient;
pub use serpapi::SerpApiImageClient;

use async_trait::async_trait;

pub const FALLBACK_IMAGES: [&str; 5] = [
    "https://i.pinimg.com/736x/a1/b2/c3/futuristic-brutalist-1.jpg",
    "https://i.pinimg.com/736x/d4/e5/f6/minimal-concrete-structure-2.jpg",
    "https://i.pinimg.com/736x/g7/h8/i9/organic-brutalism-3.jpg",
    "https://i.pinimg.com/736x/j0/k1/l2/sci-fi-architecture-4.jpg",
    "https://i.pinimg.com/736x/m3/n4/o5/modern-brutalist-5.jpg",
];

/// The first `count` fallback URLs, always in the same order.
pub fn fallback_images(count: usize) -> Vec<String> {
    FALLBACK_IMAGES
        .iter()
        .take(count)
        .map(|url| url.to_string())
        .collect()
}

#[async_trait]
pub trait ImageSearchService: Send + Sync {
    /// Up to `count` image URLs for `query`.
    async fn search_images(&self, query: &str, count: usize) -> Vec<String>;
}
