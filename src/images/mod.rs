//! Image search integration for destination photos
//!
//! Exposes the image-search seam and the Unsplash implementation used in
//! production.

pub mod mock;
pub mod unsplash;

pub use mock::MockImageSearchClient;
pub use unsplash::UnsplashClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageSearchService: Send + Sync {
    /// Search photos for a destination. An empty result is not an error;
    /// the rendering layer tolerates a short or missing gallery.
    async fn search_images(&self, destination: &str) -> Result<Vec<String>>;
}
