use super::ImageSearchService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockImageSearchClient {
    image_responses: Arc<Mutex<Vec<Vec<String>>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageSearchClient {
    pub fn new() -> Self {
        Self {
            image_responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_images_response(self, urls: Vec<String>) -> Self {
        self.image_responses.lock().unwrap().push(urls);
        self
    }

    pub fn with_failure(self, message: String) -> Self {
        *self.failure.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSearchService for MockImageSearchClient {
    async fn search_images(&self, destination: &str) -> Result<Vec<String>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::ImageProvider(message));
        }

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            let slug = destination.to_lowercase().replace(' ', "-");
            Ok((1..=3)
                .map(|i| format!("https://images.example.com/{}/{}.jpg", slug, i))
                .collect())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_image_client_default_response() {
        let client = MockImageSearchClient::new();

        let urls = client.search_images("New York").await.unwrap();
        assert_eq!(urls.len(), 3);
        assert!(urls[0].contains("new-york"));
    }

    #[tokio::test]
    async fn test_mock_image_client_custom_responses() {
        let client = MockImageSearchClient::new()
            .with_images_response(vec!["https://images.example.com/one.jpg".to_string()])
            .with_images_response(vec![]);

        let first = client.search_images("Paris").await.unwrap();
        assert_eq!(first.len(), 1);

        let second = client.search_images("Paris").await.unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn test_mock_image_client_call_count_and_failure() {
        let client = MockImageSearchClient::new().with_failure("rate limited".to_string());

        assert_eq!(client.get_call_count(), 0);

        let err = client.search_images("Paris").await.unwrap_err();
        assert!(matches!(err, Error::ImageProvider(_)));
        assert_eq!(client.get_call_count(), 1);
    }
}
