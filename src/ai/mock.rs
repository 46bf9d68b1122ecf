use super::AdviceService;
use crate::models::TripRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockAdviceClient {
    advice_responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAdviceClient {
    pub fn new() -> Self {
        Self {
            advice_responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_advice_response(self, response: String) -> Self {
        self.advice_responses.lock().unwrap().push(response);
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

impl Default for MockAdviceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdviceService for MockAdviceClient {
    async fn travel_advice(&self, request: &TripRequest) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        let responses = self.advice_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!(
                "Travel plan from {} to {}. Hotel: $120 per night.",
                request.source, request.destination
            ))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
