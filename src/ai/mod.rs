//! AI provider integration for travel advice
//!
//! Exposes the advice-generation seam and the Gemini implementation used in
//! production.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiAdviceClient;
pub use mock::MockAdviceClient;

use crate::models::TripRequest;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AdviceService: Send + Sync {
    async fn travel_advice(&self, request: &TripRequest) -> Result<String>;
}
