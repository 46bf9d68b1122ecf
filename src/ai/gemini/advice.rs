use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::AdviceService;
use crate::models::TripRequest;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct AdviceRequest {
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: Option<AdviceGenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdviceGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

pub struct GeminiAdviceClient {
    http: GeminiHttpClient,
}

impl GeminiAdviceClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
    }

    fn user_prompt(request: &TripRequest) -> String {
        let date_range = request.date_range();
        let mode = request.mode.to_string();
        let budget = request.budget.to_string();
        let time = request.travel_time.to_string();
        let travelers = request.travelers.to_string();

        prompts::render(
            prompts::ADVICE_USER,
            &[
                ("source", request.source.as_str()),
                ("destination", request.destination.as_str()),
                ("date_range", date_range.as_str()),
                ("mode", mode.as_str()),
                ("budget", budget.as_str()),
                ("time", time.as_str()),
                ("travelers", travelers.as_str()),
            ],
        )
    }
}

#[async_trait]
impl AdviceService for GeminiAdviceClient {
    async fn travel_advice(&self, request: &TripRequest) -> Result<String> {
        tracing::debug!(
            "Requesting travel advice for {} -> {} from Gemini (model: {})",
            request.source,
            request.destination,
            self.http.model()
        );

        let payload = AdviceRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: prompts::ADVICE_SYSTEM.to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Self::user_prompt(request),
                }],
            }],
            generation_config: Some(AdviceGenerationConfig {
                max_output_tokens: Some(2048),
            }),
        };

        let response: GenerateContentResponse = self.http.generate_content(&payload).await?;

        Self::extract_text(&response)
            .ok_or_else(|| Error::AiProvider("No text in Gemini advice response".to_string()))
    }
}
