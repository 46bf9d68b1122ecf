//! Application orchestration for the trip planning pipeline.

use crate::ai::{AdviceService, GeminiAdviceClient};
use crate::currency;
use crate::images::{ImageSearchService, UnsplashClient};
use crate::models::{Config, TripPlan, TripRequest};
use crate::{Error, Result};
use tracing::{info, warn};

/// Destination photos shown in the rendered gallery.
const GALLERY_SIZE: usize = 3;

/// Coordinates image search, advice generation, and currency annotation.
pub struct App {
    advice: Box<dyn AdviceService>,
    images: Box<dyn ImageSearchService>,
    exchange_rate: f64,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub advice: Box<dyn AdviceService>,
    pub images: Box<dyn ImageSearchService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and harnesses that
    /// need to inject mocks.
    pub fn with_services(services: AppServices, exchange_rate: f64) -> Self {
        Self {
            advice: services.advice,
            images: services.images,
            exchange_rate,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        info!("Advice provider: Gemini (model: {})", config.advice_model);
        let advice: Box<dyn AdviceService> = Box::new(GeminiAdviceClient::new_with_client(
            config.genai_api_key.clone(),
            config.advice_model.clone(),
            http_client.clone(),
        ));

        info!("Image provider: Unsplash");
        let images: Box<dyn ImageSearchService> = Box::new(UnsplashClient::new_with_client(
            config.unsplash_access_key.clone(),
            http_client,
        ));

        Ok(Self::with_services(
            AppServices { advice, images },
            config.usd_to_inr,
        ))
    }

    /// Run the full planning pipeline for a submitted trip request.
    ///
    /// A blank source or destination aborts before any provider call. A
    /// failed provider call halts the pipeline; an empty image result does
    /// not.
    pub async fn plan_trip(&self, request: &TripRequest) -> Result<TripPlan> {
        if request.source.trim().is_empty() {
            return Err(Error::MissingInput(
                "source location is required".to_string(),
            ));
        }
        if request.destination.trim().is_empty() {
            return Err(Error::MissingInput(
                "destination location is required".to_string(),
            ));
        }

        info!(
            "Planning trip from {} to {} ({})",
            request.source,
            request.destination,
            request.date_range()
        );

        let mut image_urls = self.images.search_images(&request.destination).await?;
        if image_urls.is_empty() {
            warn!(
                "No destination photos for {}; continuing without a gallery",
                request.destination
            );
        }
        image_urls.truncate(GALLERY_SIZE);
        info!("Fetched {} destination photo(s)", image_urls.len());

        let advice = self.advice.travel_advice(request).await?;
        info!("Received travel advice ({} chars)", advice.len());

        let advice = currency::annotate(&advice, request.currency, self.exchange_rate);

        Ok(TripPlan {
            destination: request.destination.clone(),
            image_urls,
            advice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::MockAdviceClient;
    use crate::images::MockImageSearchClient;
    use crate::models::{BudgetTier, Currency, TransportMode, TravelTime, TripRequest};
    use crate::Error;
    use chrono::NaiveDate;

    const RATE: f64 = 83.0;

    fn sample_request(currency: Currency) -> TripRequest {
        TripRequest {
            source: "Mumbai".to_string(),
            destination: "Paris".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 11).unwrap(),
            mode: TransportMode::Flight,
            budget: BudgetTier::Standard,
            travel_time: TravelTime::Morning,
            travelers: 2,
            currency,
        }
    }

    fn build_test_app(advice: MockAdviceClient, images: MockImageSearchClient) -> App {
        App::with_services(
            AppServices {
                advice: Box::new(advice),
                images: Box::new(images),
            },
            RATE,
        )
    }

    #[tokio::test]
    async fn test_plan_trip_annotates_prices_for_inr() {
        let advice =
            MockAdviceClient::new().with_advice_response("Hotel: $120 per night".to_string());
        let app = build_test_app(advice, MockImageSearchClient::new());

        let plan = app.plan_trip(&sample_request(Currency::Inr)).await.unwrap();
        assert_eq!(plan.advice, "Hotel: ₹9960 (USD $120) per night");
        assert_eq!(plan.destination, "Paris");
        assert_eq!(plan.image_urls.len(), 3);
    }

    #[tokio::test]
    async fn test_plan_trip_leaves_usd_untouched() {
        let advice =
            MockAdviceClient::new().with_advice_response("Hotel: $120 per night".to_string());
        let app = build_test_app(advice, MockImageSearchClient::new());

        let plan = app.plan_trip(&sample_request(Currency::Usd)).await.unwrap();
        assert_eq!(plan.advice, "Hotel: $120 per night");
    }

    #[tokio::test]
    async fn test_blank_source_issues_no_provider_calls() {
        let advice = MockAdviceClient::new();
        let images = MockImageSearchClient::new();
        let advice_probe = advice.clone();
        let images_probe = images.clone();

        let app = build_test_app(advice, images);

        let mut request = sample_request(Currency::Usd);
        request.source = "   ".to_string();

        let err = app.plan_trip(&request).await.unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
        assert_eq!(advice_probe.get_call_count(), 0);
        assert_eq!(images_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_destination_issues_no_provider_calls() {
        let advice = MockAdviceClient::new();
        let images = MockImageSearchClient::new();
        let advice_probe = advice.clone();
        let images_probe = images.clone();

        let app = build_test_app(advice, images);

        let mut request = sample_request(Currency::Usd);
        request.destination = String::new();

        let err = app.plan_trip(&request).await.unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
        assert_eq!(advice_probe.get_call_count(), 0);
        assert_eq!(images_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_image_set_degrades_gracefully() {
        let advice = MockAdviceClient::new();
        let advice_probe = advice.clone();
        let images = MockImageSearchClient::new().with_images_response(vec![]);

        let app = build_test_app(advice, images);

        let plan = app.plan_trip(&sample_request(Currency::Usd)).await.unwrap();
        assert!(plan.image_urls.is_empty());
        assert!(!plan.advice.is_empty());
        assert_eq!(advice_probe.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_image_list_truncated_to_gallery_size() {
        let images = MockImageSearchClient::new().with_images_response(
            (1..=5)
                .map(|i| format!("https://images.example.com/paris/{}.jpg", i))
                .collect(),
        );

        let app = build_test_app(MockAdviceClient::new(), images);

        let plan = app.plan_trip(&sample_request(Currency::Usd)).await.unwrap();
        assert_eq!(plan.image_urls.len(), 3);
        assert_eq!(plan.image_urls[2], "https://images.example.com/paris/3.jpg");
    }

    #[tokio::test]
    async fn test_image_provider_failure_halts_pipeline() {
        let advice = MockAdviceClient::new();
        let advice_probe = advice.clone();
        let images = MockImageSearchClient::new().with_failure("rate limited".to_string());

        let app = build_test_app(advice, images);

        let err = app
            .plan_trip(&sample_request(Currency::Usd))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ImageProvider(_)));
        assert_eq!(advice_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_advice_provider_failure_halts_pipeline() {
        let advice = MockAdviceClient::new().with_failure("quota exceeded".to_string());

        let app = build_test_app(advice, MockImageSearchClient::new());

        let err = app
            .plan_trip(&sample_request(Currency::Inr))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
