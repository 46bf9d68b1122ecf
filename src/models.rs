//! Data models and configuration
//!
//! Defines the trip request assembled by the CLI form, the rendered plan,
//! and environment-backed configuration.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Cab,
    Any,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportMode::Flight => "Flight",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
            TransportMode::Cab => "Cab",
            TransportMode::Any => "Any",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Standard,
    Luxury,
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::Standard => "Standard",
            BudgetTier::Luxury => "Luxury",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TravelTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TravelTime::Morning => "Morning",
            TravelTime::Afternoon => "Afternoon",
            TravelTime::Evening => "Evening",
            TravelTime::Night => "Night",
        })
    }
}

/// Currency in which prices are displayed to the traveler.
///
/// Advice text always quotes prices in USD; `Inr` requests the annotation
/// pass that appends rupee equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Inr,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        })
    }
}

/// Trip parameters submitted through the CLI form. Created fresh for each
/// invocation and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub source: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub mode: TransportMode,
    pub budget: BudgetTier,
    pub travel_time: TravelTime,
    pub travelers: u32,
    pub currency: Currency,
}

impl TripRequest {
    /// Date range string used in the advice prompt, e.g. `2026-08-06 to 2026-08-11`.
    pub fn date_range(&self) -> String {
        format!("{} to {}", self.start_date, self.end_date)
    }
}

/// Finished plan handed to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub destination: String,
    pub image_urls: Vec<String>,
    pub advice: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub genai_api_key: String,
    pub unsplash_access_key: String,
    pub advice_model: String,
    pub usd_to_inr: f64,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let usd_to_inr = match std::env::var("USD_TO_INR") {
            Ok(raw) => {
                let rate: f64 = raw.parse().map_err(|_| {
                    crate::Error::Config(format!("USD_TO_INR is not a number: {}", raw))
                })?;
                if rate <= 0.0 {
                    return Err(crate::Error::Config(format!(
                        "USD_TO_INR must be positive: {}",
                        raw
                    )));
                }
                rate
            }
            Err(_) => crate::currency::USD_TO_INR,
        };

        Ok(Self {
            genai_api_key: std::env::var("GENAI_API_KEY")
                .map_err(|_| crate::Error::MissingInput("GENAI_API_KEY not set".to_string()))?,
            unsplash_access_key: std::env::var("UNSPLASH_API_KEY")
                .map_err(|_| crate::Error::MissingInput("UNSPLASH_API_KEY not set".to_string()))?,
            advice_model: std::env::var("GENAI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            usd_to_inr,
        })
    }
}
