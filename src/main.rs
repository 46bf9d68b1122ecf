use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trip_planner::app::App;
use trip_planner::models::{BudgetTier, Currency, TransportMode, TravelTime, TripRequest};
use trip_planner::render;

#[derive(Debug, Parser)]
#[command(name = "trip-planner")]
#[command(about = "Plan a trip with AI-generated recommendations and destination photos")]
struct CliArgs {
    /// Source location.
    #[arg(long)]
    source: String,

    /// Destination location.
    #[arg(long)]
    destination: String,

    /// Trip start date in YYYY-MM-DD format. Defaults to today.
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    start_date: Option<NaiveDate>,

    /// Trip end date in YYYY-MM-DD format. Defaults to five days after the start.
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    end_date: Option<NaiveDate>,

    /// Preferred mode of transport.
    #[arg(long, value_enum, default_value = "any")]
    mode: TransportMode,

    /// Budget range.
    #[arg(long, value_enum, default_value = "standard")]
    budget: BudgetTier,

    /// Preferred time to travel.
    #[arg(long = "time", value_enum, default_value = "morning")]
    travel_time: TravelTime,

    /// Number of travelers.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    travelers: u32,

    /// Preferred currency for displayed prices.
    #[arg(long, value_enum, default_value = "usd")]
    currency: Currency,
}

fn parse_date_arg(input: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected format: YYYY-MM-DD", input))
}

impl CliArgs {
    fn into_request(self) -> TripRequest {
        let start_date = self.start_date.unwrap_or_else(|| Local::now().date_naive());
        let end_date = self
            .end_date
            .or_else(|| start_date.checked_add_days(Days::new(5)))
            .unwrap_or(start_date);

        TripRequest {
            source: self.source,
            destination: self.destination,
            start_date,
            end_date,
            mode: self.mode,
            budget: self.budget,
            travel_time: self.travel_time,
            travelers: self.travelers,
            currency: self.currency,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting trip-planner");

    let request = CliArgs::parse().into_request();

    match App::new() {
        Ok(app) => match app.plan_trip(&request).await {
            Ok(plan) => {
                println!("{}", render::render_plan(&plan));
                Ok(())
            }
            Err(e) => {
                error!("Trip planning failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
