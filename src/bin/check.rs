//! One-shot weather probe for deploy-time diagnostics.
//!
//! Fetches current conditions for a single city using the same client the
//! dashboard uses, so an operator can verify the API key and upstream
//! reachability without starting the server:
//!
//! ```bash
//! cargo run --bin check -- Manchester
//! ```

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use weather_dashboard::domain::provider::WeatherProvider;
use weather_dashboard::infrastructure::weather::WeatherApiClient;

#[derive(Parser)]
#[command(name = "check", about = "Probe the upstream weather API for one city")]
struct Args {
    /// City name to fetch, e.g. "Manchester"
    city: String,

    /// Upstream API key
    #[arg(long, env = "WEATHER_API_KEY")]
    api_key: String,

    /// Upstream base URL
    #[arg(long, env = "WEATHER_API_URL", default_value = "https://api.weatherapi.com")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let client = match WeatherApiClient::new(
        args.api_url.trim_end_matches('/'),
        args.api_key,
        Duration::from_secs(args.timeout),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    match client.current(&args.city).await {
        Ok(snapshot) => {
            println!("{}", args.city.bold());
            println!("  {} {}", "Condition:".green(), snapshot.condition_text);
            println!("  {} {}°C", "Temperature:".green(), snapshot.temperature_c);
            println!("  {} {}%", "Humidity:".green(), snapshot.humidity_pct);
            println!(
                "  {} {} mm",
                "Precipitation:".green(),
                snapshot.precipitation_mm
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
