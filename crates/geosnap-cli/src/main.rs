use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use geosnap_catalog::CatalogClient;
use geosnap_core::scoring::score_guess;
use geosnap_game::{select_rounds, SelectionOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "geosnap")]
#[command(about = "Photo geography game: round selection and guess scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Select round photos from the configured asset catalog.
    Rounds {
        /// Number of rounds to select (defaults to GEOSNAP_ROUNDS_PER_GAME).
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible selections; omitted means OS entropy.
        #[arg(long)]
        seed: Option<u64>,
        /// Only photos captured on or after this day (YYYY-MM-DD).
        #[arg(long)]
        taken_after: Option<NaiveDate>,
        /// Only photos captured on or before this day (YYYY-MM-DD).
        #[arg(long)]
        taken_before: Option<NaiveDate>,
    },
    /// Score a guessed coordinate against a round's actual location.
    Score {
        guess_lat: f64,
        guess_lon: f64,
        actual_lat: f64,
        actual_lon: f64,
        #[arg(long, default_value_t = 5000)]
        max_points: u32,
        #[arg(long, default_value_t = 0.1)]
        perfect_radius_km: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let fallback_level =
        std::env::var("GEOSNAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Rounds {
            count,
            seed,
            taken_after,
            taken_before,
        } => {
            let config = geosnap_core::load_app_config_from_env()?;
            let client = CatalogClient::new(
                &config.catalog_url,
                &config.catalog_api_key,
                config.request_timeout_secs,
            )?;

            let mut options = SelectionOptions::from_config(&config);
            if let Some(count) = count {
                options.rounds = count;
            }
            options.taken_after = taken_after;
            options.taken_before = taken_before;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let rounds = select_rounds(&client, &options, &mut rng).await?;
            println!("{}", serde_json::to_string_pretty(&rounds)?);
        }
        Commands::Score {
            guess_lat,
            guess_lon,
            actual_lat,
            actual_lon,
            max_points,
            perfect_radius_km,
        } => {
            anyhow::ensure!(
                (-90.0..=90.0).contains(&guess_lat) && (-90.0..=90.0).contains(&actual_lat),
                "latitude must be within [-90, 90]"
            );
            anyhow::ensure!(
                (-180.0..=180.0).contains(&guess_lon) && (-180.0..=180.0).contains(&actual_lon),
                "longitude must be within [-180, 180]"
            );
            let outcome = score_guess(
                guess_lat,
                guess_lon,
                actual_lat,
                actual_lon,
                max_points,
                perfect_radius_km,
            );
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
