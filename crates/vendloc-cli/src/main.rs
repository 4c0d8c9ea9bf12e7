//! Operational CLI for the marketplace location subsystem: one-off
//! reverse geocodes, nearby-seller searches over a JSON export, and
//! location directory lookups.

use anyhow::Context;
use clap::{Parser, Subcommand};

use vendloc_core::{
    find_nearby_ranked, find_nearby_sellers, Coordinate, SellerLocation, DEFAULT_RADIUS_KM,
};
use vendloc_directory::DirectoryClient;
use vendloc_geocode::GeocodeClient;

#[derive(Debug, Parser)]
#[command(name = "vendloc")]
#[command(about = "Marketplace location tools: reverse geocoding, nearby-seller search, directory lookups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reverse-geocode a coordinate into a structured address.
    Geocode {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Filter and rank sellers from a JSON export by distance.
    Nearby {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius_km: f64,
        /// Path to a JSON array of seller location records.
        #[arg(long)]
        sellers: std::path::PathBuf,
        /// Optional text query; switches output to relevance ranking.
        #[arg(long)]
        query: Option<String>,
    },
    /// Query the location directory API.
    Directory {
        #[command(subcommand)]
        command: DirectoryCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DirectoryCommands {
    States,
    Districts {
        #[arg(long)]
        state_id: i64,
    },
    Cities {
        #[arg(long)]
        district_id: i64,
    },
    Pincodes {
        #[arg(long)]
        city_id: i64,
    },
    ValidatePincode { pincode: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Geocode { lat, lon } => {
            let config = vendloc_geocode::load_config_from_env()?;
            let client = GeocodeClient::new(config)?;
            let location = client.reverse_geocode(lat, lon).await?;
            println!("{}", serde_json::to_string_pretty(&location)?);
        }
        Commands::Nearby {
            lat,
            lon,
            radius_km,
            sellers,
            query,
        } => {
            let center = Coordinate::new(lat, lon)?;
            let raw = std::fs::read_to_string(&sellers)
                .with_context(|| format!("reading sellers file {}", sellers.display()))?;
            let candidates: Vec<SellerLocation> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing sellers file {}", sellers.display()))?;

            let results = match query.as_deref() {
                Some(q) => find_nearby_ranked(center, &candidates, radius_km, Some(q)),
                None => find_nearby_sellers(center, &candidates, radius_km),
            };
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Directory { command } => {
            let client = directory_client()?;
            run_directory(&client, command).await?;
        }
    }

    Ok(())
}

fn directory_client() -> anyhow::Result<DirectoryClient> {
    let base_url = std::env::var("VENDLOC_DIRECTORY_BASE_URL")
        .context("VENDLOC_DIRECTORY_BASE_URL must be set for directory commands")?;
    Ok(DirectoryClient::new(&base_url)?)
}

async fn run_directory(client: &DirectoryClient, command: DirectoryCommands) -> anyhow::Result<()> {
    match command {
        DirectoryCommands::States => {
            println!("{}", serde_json::to_string_pretty(&client.get_states().await?)?);
        }
        DirectoryCommands::Districts { state_id } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&client.get_districts(state_id).await?)?
            );
        }
        DirectoryCommands::Cities { district_id } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&client.get_cities(district_id).await?)?
            );
        }
        DirectoryCommands::Pincodes { city_id } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&client.get_pincodes(city_id).await?)?
            );
        }
        DirectoryCommands::ValidatePincode { pincode } => {
            match client.validate_pincode(&pincode).await? {
                Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
                None => println!("pincode {pincode} not found"),
            }
        }
    }
    Ok(())
}
