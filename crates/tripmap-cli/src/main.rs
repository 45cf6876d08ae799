mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tripmap_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "tripmap-cli")]
#[command(about = "Render visited and bucket-list places onto a world map")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a places file and print the resulting map as JSON
    Render {
        /// Places YAML file (defaults to TRIPMAP_PLACES_PATH)
        #[arg(long)]
        places: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Resolve a single location to map coordinates
    Resolve {
        /// Free-text location, e.g. "Paris, France"
        location: String,
        /// Explicit latitude; used together with --lon
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Explicit longitude; used together with --lat
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// List places grouped into visited and bucket list
    List {
        /// Places YAML file (defaults to TRIPMAP_PLACES_PATH)
        #[arg(long)]
        places: Option<PathBuf>,
    },
    /// Print the built-in gazetteer in match order
    Gazetteer,
}

fn main() -> anyhow::Result<()> {
    // Parse first so `--help` works even with a broken environment.
    let cli = Cli::parse();

    let config = tripmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli, &config)
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Render { places, pretty }) => {
            let path = places.unwrap_or_else(|| config.places_path.clone());
            commands::run_render(config, &path, pretty)?;
        }
        Some(Commands::Resolve { location, lat, lon }) => {
            let coordinates = lat.zip(lon).map(|(lat, lon)| [lat, lon]);
            commands::run_resolve(&location, coordinates)?;
        }
        Some(Commands::List { places }) => {
            let path = places.unwrap_or_else(|| config.places_path.clone());
            commands::run_list(&path)?;
        }
        Some(Commands::Gazetteer) => commands::run_gazetteer(),
        None => println!("tripmap-cli: pass --help to see available commands"),
    }

    Ok(())
}
