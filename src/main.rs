//! Mysuru Trails CLI
//!
//! Serves the guide over HTTP and exposes the catalog, filters and selection
//! resolver on the command line.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use mysuru_trails::listing::{self, CategoryFilter, CrowdFilter};
use mysuru_trails::map::MapState;
use mysuru_trails::selection::{HighlightRole, SelectionToken};
use mysuru_trails::{Catalog, TrailsConfig, VERSION, logging, web};

#[derive(Parser)]
#[command(name = "mysuru-trails")]
#[command(version = VERSION)]
#[command(about = "Crowd-aware guide to places, artisans and trails around Mysuru", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory, then ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server
    Serve {
        /// Listen port, overrides the configured one
        #[arg(long)]
        port: Option<u16>,
    },
    /// List places, optionally filtered
    Places {
        /// heritage, nature, culture, art, food or all
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// low, medium, high or all
        #[arg(long, default_value = "all")]
        crowd: CrowdFilter,
    },
    /// Show what the map highlights for a selection token
    Resolve {
        /// e.g. mysore-palace, artisan:lakshmi-pottery, trail:silk-craft-trail
        token: String,
    },
    /// Validate the builtin catalog and the configuration
    Check,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = TrailsConfig::load_from_path(cli.config)?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init_logging(&config.logging)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
                config.validate()?;
            }
            info!("Starting Mysuru Trails v{VERSION}");
            web::run(&config).await
        }
        Command::Places { category, crowd } => list_places(category, crowd),
        Command::Resolve { token } => resolve_token(&token, &config),
        Command::Check => check(),
    }
}

fn list_places(category: CategoryFilter, crowd: CrowdFilter) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let places = listing::filter_places(&catalog.places, category, crowd);

    if places.is_empty() {
        println!("No places match category '{category}' and crowd '{crowd}'.");
        return Ok(());
    }

    for place in places {
        println!(
            "{} {:<40} {:<10} {:<12} {}",
            place.category.icon(),
            place.name,
            place.category.as_str(),
            place.crowd_level.label(),
            place.id
        );
    }
    Ok(())
}

fn resolve_token(raw: &str, config: &TrailsConfig) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let token = SelectionToken::parse(raw);
    let state = MapState::next(&MapState::initial(&config.map), &token, catalog, &config.map);

    println!("Selection: {token}");
    println!("Mode:      {}", state.mode.as_str());
    if let Some(message) = &state.message {
        println!("Message:   {message}");
    }

    let mut highlighted: Vec<_> = state.highlighted.iter().collect();
    highlighted.sort_by_key(|(_, role)| match role {
        HighlightRole::Avoid => 0,
        HighlightRole::TrailStop { order } => *order,
        _ => 1,
    });
    for (entity, role) in highlighted {
        let role = match role {
            HighlightRole::Focus => "focus".to_string(),
            HighlightRole::Avoid => "avoid".to_string(),
            HighlightRole::Recommended => "recommended".to_string(),
            HighlightRole::TrailStop { order } => format!("stop {}", order + 1),
        };
        println!("  {:<12} {}", role, entity.key());
    }
    for connector in &state.connectors {
        println!(
            "  {} -> {} ({:.2} km)",
            connector.from.key(),
            connector.to.key(),
            connector.distance_km
        );
    }

    let viewport = &state.viewport;
    println!(
        "Viewport:  {} zoom {}",
        viewport.center().format_coordinates(),
        viewport.zoom()
    );
    Ok(())
}

fn check() -> Result<()> {
    let catalog = Catalog::builtin().context("Builtin catalog is invalid")?;
    println!(
        "Catalog OK: {} places, {} artisans, {} trails",
        catalog.places.len(),
        catalog.artisans.len(),
        catalog.trails.len()
    );
    println!("Configuration OK");
    Ok(())
}
