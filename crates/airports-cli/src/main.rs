// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use airports_core::{
    AirportDb, AirportFilter, DataSource, DatasetCell, DEFAULT_AUTOCOMPLETE_LIMIT,
    DEFAULT_RADIUS_KM,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use serde::Serialize;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

const DATA_FILE: &str = "airports.gz";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the airport dataset (.gz or .json)
    #[arg(short, long, env = "AIRPORTS_DATA")]
    data: Option<PathBuf>,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All airports with a 3-letter IATA code
    Iata { code: String },
    /// All airports with a 4-letter ICAO code
    Icao { code: String },
    /// First airport matching an IATA or ICAO code
    Code { code: String },
    /// All airports with a city code
    City { code: String },
    /// All airports in a country (ISO code)
    Country { code: String },
    /// All airports on a continent (AS, EU, NA, SA, AF, OC, AN)
    Continent { code: String },
    /// Airports whose name contains the query (case-insensitive)
    Search { query: String },
    /// Name/IATA suggestions for a partial query
    Autocomplete {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_AUTOCOMPLETE_LIMIT)]
        limit: usize,
    },
    /// Airports of a type (large_airport, heliport, ... or "airport")
    Type { token: String },
    /// Airports in an IANA timezone
    Timezone { tz: String },
    /// Combined filters, as JSON and/or repeated key=value pairs
    Find {
        /// e.g. '{"country_code": "GB", "type": "large_airport"}'
        #[arg(long)]
        filter: Option<String>,
        /// e.g. --where min_runway_ft=10000
        #[arg(long = "where", value_name = "KEY=VALUE")]
        conditions: Vec<String>,
    },
    /// Airports within a radius of a point, nearest first
    #[command(allow_negative_numbers = true)]
    Nearby {
        lat: f64,
        lon: f64,
        #[arg(short, long, default_value_t = DEFAULT_RADIUS_KM)]
        radius: f64,
    },
    /// Great-circle distance in km between two airports
    Distance { from: String, to: String },
    /// External links for an airport
    Links { code: String },
    /// Record counts for the loaded dataset
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialise logger")?;

    let cell = DatasetCell::new(DataSource::Paths(data_candidates(cli.data.clone())));
    let db = AirportDb::from_cell(&cell)?;
    log::debug!("Airport dataset ready — airports={}", db.dataset().len());

    match &cli.command {
        Commands::Iata { code } => print(&db.by_iata(code)?, cli.pretty),
        Commands::Icao { code } => print(&db.by_icao(code)?, cli.pretty),
        Commands::Code { code } => print(&db.by_code(code)?, cli.pretty),
        Commands::City { code } => print(&db.by_city_code(code)?, cli.pretty),
        Commands::Country { code } => print(&db.by_country_code(code)?, cli.pretty),
        Commands::Continent { code } => print(&db.by_continent(code)?, cli.pretty),
        Commands::Search { query } => print(&db.search_by_name(query)?, cli.pretty),
        Commands::Autocomplete { query, limit } => {
            print(&db.autocomplete(query, *limit), cli.pretty)
        }
        Commands::Type { token } => print(&db.by_type(token)?, cli.pretty),
        Commands::Timezone { tz } => print(&db.by_timezone(tz)?, cli.pretty),
        Commands::Find { filter, conditions } => {
            let filter = build_filter(filter.as_deref(), conditions)?;
            print(&db.find_airports(&filter)?, cli.pretty)
        }
        Commands::Nearby { lat, lon, radius } => {
            print(&db.find_nearby(*lat, *lon, *radius)?, cli.pretty)
        }
        Commands::Distance { from, to } => {
            let km = db.calculate_distance(from, to)?;
            print(
                &serde_json::json!({ "from": from, "to": to, "distance_km": km }),
                cli.pretty,
            )
        }
        Commands::Links { code } => print(&db.get_links(code)?, cli.pretty),
        Commands::Stats => print(&db.dataset().stats(), cli.pretty),
    }
}

/// Explicit path, else the per-user data dir, else the working directory.
fn data_candidates(explicit: Option<PathBuf>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path];
    }
    let mut candidates = Vec::new();
    if let Some(dirs) = ProjectDirs::from("org", "airports", "airports") {
        candidates.push(dirs.data_dir().join(DATA_FILE));
    }
    candidates.push(PathBuf::from(DATA_FILE));
    candidates
}

fn build_filter(json: Option<&str>, conditions: &[String]) -> Result<AirportFilter> {
    let mut filter = match json {
        Some(json) => AirportFilter::from_json(json)?,
        None => AirportFilter::new(),
    };
    for cond in conditions {
        let (key, value) = cond
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got '{}'", cond))?;
        filter.set(key, value)?;
    }
    Ok(filter)
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
