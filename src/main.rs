use std::fs::File;
use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use nakshatra_lok::StorageBackend;
use nakshatra_lok::api;
use nakshatra_lok::api::types::SnapshotResponse;
use nakshatra_lok::core::config::{CliOverrides, ResolvedConfig, load_config, resolve};
use nakshatra_lok::core::engine::{NakshatraStrategy, snapshot};
use nakshatra_lok::core::location::{CUSTOM_LOCATION_NAME, Location};
use nakshatra_lok::geocoding::{build_geocoder, locate};
use nakshatra_lok::tui;

#[derive(Parser)]
#[command(
    name = "nakshatra-lok",
    about = "Vedic planet positions, nakshatra and choghadiya"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// How the current nakshatra is chosen
    #[arg(long, value_enum, global = true)]
    strategy: Option<NakshatraStrategy>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        /// Chart storage backend
        #[arg(long, value_enum)]
        storage: Option<StorageBackend>,
    },
    /// Print positions for one place and instant
    Snapshot {
        #[command(flatten)]
        place: PlaceArgs,

        /// Local wall-clock time, e.g. 2024-01-01T06:00:00 (default: now)
        #[arg(long)]
        at: Option<NaiveDateTime>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Live terminal dashboard
    Watch {
        #[command(flatten)]
        place: PlaceArgs,

        /// Refresh interval in seconds
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[derive(clap::Args)]
struct PlaceArgs {
    /// Place name to geocode
    #[arg(long)]
    place: Option<String>,

    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = load_config().map_err(|e| io::Error::other(e.to_string()))?;

    let mut overrides = CliOverrides {
        nakshatra_strategy: args.strategy,
        ..CliOverrides::default()
    };
    match &args.command {
        Command::Serve { port, storage } => {
            overrides.port = *port;
            overrides.storage_backend = *storage;
        }
        Command::Watch { interval, .. } => overrides.tick_seconds = *interval,
        Command::Snapshot { .. } => {}
    }
    let config = resolve(&file_config, &overrides);

    // The dashboard owns the terminal, so watch logs to the file only.
    init_logging(&config, !matches!(args.command, Command::Watch { .. }));
    info!(
        "Nakshatra Lok starting (strategy: {:?}, storage: {:?})",
        config.nakshatra_strategy, config.storage_backend
    );

    match args.command {
        Command::Serve { .. } => api::serve(&config).await,
        Command::Snapshot { place, at, json } => {
            let location = resolve_location(&place, &config).await?;
            let at = at.unwrap_or_else(|| Local::now().naive_local());
            let snap = snapshot(&location, at, config.nakshatra_strategy);
            let view = SnapshotResponse::new(&snap, config.nakshatra_strategy);
            if json {
                let out = serde_json::to_string_pretty(&view).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                print_snapshot(&view);
            }
            Ok(())
        }
        Command::Watch { place, .. } => {
            let location = resolve_location(&place, &config).await?;
            tui::run(
                location,
                config.nakshatra_strategy,
                Duration::from_secs(config.tick_seconds),
            )
        }
    }
}

fn init_logging(config: &ResolvedConfig, to_terminal: bool) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if to_terminal {
        loggers.push(TermLogger::new(
            config.log_level.min(LevelFilter::Info),
            log_config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    match File::create(&config.log_file) {
        Ok(log_file) => loggers.push(WriteLogger::new(config.log_level, log_config, log_file)),
        Err(e) => eprintln!(
            "Could not open log file {}: {}",
            config.log_file.display(),
            e
        ),
    }

    let _ = CombinedLogger::init(loggers);
}

/// Explicit coordinates win, then a geocoded place, then New Delhi.
async fn resolve_location(place: &PlaceArgs, config: &ResolvedConfig) -> io::Result<Location> {
    match (place.lat, place.lon, place.place.as_deref()) {
        (Some(lat), Some(lon), name) => {
            Location::checked(lat, lon, name.unwrap_or(CUSTOM_LOCATION_NAME))
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
        }
        (_, _, Some(name)) => Ok(locate(build_geocoder(config).as_ref(), name).await),
        _ => Ok(Location::default()),
    }
}

fn print_snapshot(view: &SnapshotResponse) {
    println!(
        "{} ({:.4}, {:.4}) at {}",
        view.location.name,
        view.location.latitude,
        view.location.longitude,
        view.at.format("%Y-%m-%d %-I:%M:%S %p")
    );
    println!();
    println!("{:<3} {:<8} {:>8} {:>6}  Rashi", "", "Planet", "Angle", "House");
    for p in &view.planets {
        println!(
            "{:<3} {:<8} {:>7.2}° {:>6}  {} ({})",
            p.symbol, p.name, p.angle, p.house, p.rashi, p.rashi_western
        );
    }
    println!();

    let n = &view.nakshatra;
    println!(
        "Nakshatra:  {} ({}) in {}, {:.2}° - {:.2}°",
        n.name, n.hindi_name, n.rashi, n.start_degrees, n.end_degrees
    );
    if !n.companions.is_empty() {
        println!("            with {}", n.companions.join(", "));
    }

    let c = &view.choghadiya;
    println!(
        "Choghadiya: {} ({}) {} - {}, {}",
        c.name,
        c.hindi_name,
        c.start_time,
        c.end_time,
        if c.auspicious { "auspicious" } else { "inauspicious" }
    );
}
