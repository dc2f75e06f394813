//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nakshatra-lok/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::StorageBackend;
use crate::core::engine::NakshatraStrategy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LokConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: Option<StorageBackend>,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeocodingConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    pub nakshatra_strategy: Option<NakshatraStrategy>,
    pub tick_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TICK_SECONDS: u64 = 1;
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://api.opencagedata.com/geocode/v1";
pub const DEFAULT_LOG_FILE: &str = "nakshatra-lok.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

const CONFIG_DIR: &str = ".nakshatra-lok";
const DEFAULT_CHART_FILE: &str = "charts.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub storage_path: PathBuf,
    pub geocoding_api_key: Option<String>,
    pub geocoding_base_url: String,
    pub nakshatra_strategy: NakshatraStrategy,
    pub tick_seconds: u64,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub storage_backend: Option<StorageBackend>,
    pub nakshatra_strategy: Option<NakshatraStrategy>,
    pub tick_seconds: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.nakshatra-lok/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.nakshatra-lok/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LokConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LokConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LokConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LokConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LokConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Nakshatra Lok Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# host = "127.0.0.1"                 # Or set NAKSHATRA_LOK_HOST
# port = 5000                        # Or set NAKSHATRA_LOK_PORT

# [storage]
# backend = "memory"                 # "memory" or "file" (NAKSHATRA_LOK_STORAGE)
# path = "/home/me/.nakshatra-lok/charts.json"

# [geocoding]
# api_key = "..."                    # Or set GEOCODING_API_KEY env var
# base_url = "https://api.opencagedata.com/geocode/v1"

# [engine]
# nakshatra_strategy = "moon"        # "moon" or "clock"
# tick_seconds = 1                   # Dashboard refresh interval

# [logging]
# file = "nakshatra-lok.log"
# level = "debug"                    # Or set NAKSHATRA_LOK_LOG_LEVEL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable {}={}", key, raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LokConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Host: env → config → default
    let host = std::env::var("NAKSHATRA_LOK_HOST")
        .ok()
        .or_else(|| config.server.host.clone())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    // Port: CLI → env → config → default
    let port = cli
        .port
        .or_else(|| env_parsed("NAKSHATRA_LOK_PORT"))
        .or(config.server.port)
        .unwrap_or(DEFAULT_PORT);

    // Storage backend: CLI → env → config → default
    let storage_backend = cli
        .storage_backend
        .or_else(|| env_parsed("NAKSHATRA_LOK_STORAGE"))
        .or(config.storage.backend)
        .unwrap_or_default();

    let storage_path = config.storage.path.clone().unwrap_or_else(|| {
        config_dir()
            .map(|d| d.join(DEFAULT_CHART_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_FILE))
    });

    // Geocoding API key: env → config
    let geocoding_api_key = std::env::var("GEOCODING_API_KEY")
        .ok()
        .or_else(|| config.geocoding.api_key.clone());

    let geocoding_base_url = std::env::var("GEOCODING_BASE_URL")
        .ok()
        .or_else(|| config.geocoding.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEOCODING_BASE_URL.to_string());

    let log_level = env_parsed("NAKSHATRA_LOK_LOG_LEVEL")
        .or_else(|| {
            config
                .logging
                .level
                .as_deref()
                .and_then(|l| LevelFilter::from_str(l).ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        host,
        port,
        storage_backend,
        storage_path,
        geocoding_api_key,
        geocoding_base_url,
        nakshatra_strategy: cli
            .nakshatra_strategy
            .or(config.engine.nakshatra_strategy)
            .unwrap_or_default(),
        tick_seconds: cli
            .tick_seconds
            .or(config.engine.tick_seconds)
            .unwrap_or(DEFAULT_TICK_SECONDS)
            .max(1),
        log_file: config
            .logging
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        log_level,
    }
}
