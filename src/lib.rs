//! Nakshatra Lok library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod api;
pub mod core;
pub mod geocoding;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where birth charts are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}
