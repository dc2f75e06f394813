//! # Core Application Logic
//!
//! This module contains Nakshatra Lok's business logic.
//! It knows nothing about HTTP, terminals or geocoding services.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • tables (static data) │
//!                    │  • engine (positions)   │
//!                    │  • wheel (geometry)     │
//!                    │  • chart + store        │
//!                    │                         │
//!                    │  Engine: no I/O. Pure.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │    CLI     │
//!     │ dashboard  │      │  (axum)    │      │ snapshot   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tables`]: planets, rashis, nakshatras, choghadiya periods
//! - [`location`]: the `Location` value and its New Delhi fallback
//! - [`engine`]: angle computation and the derived views
//! - [`wheel`]: point generation for the 2D chart wheel
//! - [`chart`]: birth-chart records and validation
//! - [`store`]: chart persistence behind the `ChartStore` trait
//! - [`config`]: layered settings

pub mod chart;
pub mod config;
pub mod engine;
pub mod location;
pub mod store;
pub mod tables;
pub mod wheel;

pub use engine::{NakshatraStrategy, Snapshot, snapshot, snapshot_now};
pub use location::Location;
