//! # TUI Components
//!
//! Stateless, props-based pieces of the dashboard. Each file holds the
//! component, its rendering and its tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (location and strategy line)
//! ├── widget_card.rs   (clock, nakshatra and choghadiya cards)
//! └── planet_table.rs  (per-planet positions)
//! ```

mod planet_table;
mod title_bar;
mod widget_card;

pub use planet_table::PlanetTable;
pub use title_bar::TitleBar;
pub use widget_card::WidgetCard;
