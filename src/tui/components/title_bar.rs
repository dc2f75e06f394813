//! # TitleBar Component
//!
//! Single-line bar across the top of the dashboard:
//! `Nakshatra Lok | New Delhi (28.6139, 77.2090) | nakshatra: moon`.
//!
//! Purely presentational. All data arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::engine::NakshatraStrategy;
use crate::core::location::Location;
use crate::tui::component::Component;

pub struct TitleBar {
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub strategy: NakshatraStrategy,
}

impl TitleBar {
    pub fn new(location: &Location, strategy: NakshatraStrategy) -> Self {
        Self {
            location_name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            strategy,
        }
    }

    fn strategy_label(&self) -> &'static str {
        match self.strategy {
            NakshatraStrategy::Moon => "moon",
            NakshatraStrategy::Clock => "clock",
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = format!(
            "Nakshatra Lok | {} ({:.4}, {:.4}) | nakshatra: {}",
            self.location_name,
            self.latitude,
            self.longitude,
            self.strategy_label()
        );
        frame.render_widget(
            Span::styled(title_text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}
