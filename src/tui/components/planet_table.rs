//! # PlanetTable Component
//!
//! One row per planet slot: symbol, name, angle, house and rashi.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Row, Table};

use crate::core::engine::PlanetPosition;
use crate::tui::component::Component;

pub struct PlanetTable<'a> {
    pub planets: &'a [PlanetPosition],
}

impl<'a> PlanetTable<'a> {
    pub fn new(planets: &'a [PlanetPosition]) -> Self {
        Self { planets }
    }

    fn rows(&self) -> Vec<Row<'static>> {
        self.planets
            .iter()
            .map(|p| {
                Row::new(vec![
                    p.planet.symbol().to_string(),
                    p.planet.name().to_string(),
                    format!("{:>7.2}°", p.angle),
                    p.house.to_string(),
                    format!("{} {} ({})", p.rashi.glyph(), p.rashi.name(), p.rashi.western_name()),
                ])
            })
            .collect()
    }
}

impl Component for PlanetTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec!["", "Planet", "Angle", "House", "Rashi"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let widths = [
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Min(10),
        ];
        let table = Table::new(self.rows(), widths)
            .header(header)
            .block(Block::bordered().title("Planets"));
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{NakshatraStrategy, snapshot};
    use crate::test_support::{at, new_delhi};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_one_row_per_planet() {
        let snap = snapshot(&new_delhi(), at(2024, 1, 1, 6, 0), NakshatraStrategy::Moon);
        let table = PlanetTable::new(&snap.planets);
        assert_eq!(table.rows().len(), 9);
    }

    #[test]
    fn test_renders_sun_row() {
        let snap = snapshot(&new_delhi(), at(2024, 1, 1, 6, 0), NakshatraStrategy::Moon);
        let backend = TestBackend::new(60, 13);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut table = PlanetTable::new(&snap.planets);

        terminal.draw(|f| table.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Planets"));
        assert!(text.contains("Sun"));
        assert!(text.contains("257.21"));
        assert!(text.contains("Neptune"));
    }
}
