use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::engine::{NakshatraStrategy, Snapshot};
use crate::tui::component::Component;
use crate::tui::components::{PlanetTable, TitleBar, WidgetCard};

pub fn draw_dashboard(frame: &mut Frame, snapshot: &Snapshot, strategy: NakshatraStrategy) {
    use Constraint::{Length, Min, Ratio};
    let layout = Layout::vertical([Length(1), Length(6), Min(0), Length(1)]);
    let [title_area, cards_area, table_area, footer_area] = layout.areas(frame.area());
    let [time_area, nakshatra_area, choghadiya_area] =
        Layout::horizontal([Ratio(1, 3), Ratio(1, 3), Ratio(1, 3)]).areas(cards_area);

    TitleBar::new(&snapshot.location, strategy).render(frame, title_area);
    WidgetCard::clock(snapshot.at).render(frame, time_area);
    WidgetCard::nakshatra(&snapshot.nakshatra).render(frame, nakshatra_area);
    WidgetCard::choghadiya(&snapshot.choghadiya).render(frame, choghadiya_area);
    PlanetTable::new(&snapshot.planets).render(frame, table_area);

    frame.render_widget(
        Span::styled(
            "q / Esc / Ctrl+C to quit",
            Style::default().add_modifier(Modifier::DIM),
        ),
        footer_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::snapshot;
    use crate::test_support::{at, new_delhi};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_dashboard_renders_every_section() {
        let snap = snapshot(&new_delhi(), at(2024, 1, 1, 12, 0), NakshatraStrategy::Clock);
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| draw_dashboard(f, &snap, NakshatraStrategy::Clock))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("New Delhi"));
        assert!(text.contains("nakshatra: clock"));
        assert!(text.contains("Current Time"));
        assert!(text.contains("Current Nakshatra"));
        assert!(text.contains("Current Choghadiya"));
        assert!(text.contains("Planets"));
        assert!(text.contains("to quit"));
    }
}
