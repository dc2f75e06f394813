//! # WidgetCard Component
//!
//! A bordered card with a title and a few lines of text. The dashboard uses
//! three of them: the clock, the current nakshatra and the current
//! choghadiya.

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::engine::{ChoghadiyaInfo, DayHalf, NakshatraInfo};
use crate::tui::component::Component;

pub struct WidgetCard {
    pub title: String,
    /// First line is drawn bold in the accent colour.
    pub lines: Vec<String>,
    pub accent: Color,
}

impl WidgetCard {
    pub fn new(title: impl Into<String>, lines: Vec<String>, accent: Color) -> Self {
        Self {
            title: title.into(),
            lines,
            accent,
        }
    }

    pub fn clock(at: NaiveDateTime) -> Self {
        Self::new(
            "Current Time",
            vec![
                at.format("%-I:%M:%S %p").to_string(),
                at.format("%A, %-d %B %Y").to_string(),
            ],
            Color::Cyan,
        )
    }

    pub fn nakshatra(info: &NakshatraInfo) -> Self {
        let companions = if info.companions.is_empty() {
            "No planets in this nakshatra".to_string()
        } else {
            let names: Vec<&str> = info.companions.iter().map(|p| p.name()).collect();
            format!("With: {}", names.join(", "))
        };
        Self::new(
            "Current Nakshatra",
            vec![
                format!("{} ({})", info.nakshatra.name(), info.nakshatra.hindi_name()),
                format!(
                    "{}: {:.2}° - {:.2}°",
                    info.rashi.name(),
                    info.start_degrees,
                    info.end_degrees
                ),
                companions,
            ],
            Color::Magenta,
        )
    }

    /// Green when auspicious, red otherwise.
    pub fn choghadiya(info: &ChoghadiyaInfo) -> Self {
        let (accent, verdict) = if info.is_auspicious() {
            (Color::Green, "Auspicious")
        } else {
            (Color::Red, "Inauspicious")
        };
        let half = match info.half {
            DayHalf::Day => "Day",
            DayHalf::Night => "Night",
        };
        Self::new(
            "Current Choghadiya",
            vec![
                format!("{} ({})", info.period.name(), info.period.hindi_name()),
                format!("{} - {} ({half})", info.start_label(), info.end_label()),
                verdict.to_string(),
            ],
            accent,
        )
    }
}

impl Component for WidgetCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    Line::styled(
                        text.clone(),
                        Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(text.clone())
                }
            })
            .collect();

        let border_style = Style::default().fg(self.accent).add_modifier(Modifier::DIM);
        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(self.title.as_str())
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::current_choghadiya;
    use crate::test_support::at;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(card: &mut WidgetCard) -> String {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_clock_card() {
        let mut card = WidgetCard::clock(at(2024, 1, 1, 14, 5));
        let text = rendered_text(&mut card);
        assert!(text.contains("Current Time"));
        assert!(text.contains("2:05:00 PM"));
        assert!(text.contains("Monday"));
    }

    #[test]
    fn test_choghadiya_card_colour_follows_auspiciousness() {
        // 06:00 opens the day with Udveg, inauspicious.
        let udveg = WidgetCard::choghadiya(&current_choghadiya(at(2024, 1, 1, 6, 0)));
        assert_eq!(udveg.accent, Color::Red);
        // 07:30 is Char, auspicious.
        let char_ = WidgetCard::choghadiya(&current_choghadiya(at(2024, 1, 1, 7, 30)));
        assert_eq!(char_.accent, Color::Green);

        let mut card = udveg;
        let text = rendered_text(&mut card);
        assert!(text.contains("Udveg"));
        assert!(text.contains("6:00 AM - 7:30 AM (Day)"));
        assert!(text.contains("Inauspicious"));
    }
}
