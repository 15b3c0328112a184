use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::PRIMARY_COLOR;

/// Centers a popup of the given size inside `area`, clamped to fit.
pub fn create_centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// One centered "prefix KEY suffix" help line with the key highlighted.
pub fn render_help_text(f: &mut ratatui::Frame, area: Rect, prefix: &str, key: &str, suffix: &str) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prefix.to_string(), Style::default()),
            Span::styled(
                key.to_string(),
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(suffix.to_string(), Style::default()),
        ]))
        .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
