use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{UiMode, BACKGROUND_COLOR, PRIMARY_COLOR};
use crate::settings::Settings;
use crate::submit::SubmitPhase;

pub fn render_status_bar(f: &mut ratatui::Frame, area: Rect, settings: &Settings, mode: &UiMode) {
    let mut spans = vec![Span::styled(
        format!("🔗 {}", settings.api_base_url),
        Style::default().bg(BACKGROUND_COLOR).fg(PRIMARY_COLOR),
    )];

    if let UiMode::Submitting(phase) = mode {
        let label = match phase {
            SubmitPhase::Sending => "  ⏳ sending...",
            SubmitPhase::Verifying => "  ⏳ verifying...",
        };
        spans.push(Span::styled(
            label,
            Style::default().bg(BACKGROUND_COLOR).fg(Color::Yellow),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(BACKGROUND_COLOR).fg(PRIMARY_COLOR)),
    );
    f.render_widget(bar, area);
}
