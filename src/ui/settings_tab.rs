use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{BACKGROUND_COLOR, PRIMARY_COLOR};
use crate::settings::Settings;

fn entry<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(PRIMARY_COLOR)),
        Span::styled(value, Style::default()),
    ])
}

/// Read-only view of the loaded configuration. Edit
/// `~/.orderdesk/settings.toml` and restart to change anything here.
pub fn render_settings_tab(f: &mut ratatui::Frame, area: Rect, settings: &Settings) {
    let block = Block::default()
        .title("⚙️  Settings")
        .borders(Borders::ALL)
        .style(Style::default().bg(BACKGROUND_COLOR));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        entry("API base URL", settings.api_base_url.clone()),
        entry("Log level", settings.log_level.clone()),
        Line::from(""),
        entry(
            "Order creation",
            format!(
                "{} attempts, {} ms apart",
                settings.create_max_retries, settings.create_retry_delay_ms
            ),
        ),
        entry(
            "Status polling",
            format!(
                "{} attempts, {} ms apart",
                settings.poll_max_attempts, settings.poll_delay_ms
            ),
        ),
        entry(
            "Phone digits",
            format!(
                "{}-{}",
                settings.phone_min_digits, settings.phone_max_digits
            ),
        ),
        entry("Toast duration", format!("{} ms", settings.toast_duration_ms)),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Edit ~/.orderdesk/settings.toml and restart to change these values",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
