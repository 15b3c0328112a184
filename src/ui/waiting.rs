use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{helpers, BACKGROUND_COLOR, PRIMARY_COLOR};
use crate::submit::SubmitPhase;

pub fn render_waiting(f: &mut ratatui::Frame, phase: SubmitPhase) {
    let area = f.area();
    let popup = helpers::create_centered_popup(area, 60, 10);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title("⏳ Submitting Order")
        .borders(Borders::ALL)
        .style(Style::default().bg(BACKGROUND_COLOR).fg(PRIMARY_COLOR));
    f.render_widget(block, popup);

    let inner_chunks = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1), // spacer
            Constraint::Length(1), // message
            Constraint::Length(1), // spacer
            Constraint::Length(1), // spinner
            Constraint::Length(1), // dots animation
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hint
        ],
    )
    .split(popup);

    let message = match phase {
        SubmitPhase::Sending => "Sending order to the server...",
        SubmitPhase::Verifying => "Verifying order status...",
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        )]))
        .alignment(ratatui::layout::Alignment::Center),
        inner_chunks[1],
    );

    let elapsed_millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    // Braille spinner
    let spinner = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    let spinner_idx = ((elapsed_millis / 80) as usize) % spinner.chars().count();
    let spinner_char = spinner.chars().nth(spinner_idx).unwrap_or('⠋');

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            format!("  {}  ", spinner_char),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(ratatui::layout::Alignment::Center),
        inner_chunks[3],
    );

    let dots_count = ((elapsed_millis / 400) as usize % 4) + 1;
    let dots = ".".repeat(dots_count);
    let dots_line = Line::from(vec![
        Span::styled(
            match phase {
                SubmitPhase::Sending => "Sending",
                SubmitPhase::Verifying => "Verifying",
            },
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{:<4}", dots), Style::default().fg(PRIMARY_COLOR)),
    ]);

    f.render_widget(
        Paragraph::new(dots_line).alignment(ratatui::layout::Alignment::Center),
        inner_chunks[4],
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            "Please wait, this may take a few seconds",
            Style::default().fg(Color::DarkGray),
        )]))
        .alignment(ratatui::layout::Alignment::Center),
        inner_chunks[6],
    );
}
