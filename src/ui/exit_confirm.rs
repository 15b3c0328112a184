use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{helpers, BACKGROUND_COLOR, PRIMARY_COLOR};

/// Content of the Exit tab itself; the actual confirmation is the popup.
pub fn render_exit_tab(f: &mut ratatui::Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to exit orderdesk"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .title("Exit")
            .borders(Borders::ALL)
            .style(Style::default().bg(BACKGROUND_COLOR)),
    );
    f.render_widget(paragraph, area);
}

/// Renders the exit confirmation popup.
pub fn render_exit_confirm(f: &mut ratatui::Frame, selected_button: bool) {
    let area = f.area();
    let popup = helpers::create_centered_popup(area, 60, 11);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Exit orderdesk ")
        .borders(Borders::ALL)
        .style(Style::default().bg(BACKGROUND_COLOR).fg(PRIMARY_COLOR));
    let inner_area = block.inner(popup);

    let chunks = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1), // spacer
            Constraint::Length(1), // message
            Constraint::Length(1), // spacer
            Constraint::Length(3), // buttons
            Constraint::Length(1), // help text
            Constraint::Length(1), // help text for esc key
        ],
    )
    .split(inner_area);

    f.render_widget(block, popup);

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            "Are you sure you want to exit?",
            Style::default().fg(Color::White),
        )]))
        .alignment(ratatui::layout::Alignment::Center),
        chunks[1],
    );

    // Yes/No buttons
    let button_area = chunks[3];
    let button_width = 15;
    let separator_width = 1;
    let total_button_width = (button_width * 2) + separator_width;

    let button_x = button_area.x + (button_area.width.saturating_sub(total_button_width)) / 2;
    let centered_button_area = Rect {
        x: button_x,
        y: button_area.y,
        width: total_button_width.min(button_area.width),
        height: button_area.height,
    };

    let button_chunks = Layout::new(
        Direction::Horizontal,
        [
            Constraint::Length(button_width),
            Constraint::Length(separator_width),
            Constraint::Length(button_width),
        ],
    )
    .split(centered_button_area);

    render_button(f, button_chunks[0], "✓ YES", Color::Green, selected_button);
    render_button(f, button_chunks[2], "✗ NO", Color::Red, !selected_button);

    helpers::render_help_text(f, chunks[4], "Use ", "Left/Right", " to select, Enter to confirm");
    helpers::render_help_text(f, chunks[5], "Press ", "Esc", " to cancel");
}

fn render_button(f: &mut ratatui::Frame, area: Rect, label: &str, color: Color, selected: bool) {
    let style = if selected {
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    let block = Block::default().borders(Borders::ALL).style(style);
    f.render_widget(block, area);

    let inner = Layout::new(Direction::Vertical, [Constraint::Min(0)])
        .margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            label.to_string(),
            Style::default()
                .fg(if selected { Color::Black } else { color })
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(ratatui::layout::Alignment::Center),
        inner[0],
    );
}
