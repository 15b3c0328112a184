use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{FormState, BACKGROUND_COLOR, PRIMARY_COLOR};

pub fn render_order_form(f: &mut ratatui::Frame, area: Rect, form: &FormState) {
    let inner_chunks = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1), // spacer
            Constraint::Length(3), // name field
            Constraint::Length(3), // phone field
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hint
        ],
    )
    .split(area);

    let block = Block::default()
        .title("🛒 New Order")
        .borders(Borders::ALL)
        .style(Style::default().bg(BACKGROUND_COLOR).fg(PRIMARY_COLOR));
    f.render_widget(block, area);

    // Field 0: customer name
    let name = Paragraph::new(Line::from(form.user_name.clone())).block(
        Block::default()
            .title(Line::from(vec![
                Span::styled("👤 ", Style::default().fg(Color::Cyan)),
                Span::styled("Name", Style::default().add_modifier(Modifier::BOLD)),
            ]))
            .borders(Borders::ALL)
            .style(if form.focused == 0 {
                Style::default().fg(Color::Black).bg(PRIMARY_COLOR)
            } else {
                Style::default().bg(BACKGROUND_COLOR).fg(Color::White)
            }),
    );
    f.render_widget(name, inner_chunks[1]);

    // Field 1: phone number
    let phone = Paragraph::new(Line::from(form.phone_number.clone())).block(
        Block::default()
            .title(Line::from(vec![
                Span::styled("📞 ", Style::default().fg(Color::Magenta)),
                Span::styled("Phone", Style::default().add_modifier(Modifier::BOLD)),
            ]))
            .borders(Borders::ALL)
            .style(if form.focused == 1 {
                Style::default().fg(Color::Black).bg(PRIMARY_COLOR)
            } else {
                Style::default().bg(BACKGROUND_COLOR).fg(Color::White)
            }),
    );
    f.render_widget(phone, inner_chunks[2]);

    // Footer hint; the submit key goes dim until both fields have content.
    let submit_style = if form.is_ready() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("💡 ", Style::default().fg(Color::Cyan)),
        Span::styled("Enter", submit_style),
        Span::raw(if form.is_ready() {
            " submit • "
        } else {
            " submit (fill both fields) • "
        }),
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" focus • "),
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" tabs • "),
        Span::styled(
            "q",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" quit"),
    ]))
    .block(Block::default());
    f.render_widget(hint, inner_chunks[4]);

    // Show cursor in the active field
    let (chunk, text) = match form.focused {
        0 => (inner_chunks[1], &form.user_name),
        _ => (inner_chunks[2], &form.phone_number),
    };
    let x = chunk.x + 1 + text.chars().count() as u16;
    let y = chunk.y + 1;
    f.set_cursor_position((x, y));
}
