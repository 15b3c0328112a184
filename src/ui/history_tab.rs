use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::{AppState, BACKGROUND_COLOR, PRIMARY_COLOR};
use crate::models::{OrderRecord, ProcessingStatus};

fn status_style(record: &OrderRecord) -> Style {
    match record.status {
        Some(ProcessingStatus::Accepted) => Style::default().fg(Color::Green),
        Some(ProcessingStatus::Processing) => Style::default().fg(Color::Yellow),
        Some(ProcessingStatus::Rejected) | Some(ProcessingStatus::Error) | None => {
            Style::default().fg(Color::Red)
        }
    }
}

/// Table of this session's completed submissions, newest last.
pub fn render_history_tab(f: &mut ratatui::Frame, area: Rect, app: &AppState) {
    if app.history.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "📭 No orders submitted in this session yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .style(Style::default().bg(BACKGROUND_COLOR)),
        );
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("📅 Submitted").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("👤 Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("📞 Phone").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("🆔 Order Id").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("📊 Status").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("💬 Message").style(Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let rows: Vec<Row> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let id_cell = Cell::from(
                record
                    .order_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            );
            let row = Row::new(vec![
                Cell::from(record.submitted_at.format("%H:%M:%S").to_string()),
                Cell::from(record.user_name.clone()),
                Cell::from(record.phone_number.clone()),
                id_cell,
                Cell::from(record.status_label()).style(status_style(record)),
                Cell::from(record.message.clone()),
            ]);

            if i == app.selected_history_idx {
                row.style(Style::default().bg(PRIMARY_COLOR).fg(Color::Black))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        &[
            Constraint::Max(10),
            Constraint::Max(20),
            Constraint::Max(18),
            Constraint::Max(38),
            Constraint::Max(12),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("History")
            .borders(Borders::ALL)
            .style(Style::default().bg(BACKGROUND_COLOR)),
    );
    f.render_widget(table, area);
}
