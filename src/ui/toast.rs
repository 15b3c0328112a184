use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{Toast, ToastKind, BACKGROUND_COLOR};

/// Transient notification bar, centered just above the status bar.
/// Lifetime is handled by `AppState::expire_toast` on the tick path.
pub fn render_toast(f: &mut ratatui::Frame, toast: &Toast) {
    let area = f.area();
    if area.height < 7 {
        return;
    }

    let (icon, accent) = match toast.kind {
        ToastKind::Success => ("✅ ", Color::Green),
        ToastKind::Error => ("❌ ", Color::Red),
    };

    let msg_width = toast.message.chars().count() as u16 + 8;
    let width = msg_width.clamp(20, area.width.saturating_sub(4));
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height - 6,
        width,
        height: 3,
    };
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(BACKGROUND_COLOR).fg(accent));
    f.render_widget(block, popup);

    let line = Line::from(vec![
        Span::styled(icon, Style::default().fg(accent)),
        Span::styled(toast.message.clone(), Style::default().fg(Color::White)),
    ]);
    let inner = Rect {
        x: popup.x + 1,
        y: popup.y + 1,
        width: popup.width.saturating_sub(2),
        height: 1,
    };
    f.render_widget(
        Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}
