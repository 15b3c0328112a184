use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Color;

use crate::models::OrderRecord;
use crate::settings::Settings;
use crate::submit::SubmitPhase;

pub const PRIMARY_COLOR: Color = Color::Rgb(95, 179, 171); // #5FB3AB
pub const BACKGROUND_COLOR: Color = Color::Rgb(24, 27, 34); // #181B22

pub mod exit_confirm;
pub mod helpers;
pub mod history_tab;
pub mod order_form;
pub mod settings_tab;
pub mod status;
pub mod tabs;
pub mod toast;
pub mod waiting;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    NewOrder,
    History,
    Settings,
    Exit,
}

impl Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tab::NewOrder => "New Order",
                Tab::History => "History",
                Tab::Settings => "Settings",
                Tab::Exit => "Exit",
            }
        )
    }
}

impl Tab {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Tab::NewOrder,
            1 => Tab::History,
            2 => Tab::Settings,
            3 => Tab::Exit,
            _ => panic!("Invalid tab index: {}", index),
        }
    }

    pub fn as_index(self) -> usize {
        match self {
            Tab::NewOrder => 0,
            Tab::History => 1,
            Tab::Settings => 2,
            Tab::Exit => 3,
        }
    }

    pub fn count() -> usize {
        4
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::NewOrder => Tab::NewOrder,
            Tab::History => Tab::NewOrder,
            Tab::Settings => Tab::History,
            Tab::Exit => Tab::Settings,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::NewOrder => Tab::History,
            Tab::History => Tab::Settings,
            Tab::Settings => Tab::Exit,
            Tab::Exit => Tab::Exit,
        }
    }

    pub fn get_titles() -> Vec<String> {
        (0..Tab::count())
            .map(|i| Tab::from_index(i).to_string())
            .collect()
    }
}

/// The order form: two text fields plus the focus index.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub user_name: String,
    pub phone_number: String,
    pub focused: usize, // 0 = name, 1 = phone
}

pub const FORM_FIELD_COUNT: usize = 2;

impl FormState {
    /// Live readiness check gating the submit key: both fields non-empty.
    /// The strict validation runs separately at submit time.
    pub fn is_ready(&self) -> bool {
        !self.user_name.trim().is_empty() && !self.phone_number.trim().is_empty()
    }

    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focused {
            0 => &mut self.user_name,
            _ => &mut self.phone_number,
        }
    }

    pub fn clear(&mut self) {
        self.user_name.clear();
        self.phone_number.clear();
        self.focused = 0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. Expiry is checked on the tick path before each
/// draw; replacing the toast restarts the countdown.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

#[derive(Clone, Debug)]
pub enum UiMode {
    Normal,
    /// A submission is in flight; form input and further submits are inert.
    Submitting(SubmitPhase),
    ConfirmExit(bool), // selected button: true = Yes, false = No
}

pub struct AppState {
    pub active_tab: Tab,
    pub mode: UiMode,
    pub form: FormState,
    pub toast: Option<Toast>,
    pub history: Vec<OrderRecord>,
    pub selected_history_idx: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::NewOrder,
            mode: UiMode::Normal,
            form: FormState::default(),
            toast: None,
            history: Vec::new(),
            selected_history_idx: 0,
        }
    }

    /// At most one submission may be in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.mode, UiMode::Submitting(_))
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Clears the toast once it has outlived its duration. Called from the
    /// main update path before rendering.
    pub fn expire_toast(&mut self, duration: Duration) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() > duration)
        {
            self.toast = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ui_draw(f: &mut ratatui::Frame, app: &AppState, settings: &Settings) {
    // One row of tabs, the active tab's content, and a status bar.
    let chunks = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ],
    )
    .split(f.area());

    tabs::render_tabs(f, chunks[0], app.active_tab);

    match app.active_tab {
        Tab::NewOrder => order_form::render_order_form(f, chunks[1], &app.form),
        Tab::History => history_tab::render_history_tab(f, chunks[1], app),
        Tab::Settings => settings_tab::render_settings_tab(f, chunks[1], settings),
        Tab::Exit => exit_confirm::render_exit_tab(f, chunks[1]),
    }

    status::render_status_bar(f, chunks[2], settings, &app.mode);

    // Popups and the toast render on top of the tab content.
    match &app.mode {
        UiMode::Submitting(phase) => waiting::render_waiting(f, *phase),
        UiMode::ConfirmExit(selected) => exit_confirm::render_exit_confirm(f, *selected),
        UiMode::Normal => {}
    }

    if let Some(toast) = &app.toast {
        toast::render_toast(f, toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_readiness_requires_both_fields() {
        let mut form = FormState::default();
        assert!(!form.is_ready());
        form.user_name = "John Doe".to_string();
        assert!(!form.is_ready());
        form.phone_number = "  ".to_string();
        assert!(!form.is_ready());
        form.phone_number = "+375 29 111-11-11".to_string();
        assert!(form.is_ready());
    }

    #[test]
    fn new_toast_replaces_the_pending_one() {
        let mut app = AppState::new();
        app.show_toast("first", ToastKind::Error);
        app.show_toast("second", ToastKind::Success);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn toast_survives_until_its_duration_elapses() {
        let mut app = AppState::new();
        app.show_toast("hello", ToastKind::Success);
        app.expire_toast(Duration::from_secs(3500));
        assert!(app.toast.is_some());
        app.expire_toast(Duration::ZERO);
        assert!(app.toast.is_none());
    }

    #[test]
    fn submitting_mode_reports_busy() {
        let mut app = AppState::new();
        assert!(!app.is_busy());
        app.mode = UiMode::Submitting(SubmitPhase::Sending);
        assert!(app.is_busy());
        app.mode = UiMode::Submitting(SubmitPhase::Verifying);
        assert!(app.is_busy());
        app.mode = UiMode::ConfirmExit(false);
        assert!(!app.is_busy());
    }

    #[test]
    fn clearing_the_form_resets_focus() {
        let mut form = FormState {
            user_name: "John".to_string(),
            phone_number: "1234567".to_string(),
            focused: 1,
        };
        form.clear();
        assert!(form.user_name.is_empty());
        assert!(form.phone_number.is_empty());
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn tab_navigation_clamps_at_both_ends() {
        assert_eq!(Tab::NewOrder.prev(), Tab::NewOrder);
        assert_eq!(Tab::Exit.next(), Tab::Exit);
        assert_eq!(Tab::NewOrder.next(), Tab::History);
        assert_eq!(Tab::Exit.prev(), Tab::Settings);
    }
}
