use std::io::stdout;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use fern::Dispatch;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::interval;

use orderdesk::api::{ApiClient, RetryPolicy};
use orderdesk::models::OrderRecord;
use orderdesk::settings::init_settings;
use orderdesk::submit::{run_submission, SubmissionEvent, SubmitPhase};
use orderdesk::ui::{ui_draw, AppState, Tab, ToastKind, UiMode, FORM_FIELD_COUNT};
use orderdesk::validation::validate_order;

/// Initialize logger function
fn setup_logger(level: &str) -> Result<(), fern::InitError> {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info, // Default to Info for invalid values
    };
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(log_level)
        .chain(fern::log_file("orderdesk.log")?)
        .apply()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let settings = init_settings();
    setup_logger(&settings.log_level).expect("Can't initialize logger");
    log::info!("orderdesk started");

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let api = ApiClient::new(
        settings.api_base_url.clone(),
        RetryPolicy::from_settings(settings),
    );
    let toast_duration = Duration::from_millis(settings.toast_duration_ms);

    // Event handling: keyboard input and periodic UI refresh.
    let mut events = EventStream::new();
    let mut refresh_interval = interval(Duration::from_millis(250));
    let mut app = AppState::new();

    // Channel to receive progress and results from the submission task.
    let (submission_tx, mut submission_rx) =
        tokio::sync::mpsc::unbounded_channel::<SubmissionEvent>();

    loop {
        tokio::select! {
            event = submission_rx.recv() => {
                match event {
                    Some(SubmissionEvent::Phase(phase)) => {
                        if let UiMode::Submitting(current) = &mut app.mode {
                            *current = phase;
                        }
                    }
                    Some(SubmissionEvent::Done(outcome)) => {
                        // Single cleanup path for every outcome: record the
                        // attempt, reset the form, unlock the UI, notify.
                        app.history.push(OrderRecord {
                            submitted_at: Local::now(),
                            user_name: app.form.user_name.trim().to_string(),
                            phone_number: app.form.phone_number.trim().to_string(),
                            order_id: outcome.order_id,
                            status: outcome.status,
                            message: outcome.message.clone(),
                        });
                        app.selected_history_idx = app.history.len() - 1;
                        app.form.clear();
                        app.mode = UiMode::Normal;
                        let kind = if outcome.is_success() {
                            ToastKind::Success
                        } else {
                            ToastKind::Error
                        };
                        app.show_toast(outcome.message, kind);
                    }
                    None => {}
                }
            }
            maybe_event = events.next() => {
                if let Some(Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }))) = maybe_event {
                    match code {
                        KeyCode::Left => match &mut app.mode {
                            UiMode::Normal => app.active_tab = app.active_tab.prev(),
                            UiMode::ConfirmExit(selected) => *selected = true,
                            UiMode::Submitting(_) => {}
                        },
                        KeyCode::Right => match &mut app.mode {
                            UiMode::Normal => app.active_tab = app.active_tab.next(),
                            UiMode::ConfirmExit(selected) => *selected = false,
                            UiMode::Submitting(_) => {}
                        },
                        KeyCode::Up => {
                            if matches!(app.mode, UiMode::Normal) {
                                match app.active_tab {
                                    Tab::NewOrder => {
                                        if app.form.focused > 0 {
                                            app.form.focused -= 1;
                                        }
                                    }
                                    Tab::History => {
                                        if app.selected_history_idx > 0 {
                                            app.selected_history_idx -= 1;
                                        }
                                    }
                                    _ => {}
                                }
                            }
                        }
                        KeyCode::Down => {
                            if matches!(app.mode, UiMode::Normal) {
                                match app.active_tab {
                                    Tab::NewOrder => {
                                        if app.form.focused + 1 < FORM_FIELD_COUNT {
                                            app.form.focused += 1;
                                        }
                                    }
                                    Tab::History => {
                                        let len = app.history.len();
                                        if len > 0 && app.selected_history_idx < len - 1 {
                                            app.selected_history_idx += 1;
                                        }
                                    }
                                    _ => {}
                                }
                            }
                        }
                        KeyCode::Tab => {
                            if matches!(app.mode, UiMode::Normal) && app.active_tab == Tab::NewOrder {
                                app.form.focused = (app.form.focused + 1) % FORM_FIELD_COUNT;
                            }
                        }
                        KeyCode::BackTab => {
                            if matches!(app.mode, UiMode::Normal) && app.active_tab == Tab::NewOrder {
                                app.form.focused = if app.form.focused == 0 {
                                    FORM_FIELD_COUNT - 1
                                } else {
                                    app.form.focused - 1
                                };
                            }
                        }
                        KeyCode::Enter => {
                            match &app.mode {
                                UiMode::Normal => match app.active_tab {
                                    Tab::NewOrder => {
                                        // The submit key is inert until both fields have content.
                                        if app.form.is_ready() {
                                            match validate_order(
                                                &app.form.user_name,
                                                &app.form.phone_number,
                                                settings,
                                            ) {
                                                Ok(order) => {
                                                    app.mode = UiMode::Submitting(SubmitPhase::Sending);
                                                    let api = api.clone();
                                                    let events_tx = submission_tx.clone();
                                                    tokio::spawn(async move {
                                                        let outcome =
                                                            run_submission(&api, order, &events_tx).await;
                                                        let _ = events_tx.send(SubmissionEvent::Done(outcome));
                                                    });
                                                }
                                                Err(message) => {
                                                    app.show_toast(message, ToastKind::Error);
                                                }
                                            }
                                        }
                                    }
                                    Tab::Exit => app.mode = UiMode::ConfirmExit(false),
                                    _ => {}
                                },
                                UiMode::ConfirmExit(selected) => {
                                    if *selected {
                                        break;
                                    }
                                    app.mode = UiMode::Normal;
                                }
                                // A submission is in flight: no duplicate submissions.
                                UiMode::Submitting(_) => {}
                            }
                        }
                        KeyCode::Esc => match app.mode {
                            UiMode::ConfirmExit(_) => app.mode = UiMode::Normal,
                            // An in-flight submission cannot be cancelled.
                            UiMode::Submitting(_) => {}
                            UiMode::Normal => app.mode = UiMode::ConfirmExit(false),
                        },
                        KeyCode::Char(c) => match &app.mode {
                            UiMode::Normal => {
                                if app.active_tab == Tab::NewOrder {
                                    app.form.focused_field_mut().push(c);
                                } else if c == 'q' {
                                    app.mode = UiMode::ConfirmExit(false);
                                }
                            }
                            UiMode::ConfirmExit(_) => match c {
                                'y' | 'Y' => break,
                                'n' | 'N' => app.mode = UiMode::Normal,
                                _ => {}
                            },
                            UiMode::Submitting(_) => {}
                        },
                        KeyCode::Backspace => {
                            if matches!(app.mode, UiMode::Normal) && app.active_tab == Tab::NewOrder {
                                app.form.focused_field_mut().pop();
                            }
                        }
                        _ => {}
                    }
                }
            },
            _ = refresh_interval.tick() => {
                // Refresh the UI even if there is no input; drives the spinner
                // animation and the toast countdown.
            }
        }

        app.expire_toast(toast_duration);
        terminal.draw(|f| ui_draw(f, &app, settings))?;
    }

    // Restore terminal to its original state.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
