use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::App;
use crate::models::{FocusArea, SummaryOutput};
use crate::network::SummaryClient;
use crate::utils::calculate_max_scroll;

/// Runs submissions on the tokio runtime and hands results back to the UI loop.
pub struct Dispatcher {
    client: SummaryClient,
    rt: Handle,
    results: UnboundedSender<SummaryOutput>,
}

impl Dispatcher {
    pub fn new(client: SummaryClient, rt: Handle, results: UnboundedSender<SummaryOutput>) -> Self {
        Self { client, rt, results }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Starts one request unless one is already running. Returns whether a request went out.
    pub fn submit(&self, app: &mut App) -> bool {
        let Some(request) = app.begin_submit() else {
            tracing::debug!("submit ignored, request already in flight");
            return false;
        };
        let client = self.client.clone();
        let results = self.results.clone();
        self.rt.spawn(async move {
            let output = client.submit(&request).await;
            if results.send(output).is_err() {
                tracing::warn!("result dropped, UI loop has exited");
            }
        });
        true
    }
}

/// Applies one key press. Returns `false` when the user asked to quit.
pub fn handle_key(key: KeyEvent, app: &mut App, pane: (u16, u16), dispatcher: &Dispatcher) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if ctrl => return false,
        KeyCode::Char('q') if ctrl => return false,
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Enter => {
            dispatcher.submit(app);
        }
        _ => match app.focus {
            FocusArea::Url => edit_url(key, app),
            FocusArea::Language => match key.code {
                KeyCode::Left | KeyCode::Up => app.language = app.language.prev(),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => app.language = app.language.next(),
                _ => {}
            },
            FocusArea::Style => match key.code {
                KeyCode::Left | KeyCode::Up => app.summary_style = app.summary_style.prev(),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    app.summary_style = app.summary_style.next()
                }
                _ => {}
            },
            FocusArea::Submit => {
                if key.code == KeyCode::Char(' ') {
                    dispatcher.submit(app);
                }
            }
            FocusArea::Summary | FocusArea::Answer => handle_output_key(key.code, app, pane),
        },
    }
    true
}

/// Bracketed paste. Only the URL field accepts text.
pub fn handle_paste(text: &str, app: &mut App) {
    if app.focus == FocusArea::Url {
        app.source_url.extend(text.chars().filter(|c| !c.is_control()));
    }
}

fn edit_url(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.source_url.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.source_url.push(c),
        KeyCode::Backspace => {
            app.source_url.pop();
        }
        _ => {}
    }
}

fn handle_output_key(code: KeyCode, app: &mut App, (width, height): (u16, u16)) {
    if code == KeyCode::Char('c') {
        copy_focused_output(app);
        return;
    }
    let (text, scroll) = if app.focus == FocusArea::Summary {
        (&app.summary, &mut app.summary_scroll)
    } else {
        (&app.answer, &mut app.answer_scroll)
    };
    let max = calculate_max_scroll(text, width.saturating_sub(1), height);
    match code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1).min(max),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10).min(max),
        KeyCode::Home => *scroll = 0,
        KeyCode::End => *scroll = max,
        _ => {}
    }
}

fn copy_focused_output(app: &mut App) {
    let Some((name, text)) = app.focused_output() else {
        return;
    };
    if text.is_empty() {
        app.status = Some(format!("Nothing to copy, {} is empty", name));
        return;
    }
    let text = text.to_string();
    let status = match Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
        Ok(()) => format!("Copied {} to clipboard", name),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            format!("Clipboard unavailable: {}", e)
        }
    };
    app.status = Some(status);
}
