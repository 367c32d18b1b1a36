//! Interactive generator panel.
//!
//! Single-threaded event loop over crossterm key events. The poll
//! timeout is bounded by the pending publish deadline, so the cosmetic
//! generating delay is a scheduled wake-up rather than a sleep.

mod input;
mod state;
mod view;

pub use state::{Category, Panel};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clipboard::Clipboard;
use crate::terminal::{RawModeGuard, hide_cursor, reset_terminal, show_cursor};

/// Poll timeout while no publish is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the panel until the user quits.
pub fn run() -> io::Result<()> {
    let mut panel = Panel::new();
    let mut clipboard = Clipboard::new();
    let mut status = String::new();

    let _guard = RawModeGuard::new()?;
    hide_cursor();

    // Initial generation on mount
    panel.request_generate();
    view::draw(&panel, &status);

    loop {
        let timeout = panel.time_until_publish().unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(key, &mut panel, &mut clipboard, &mut status) {
                        break;
                    }
                    view::draw(&panel, &status);
                }
                Event::Resize(..) => view::draw(&panel, &status),
                _ => {}
            }
        }

        if panel.publish_due() {
            panel.publish();
            view::draw(&panel, &status);
        }
    }

    show_cursor();
    reset_terminal();
    print!("\r\n");
    Ok(())
}

/// Dispatch one key press. Returns true when the user quits.
fn handle_key(
    key: KeyEvent,
    panel: &mut Panel,
    clipboard: &mut Clipboard,
    status: &mut String,
) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') | KeyCode::Esc => return true,

        KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => {
            status.clear();
            panel.adjust_length(1);
        }
        KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => {
            status.clear();
            panel.adjust_length(-1);
        }
        KeyCode::PageUp => {
            status.clear();
            panel.adjust_length(10);
        }
        KeyCode::PageDown => {
            status.clear();
            panel.adjust_length(-10);
        }
        KeyCode::Char('n') => {
            status.clear();
            if let Some(n) = input::read_length(panel.length()) {
                panel.set_length(n);
            }
        }

        KeyCode::Char('u') => {
            status.clear();
            panel.toggle(Category::Uppercase);
        }
        KeyCode::Char('l') => {
            status.clear();
            panel.toggle(Category::Lowercase);
        }
        KeyCode::Char('d') => {
            status.clear();
            panel.toggle(Category::Digits);
        }
        KeyCode::Char('s') => {
            status.clear();
            panel.toggle(Category::Symbols);
        }

        // Both actions are disabled while a publish is pending
        KeyCode::Char('g') | KeyCode::Enter => {
            if !panel.is_generating() {
                status.clear();
                panel.request_generate();
            }
        }
        KeyCode::Char('c') => {
            if panel.can_copy()
                && let Some(text) = panel.result()
            {
                *status = clipboard.copy(text);
            }
        }

        _ => {}
    }
    false
}
