//! Inline numeric entry for the length control.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{flush, hide_cursor, reset_terminal, show_cursor};

use super::state::{MAX_LENGTH, MIN_LENGTH};

/// Prompt for an exact length on the line below the panel. Digits
/// only, Enter accepts, Esc cancels. The accepted value is clamped to
/// the length bounds; returns None on cancel or empty input.
///
/// Runs inside the panel's raw mode session, so no guard of its own.
pub fn read_length(initial: usize) -> Option<usize> {
    let prompt = format!("New length ({MIN_LENGTH}-{MAX_LENGTH})");
    let mut digits = initial.to_string();

    show_cursor();
    redraw(&prompt, &digits);

    let accepted = loop {
        let Ok(event) = read() else { break false };
        let Event::Key(key) = event else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Reset terminal BEFORE exit since process::exit doesn't run destructors
                reset_terminal();
                print!("\r\n");
                flush();
                std::process::exit(0);
            }
            KeyCode::Esc => break false,
            KeyCode::Enter => break true,
            KeyCode::Backspace => {
                digits.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                digits.clear();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 3 => {
                digits.push(c);
            }
            _ => {}
        }

        redraw(&prompt, &digits);
    };

    hide_cursor();

    if !accepted || digits.is_empty() {
        return None;
    }
    digits
        .parse::<usize>()
        .ok()
        .map(|n| n.clamp(MIN_LENGTH, MAX_LENGTH))
}

fn redraw(prompt: &str, digits: &str) {
    print!("\r\x1b[2K {prompt}: {digits}");
    flush();
}
