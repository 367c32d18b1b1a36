//! Terminal plumbing.
//!
//! ANSI helpers, box drawing, and raw mode management. The panel
//! redraws while raw mode is active, so every line helper ends with an
//! explicit \r\n.

use std::io::{self, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

pub fn show_cursor() {
    print!("\x1b[?25h");
    flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Print an error message in red to stderr.
pub fn print_error(msg: &str) {
    eprint!("{RED}{msg}{RESET}\r\n");
    let _ = io::stderr().flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Box top with optional title: ┌─ Title ───────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let head = format!("─ {title} ");
        let remaining = BOX_WIDTH - 2 - head.chars().count();
        print!("┌{}{}┐\r\n", head, "─".repeat(remaining));
    }
}

/// Horizontal rule inside the box: ├───────────────────┤
pub fn box_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Box content line, left-aligned and padded to the box width.
pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let padding = inner.saturating_sub(console_width(content));
    print!("│ {}{} │\r\n", content, " ".repeat(padding));
}

/// Box content line, centered.
pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let padding = inner.saturating_sub(console_width(content));
    let left = padding / 2;
    print!(
        "│ {}{}{} │\r\n",
        " ".repeat(left),
        content,
        " ".repeat(padding - left)
    );
}

pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Raw Mode Guard (RAII pattern)
// ============================================================================

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { was_enabled: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
