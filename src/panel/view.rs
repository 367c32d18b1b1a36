//! Panel rendering.

use crate::terminal::{
    BOX_WIDTH, DIM, RESET, box_bottom, box_line, box_line_center, box_rule, box_top, clear, flush,
};

use super::state::Panel;

/// Redraw the whole panel. Called after every state change; the layout
/// is small enough that a full repaint is cheaper than tracking dirt.
pub fn draw(panel: &Panel, status: &str) {
    let categories = panel.categories();

    clear();
    box_top("Random String Generator");
    box_line("");
    box_line(&format!(
        "Length: {:>3}  {DIM}Up/Down 1, PgUp/PgDn 10, n exact{RESET}",
        panel.length()
    ));
    box_line("");
    box_line("Character types:");
    box_line(&checkbox('u', "Uppercase (A-Z)", categories.uppercase));
    box_line(&checkbox('l', "Lowercase (a-z)", categories.lowercase));
    box_line(&checkbox('d', "Digits    (0-9)", categories.digits));
    box_line(&checkbox('s', "Symbols   (!@#$...)", categories.symbols));
    box_line("");

    box_rule();
    if panel.is_generating() {
        box_line_center("Generating...");
    } else if let Some(result) = panel.result() {
        // Results are ASCII; wrap at the box inner width
        for chunk in result.as_bytes().chunks(BOX_WIDTH - 4) {
            box_line(std::str::from_utf8(chunk).unwrap_or(""));
        }
    } else {
        box_line_center("-");
    }
    box_rule();

    let chars = panel.result().map_or(0, str::len);
    box_line(&format!(
        "{} chars   generated this session: {}",
        chars,
        panel.count()
    ));
    box_line(&format!(
        "{DIM}g/Enter generate   c copy   q quit{RESET}"
    ));
    box_bottom();

    print!("\r\n {status}\r\n");
    flush();
}

fn checkbox(key: char, label: &str, on: bool) -> String {
    let mark = if on { 'x' } else { ' ' };
    format!("  [{mark}] {key}) {label}")
}
