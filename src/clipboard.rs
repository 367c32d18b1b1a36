//! System clipboard output.
//!
//! The only reachable failure in the whole panel lives here: a denied
//! or failed clipboard write. It is logged to stderr and reported as a
//! status string, never propagated, and never touches panel state.

use copypasta::{ClipboardContext, ClipboardProvider};

use crate::terminal::print_error;

/// Lazily-created clipboard handle, reused across copies.
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    /// Copy `text` to the system clipboard. Returns a status message
    /// for the panel footer.
    pub fn copy(&mut self, text: &str) -> String {
        if self.ctx.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    print_error(&format!("Clipboard unavailable: {e}"));
                    return "clipboard unavailable".to_string();
                }
            }
        }

        // ctx is Some here; creation failure returned above
        let Some(ctx) = self.ctx.as_mut() else {
            return "clipboard unavailable".to_string();
        };

        match ctx.set_contents(text.to_string()) {
            Ok(()) => "copied to clipboard".to_string(),
            Err(e) => {
                print_error(&format!("Clipboard error: {e}"));
                "clipboard write failed".to_string()
            }
        }
    }
}
