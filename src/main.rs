mod clipboard;
mod exits;
mod r#gen;
mod panel;
mod terminal;

fn main() {
    exits::install_handlers();

    if let Err(e) = panel::run() {
        terminal::reset_terminal();
        terminal::print_error(&format!("Terminal error: {e}"));
        std::process::exit(1);
    }
}
