use crate::app::App;
use crossterm::event::{KeyCode, KeyModifiers};

pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
    match key {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_active_thread();
        }
        KeyCode::Enter => {
            app.submit_message();
        }
        KeyCode::Tab => app.next_thread(),
        KeyCode::BackTab => app.prev_thread(),
        KeyCode::Char(c) => {
            // Clear status message when typing
            if app.status_message.is_some() {
                app.clear_status_message();
            }
            app.input.insert(c);
        }
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
