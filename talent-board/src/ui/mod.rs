pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Talents => talents_screen::render(f, &state.talents),
        Screen::Logs(logs_state) => logs_screen::render(f, logs_state, log_buffer),
    }

    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }

    // Notice sits above everything, including help
    if let Some(message) = &state.notice {
        components::notice::render_notice(f, message);
    }
}
