pub mod logs_screen;
pub mod talents_screen;

use crate::state::LogsState;

/// Entry in the navigation history. Talent data lives in `AppState` itself,
/// so only per-screen view state is carried here.
#[derive(Debug, Clone)]
pub enum Screen {
    Talents,
    Logs(LogsState),
}
