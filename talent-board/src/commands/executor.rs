use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;

const LOAD_TALENTS_TASK: &str = "load_talents";
const LOGS_PAGE_SIZE: usize = 20;

pub const SUBMITTED_NOTICE: &str = "Application submitted! (g then l to view the log)";

/// Execute a command, spawning background tasks for commands that need the network
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    match command {
        AppCommand::LoadTalents => {
            let request_id = state.talents.begin_load();

            let data_loader = data_loader.clone();
            let future = async move {
                data_loader.load_talents(request_id).await;
            };

            // Replaces (and aborts) any load still in flight
            task_manager.spawn_load_task(LOAD_TALENTS_TASK.to_string(), future);
            state.pending_key = None;
        }
        command => execute_command_sync(command, state),
    }
}

/// Apply a command to state without side effects.
///
/// `LoadTalents` only marks a load as in flight here; tests inject the
/// matching `DataEvent` themselves.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    match command {
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,

        AppCommand::LoadTalents => {
            state.talents.begin_load();
        }

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::NavigateToLogs => {
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
        }
        AppCommand::NavigateToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            } else {
                state.talents.select_first();
            }
        }
        AppCommand::NavigateToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            } else {
                state.talents.select_last();
            }
        }
        AppCommand::SelectNext => {
            if let Screen::Talents = state.current_screen() {
                state.talents.select_next();
            }
        }
        AppCommand::SelectPrevious => {
            if let Screen::Talents = state.current_screen() {
                state.talents.select_prev();
            }
        }

        // Search
        AppCommand::EnterSearchMode => state.talents.input_mode = InputMode::Search,
        AppCommand::ExitSearchMode => {
            // Query stays applied
            state.talents.input_mode = InputMode::Normal;
        }
        AppCommand::AppendSearchChar(c) => {
            state.talents.search_query.push(c);
            state.talents.reset_selection();
        }
        AppCommand::DeleteSearchChar => {
            state.talents.search_query.pop();
            state.talents.reset_selection();
        }
        AppCommand::ClearSearch => {
            state.talents.search_query.clear();
            state.talents.input_mode = InputMode::Normal;
            state.talents.reset_selection();
        }

        AppCommand::CycleSkillFilter { forward } => {
            let filter = &mut state.talents.skill_filter;
            *filter = if forward {
                filter.next()
            } else {
                filter.previous()
            };
            tracing::debug!("Skill filter set to {}", filter.display_name());
            state.talents.reset_selection();
        }

        // Application form
        AppCommand::EnterApplicationMode => {
            state.talents.input_mode = InputMode::ApplicationForm;
        }
        AppCommand::ExitApplicationMode => {
            // Draft is kept so the user can come back to it
            state.talents.input_mode = InputMode::Normal;
        }
        AppCommand::NavigateFormField { forward } => {
            let form = &mut state.talents.application;
            form.focused_field = if forward {
                form.focused_field.next()
            } else {
                form.focused_field.previous()
            };
        }
        AppCommand::AppendFormFieldChar { c } => {
            let form = &mut state.talents.application;
            if let Some(value) = form.draft.text_field_mut(form.focused_field) {
                value.push(c);
            }
        }
        AppCommand::DeleteFormFieldChar => {
            let form = &mut state.talents.application;
            if let Some(value) = form.draft.text_field_mut(form.focused_field) {
                value.pop();
            }
        }
        AppCommand::ClearFormField => {
            let form = &mut state.talents.application;
            if let Some(value) = form.draft.text_field_mut(form.focused_field) {
                value.clear();
            }
        }
        AppCommand::CycleDesiredSkill { forward } => {
            let skill = &mut state.talents.application.draft.desired_skill;
            *skill = if forward {
                skill.next()
            } else {
                skill.previous()
            };
        }
        AppCommand::SubmitApplication => submit_application(state),
        AppCommand::DismissNotice => state.notice = None,

        // Logs
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Up goes back in time
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOGS_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOGS_PAGE_SIZE);
            }
        }
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }
}

/// Validate the draft; on success log it, reset the form and show a notice.
/// On failure only the error map changes.
fn submit_application(state: &mut AppState) {
    let form = &mut state.talents.application;
    form.errors = validators::validate_application(&form.draft.name, &form.draft.email);

    if !form.errors.is_empty() {
        tracing::debug!(
            "Application rejected with {} field error(s)",
            form.errors.len()
        );
        return;
    }

    let draft = std::mem::take(&mut form.draft);
    form.focused_field = DraftField::default();
    tracing::info!(
        name = %validators::trim_blank(&draft.name),
        email = %draft.email,
        desired_skill = %draft.desired_skill,
        "Application submitted"
    );

    state.talents.input_mode = InputMode::Normal;
    state.notice = Some(SUBMITTED_NOTICE.to_string());
}
