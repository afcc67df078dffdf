use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Notice popup swallows everything until dismissed
    if state.notice.is_some() {
        return match key {
            Key::Enter | Key::Esc => Some(AppCommand::DismissNotice),
            _ => None,
        };
    }

    // Priority 1: Text entry modes on the talents screen
    if let Screen::Talents = state.current_screen() {
        match state.talents.input_mode {
            InputMode::ApplicationForm => {
                return handle_application_form_keys(event, &state.talents.application);
            }
            InputMode::Search => {
                return match key {
                    Key::Enter => Some(AppCommand::ExitSearchMode),
                    Key::Backspace => Some(AppCommand::DeleteSearchChar),
                    Key::Esc => Some(AppCommand::ClearSearch),
                    _ => event.typed_char().map(AppCommand::AppendSearchChar),
                };
            }
            InputMode::Normal => {}
        }
    }

    // Priority 2: Help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 3: Esc clears an active search (when not in search mode)
    if let Screen::Talents = state.current_screen() {
        if matches!(key, Key::Esc) {
            return Some(AppCommand::ClearSearch);
        }
    }

    // Multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Talents screen
        (Screen::Talents, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Talents, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Talents, Key::Char('/')) => Some(AppCommand::EnterSearchMode),
        (Screen::Talents, Key::Char('s')) => Some(AppCommand::CycleSkillFilter { forward: true }),
        (Screen::Talents, Key::Char('S')) => Some(AppCommand::CycleSkillFilter { forward: false }),
        (Screen::Talents, Key::Char('a') | Key::Tab) => Some(AppCommand::EnterApplicationMode),
        (Screen::Talents, Key::Char('r')) => Some(AppCommand::LoadTalents),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        _ => None,
    }
}

fn handle_application_form_keys(
    event: KeyEvent,
    form: &ApplicationFormState,
) -> Option<AppCommand> {
    let on_skill = !form.focused_field.is_text();

    match event.key {
        Key::Esc => Some(AppCommand::ExitApplicationMode),
        Key::Enter => Some(AppCommand::SubmitApplication),
        Key::Tab | Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearFormField),
        Key::Left if on_skill => Some(AppCommand::CycleDesiredSkill { forward: false }),
        Key::Right | Key::Char(' ') if on_skill => {
            Some(AppCommand::CycleDesiredSkill { forward: true })
        }
        _ if on_skill => None,
        _ => event
            .typed_char()
            .map(|c| AppCommand::AppendFormFieldChar { c }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_state(field: DraftField) -> AppState {
        let mut state = AppState::new();
        state.talents.input_mode = InputMode::ApplicationForm;
        state.talents.application.focused_field = field;
        state
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    #[test]
    fn normal_mode_bindings() {
        let state = AppState::new();
        assert_eq!(press(&state, Key::Char('/')), Some(AppCommand::EnterSearchMode));
        assert_eq!(
            press(&state, Key::Char('s')),
            Some(AppCommand::CycleSkillFilter { forward: true })
        );
        assert_eq!(
            press(&state, Key::Char('S')),
            Some(AppCommand::CycleSkillFilter { forward: false })
        );
        assert_eq!(press(&state, Key::Char('a')), Some(AppCommand::EnterApplicationMode));
        assert_eq!(press(&state, Key::Tab), Some(AppCommand::EnterApplicationMode));
        assert_eq!(press(&state, Key::Char('r')), Some(AppCommand::LoadTalents));
        assert_eq!(press(&state, Key::Char('j')), Some(AppCommand::SelectNext));
        assert_eq!(press(&state, Key::Up), Some(AppCommand::SelectPrevious));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ClearSearch));
        assert_eq!(press(&state, Key::Other), None);
    }

    #[test]
    fn search_mode_types_every_printable_character() {
        let mut state = AppState::new();
        state.talents.input_mode = InputMode::Search;

        // Keys that are commands in normal mode are plain text here
        for c in ['q', 's', 'r', '/', 'g', ' '] {
            assert_eq!(
                press(&state, Key::Char(c)),
                Some(AppCommand::AppendSearchChar(c))
            );
        }
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::ExitSearchMode));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ClearSearch));
        assert_eq!(press(&state, Key::Backspace), Some(AppCommand::DeleteSearchChar));
        assert_eq!(press(&state, Key::Other), None);
    }

    #[test]
    fn form_text_fields_accept_characters() {
        let state = form_state(DraftField::Name);
        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::AppendFormFieldChar { c: 'q' })
        );
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::SubmitApplication));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ExitApplicationMode));
        assert_eq!(
            press(&state, Key::Tab),
            Some(AppCommand::NavigateFormField { forward: true })
        );
        assert_eq!(
            press(&state, Key::BackTab),
            Some(AppCommand::NavigateFormField { forward: false })
        );
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('u')), &state),
            Some(AppCommand::ClearFormField)
        );
    }

    #[test]
    fn form_skill_field_cycles_instead_of_typing() {
        let state = form_state(DraftField::DesiredSkill);
        assert_eq!(
            press(&state, Key::Right),
            Some(AppCommand::CycleDesiredSkill { forward: true })
        );
        assert_eq!(
            press(&state, Key::Char(' ')),
            Some(AppCommand::CycleDesiredSkill { forward: true })
        );
        assert_eq!(
            press(&state, Key::Left),
            Some(AppCommand::CycleDesiredSkill { forward: false })
        );
        assert_eq!(press(&state, Key::Char('x')), None);
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::SubmitApplication));
    }

    #[test]
    fn notice_popup_blocks_other_keys() {
        let mut state = AppState::new();
        state.notice = Some("Application submitted!".to_string());

        assert_eq!(press(&state, Key::Char('q')), None);
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::DismissNotice));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::DismissNotice));
    }

    #[test]
    fn pending_g_sequences() {
        let mut state = AppState::new();
        state.pending_key = Some('g');

        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::NavigateToTop));
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(press(&state, Key::Char('x')), Some(AppCommand::ClearPendingKey));
    }

    #[test]
    fn logs_screen_scroll_keys() {
        let mut state = AppState::new();
        state.navigate_to(Screen::Logs(LogsState::default()));

        assert_eq!(press(&state, Key::Char('k')), Some(AppCommand::ScrollLogsUp));
        assert_eq!(press(&state, Key::Down), Some(AppCommand::ScrollLogsDown));
        assert_eq!(press(&state, Key::PageUp), Some(AppCommand::ScrollLogsPageUp));
        assert_eq!(press(&state, Key::Char('h')), Some(AppCommand::NavigateBack));
        // Talents-only bindings do nothing here
        assert_eq!(press(&state, Key::Char('s')), None);
    }
}
