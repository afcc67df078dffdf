use talent_api::endpoints::talents::Profile;

/// Commands to execute (user actions → state updates or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,
    NavigateToLogs,

    // Data loading
    LoadTalents,

    // Search mode (name substring)
    EnterSearchMode,
    ExitSearchMode,
    AppendSearchChar(char),
    DeleteSearchChar,
    ClearSearch,

    // Skill filter
    CycleSkillFilter {
        forward: bool,
    },

    // Application form
    EnterApplicationMode,
    ExitApplicationMode,
    NavigateFormField {
        forward: bool,
    },
    AppendFormFieldChar {
        c: char,
    },
    DeleteFormFieldChar,
    ClearFormField,
    CycleDesiredSkill {
        forward: bool,
    },
    SubmitApplication,
    DismissNotice,

    // Log screen
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    ToggleHelp,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
///
/// Every event carries the id of the load that produced it so the reducer
/// can drop results from loads that have since been superseded.
#[derive(Debug, Clone)]
pub enum DataEvent {
    TalentsLoaded {
        request_id: u64,
        talents: Vec<Profile>,
    },

    LoadError {
        request_id: u64,
        error: String,
    },
}
