pub mod reducer;
pub mod validators;
pub mod view_model;

use crate::ui::screens::Screen;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use talent_api::endpoints::{talents::Profile, Skill};
use throbber_widgets_tui::ThrobberState;

pub use validators::ValidationErrors;
pub use view_model::SkillFilter;

/// Shown instead of the talent list when a load fails. The detailed error is
/// only logged.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load talents";

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Input mode of the talents screen
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    ApplicationForm,
}

/// Field of the application form
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    #[default]
    Name,
    Email,
    DesiredSkill,
}

impl DraftField {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::DesiredSkill,
            Self::DesiredSkill => Self::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::DesiredSkill,
            Self::Email => Self::Name,
            Self::DesiredSkill => Self::Email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email address",
            Self::DesiredSkill => "Skill",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, Self::DesiredSkill)
    }
}

/// In-progress application. Only ever logged, never sent anywhere.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub desired_skill: Skill,
}

impl ApplicationDraft {
    pub fn text_field_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Name => Some(&mut self.name),
            DraftField::Email => Some(&mut self.email),
            DraftField::DesiredSkill => None,
        }
    }
}

/// State for the application form pane
#[derive(Default, Debug, Clone)]
pub struct ApplicationFormState {
    pub draft: ApplicationDraft,
    pub focused_field: DraftField,
    pub errors: ValidationErrors,
}

#[derive(Default, Debug, Clone)]
pub struct TalentsState {
    /// Loaded profiles in the order the server returned them
    pub talents: Vec<Profile>,
    pub talents_loading: LoadingState,
    /// Id of the most recently issued load; results from older loads are dropped
    pub request_id: u64,
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
    pub search_query: String,
    pub skill_filter: SkillFilter,
    pub application: ApplicationFormState,
}

impl TalentsState {
    /// Mark a new load as in flight and return its id
    pub fn begin_load(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.talents_loading = LoadingState::Loading(ThrobberState::default());
        tracing::debug!("Issued talents load {}", self.request_id);
        self.request_id
    }

    pub fn is_current_request(&self, request_id: u64) -> bool {
        self.request_id == request_id
    }

    /// Talents after skill filter, name search and experience sort
    pub fn visible_talents(&self) -> Vec<&Profile> {
        view_model::visible_talents(&self.talents, &self.search_query, self.skill_filter)
    }

    pub fn selected_talent(&self) -> Option<&Profile> {
        let selected = self.table_state.borrow().selected()?;
        self.visible_talents().get(selected).copied()
    }

    /// Selection goes back to the first row whenever the visible set changes
    pub fn reset_selection(&mut self) {
        self.table_state = RefCell::new(TableState::default().with_selected(0));
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub talents: TalentsState,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,
    /// Confirmation popup text
    pub notice: Option<String>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Talents],
            talents: TalentsState::default(),
            help_visible: false,
            pending_key: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.talents.talents_loading {
            LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    /// Wraps from the first row to the last
    fn select_prev(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            let prev = match table_state.selected() {
                Some(i) if i > 0 && i < num_items => i - 1,
                _ => num_items - 1,
            };
            table_state.select(Some(prev));
        }
    }

    /// Wraps from the last row to the first
    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            let next = match table_state.selected() {
                Some(i) if i + 1 < num_items => i + 1,
                _ => 0,
            };
            table_state.select(Some(next));
        }
    }

    fn select_first(&mut self) {
        if self.num_items() > 0 {
            self.table_state().borrow_mut().select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let num_items = self.num_items();
        if num_items > 0 {
            self.table_state().borrow_mut().select(Some(num_items - 1));
        }
    }
}

impl Scrollable for TalentsState {
    fn num_items(&self) -> usize {
        self.visible_talents().len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
