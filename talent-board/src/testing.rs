use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use crate::ui::screens::Screen;
use ratatui::{backend::TestBackend, Terminal};
use talent_api::endpoints::talents::Profile;

/// Mock data event handler for tests (no real async tasks)
///
/// This handler executes commands synchronously using execute_command_sync,
/// which updates state without spawning background tasks or making API calls.
pub struct MockDataHandler;

impl MockDataHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockDataHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Start a load the way the terminal app does at start-up and answer it
    /// with `talents`
    pub fn loaded(talents: Vec<Profile>) -> Self {
        let mut app = Self::new();
        let request_id = app.begin_load();
        app.send_data_event(DataEvent::TalentsLoaded {
            request_id,
            talents: crate::background::data_loader::prepare_talents(talents),
        });
        app
    }

    /// Issue a load and return its request id so a response can be injected
    pub fn begin_load(&mut self) -> u64 {
        self.core.dispatch(AppCommand::LoadTalents);
        self.state().talents.request_id
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Display names in the order they are listed
    pub fn visible_names(&self) -> Vec<String> {
        self.state()
            .talents
            .visible_talents()
            .iter()
            .map(|t| t.display_name.clone())
            .collect()
    }

    /// Render the current state into an off-screen buffer and return its text
    pub fn render_to_string(&self, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        let log_buffer = LogBuffer::new(10);

        terminal
            .draw(|f| crate::ui::render_app(f, self.state(), &log_buffer))
            .expect("test backend never fails");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile builders for tests
pub mod fixtures {
    use chrono::{TimeZone, Utc};
    use talent_api::endpoints::{talents::Profile, Skill, TalentId, YearsExperience};

    /// A complete profile with the fields tests care about set and plausible
    /// values everywhere else
    pub fn profile(id: &str, name: &str, skill: Skill, years: u32) -> Profile {
        Profile {
            id: TalentId::new(id),
            name: name.to_string(),
            display_name: name.to_string(),
            location: "Lagos, NG".to_string(),
            timezone: "Africa/Lagos".to_string(),
            primary_skill: skill,
            skills: vec!["TypeScript".to_string()],
            years_experience: YearsExperience::from(years),
            availability_hrs_per_week: 30,
            rate_usd_per_hour: 20.0,
            rating: 4.5,
            verified: true,
            last_active: Utc
                .with_ymd_and_hms(2025, 9, 12, 10, 15, 0)
                .single()
                .unwrap_or_default(),
            bio: String::new(),
            tags: Vec::new(),
        }
    }
}
