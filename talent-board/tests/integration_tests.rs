use talent_api::endpoints::Skill;
use talent_board::events::DataEvent;
use talent_board::input::{Key, KeyEvent};
use talent_board::state::{validators, DraftField, InputMode, LoadingState, SkillFilter};
use talent_board::testing::{fixtures::profile, TestApp};
use talent_board::ui::screens::Screen;

fn sample_app() -> TestApp {
    TestApp::loaded(vec![
        profile("t_001", "Amara Okoye", Skill::Frontend, 4),
        profile("t_002", "Bola Adeyemi", Skill::Backend, 7),
        profile("t_003", "Chinedu Umeh", Skill::Fullstack, 2),
    ])
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();

    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_list_is_sorted_by_experience() {
    let app = sample_app();

    // Years 4, 7, 2 are listed as 2, 4, 7
    assert_eq!(
        app.visible_names(),
        vec!["Chinedu Umeh", "Amara Okoye", "Bola Adeyemi"]
    );
    // The loaded list keeps server order
    assert_eq!(app.state().talents.talents[0].name, "Amara Okoye");
}

#[test]
fn test_skill_filter_cycles_through_skills() {
    let mut app = sample_app();
    assert_eq!(app.state().talents.skill_filter, SkillFilter::All);

    app.send_key(Key::Char('s'));
    assert_eq!(app.visible_names(), vec!["Amara Okoye"]);

    app.send_key(Key::Char('s'));
    assert_eq!(
        app.state().talents.skill_filter,
        SkillFilter::Only(Skill::Backend)
    );
    assert_eq!(app.visible_names(), vec!["Bola Adeyemi"]);

    app.send_key(Key::Char('S'));
    assert_eq!(
        app.state().talents.skill_filter,
        SkillFilter::Only(Skill::Frontend)
    );

    app.send_keys(&[Key::Char('s'), Key::Char('s'), Key::Char('s')]);
    assert_eq!(app.state().talents.skill_filter, SkillFilter::All);
    assert_eq!(app.visible_names().len(), 3);
}

#[test]
fn test_search_is_case_insensitive_and_keeps_commands_as_text() {
    let mut app = sample_app();

    app.send_key(Key::Char('/'));
    assert_eq!(app.state().talents.input_mode, InputMode::Search);

    // 'q' is typed, not quit
    app.type_text("Q");
    app.assert_not_quit();
    assert!(app.visible_names().is_empty());

    app.send_key(Key::Backspace);
    app.type_text("OKO");
    assert_eq!(app.visible_names(), vec!["Amara Okoye"]);

    // Enter keeps the query
    app.send_key(Key::Enter);
    assert_eq!(app.state().talents.input_mode, InputMode::Normal);
    assert_eq!(app.state().talents.search_query, "OKO");
    assert_eq!(app.visible_names(), vec!["Amara Okoye"]);

    // Esc in normal mode clears it
    app.send_key(Key::Esc);
    assert!(app.state().talents.search_query.is_empty());
    assert_eq!(app.visible_names().len(), 3);
}

#[test]
fn test_search_and_filter_combine() {
    let mut app = sample_app();

    app.send_key(Key::Char('/'));
    app.type_text("a");
    app.send_key(Key::Enter);
    assert_eq!(app.visible_names(), vec!["Amara Okoye", "Bola Adeyemi"]);

    app.send_keys(&[Key::Char('s'), Key::Char('s')]);
    assert_eq!(app.visible_names(), vec!["Bola Adeyemi"]);
}

#[test]
fn test_invalid_application_shows_both_errors() {
    let mut app = sample_app();

    app.send_key(Key::Char('a'));
    assert_eq!(app.state().talents.input_mode, InputMode::ApplicationForm);

    app.send_key(Key::Tab);
    app.type_text("not-an-email");
    app.send_key(Key::Enter);

    let form = &app.state().talents.application;
    assert_eq!(form.errors.len(), 2);
    assert_eq!(
        form.errors.get(DraftField::Name),
        Some(validators::NAME_REQUIRED)
    );
    assert_eq!(
        form.errors.get(DraftField::Email),
        Some(validators::INVALID_EMAIL)
    );
    assert_eq!(form.draft.email, "not-an-email");
    assert!(app.state().notice.is_none());

    let screen = app.render_to_string(120, 40);
    assert!(screen.contains("Name is required"));
    assert!(screen.contains("Enter a valid email address"));
}

#[test]
fn test_valid_application_clears_form_and_confirms() {
    let mut app = sample_app();

    app.send_key(Key::Char('a'));
    app.type_text("Ada Lovelace");
    app.send_key(Key::Down);
    app.type_text("ada@example.com");
    app.send_key(Key::Down);
    app.send_key(Key::Right);
    assert_eq!(
        app.state().talents.application.draft.desired_skill,
        Skill::Backend
    );

    app.send_key(Key::Enter);

    let form = &app.state().talents.application;
    assert!(form.errors.is_empty());
    assert!(form.draft.name.is_empty());
    assert!(form.draft.email.is_empty());
    assert_eq!(app.state().talents.input_mode, InputMode::Normal);
    assert!(app.state().notice.is_some());
    assert!(app.render_to_string(120, 40).contains("Application submitted!"));

    // The notice swallows other keys until dismissed
    app.send_key(Key::Char('q'));
    app.assert_not_quit();
    app.send_key(Key::Enter);
    assert!(app.state().notice.is_none());
}

#[test]
fn test_leaving_the_form_keeps_the_draft() {
    let mut app = sample_app();

    app.send_key(Key::Tab);
    app.type_text("Ada");
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('u')));
    app.type_text("Grace");
    app.send_key(Key::Esc);

    assert_eq!(app.state().talents.input_mode, InputMode::Normal);
    assert_eq!(app.state().talents.application.draft.name, "Grace");

    // Back in normal mode, 'j' moves the selection again
    app.send_key(Key::Char('j'));
    assert_eq!(
        app.state().talents.selected_talent().map(|t| t.name.as_str()),
        Some("Amara Okoye")
    );
}

#[test]
fn test_loading_then_error_state() {
    let mut app = TestApp::new();
    let request_id = app.begin_load();

    assert!(app.render_to_string(120, 40).contains("Loading talents..."));

    app.send_data_event(DataEvent::LoadError {
        request_id,
        error: "(503 Service Unavailable) upstream down".to_string(),
    });

    let screen = app.render_to_string(120, 40);
    assert!(screen.contains("Failed to load talents"));
    // Only the generic message reaches the screen
    assert!(!screen.contains("upstream down"));
}

#[test]
fn test_refresh_ignores_results_of_superseded_load() {
    let mut app = sample_app();

    let older = app.state().talents.request_id;
    app.send_key(Key::Char('r'));
    let newer = app.state().talents.request_id;
    assert_ne!(older, newer);

    app.send_data_event(DataEvent::TalentsLoaded {
        request_id: older,
        talents: vec![profile("t_009", "Late Arrival", Skill::Backend, 1)],
    });
    assert!(matches!(
        app.state().talents.talents_loading,
        LoadingState::Loading(_)
    ));
    assert_eq!(app.visible_names().len(), 3);

    app.send_data_event(DataEvent::TalentsLoaded {
        request_id: newer,
        talents: vec![profile("t_010", "Fresh Result", Skill::Backend, 1)],
    });
    assert_eq!(app.visible_names(), vec!["Fresh Result"]);
}

#[test]
fn test_bio_markup_never_reaches_the_screen() {
    let mut talent = profile("t_001", "Amara Okoye", Skill::Frontend, 4);
    talent.bio = "<script>x</script><b>Design</b> systems &amp; a11y".to_string();
    let app = TestApp::loaded(vec![talent]);

    let screen = app.render_to_string(120, 40);
    assert!(screen.contains("Design systems & a11y"));
    assert!(!screen.contains("<b>"));
    assert!(!screen.contains("<script>"));
}

#[test]
fn test_logs_screen_navigation() {
    let mut app = sample_app();

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.assert_screen_type(std::mem::discriminant(&Screen::Logs(Default::default())));
    assert_eq!(app.state().pending_key, None);
    assert!(app.render_to_string(120, 40).contains("Session log"));

    app.send_key(Key::Char('h'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Talents));
    assert_eq!(app.visible_names().len(), 3);
}

#[test]
fn test_gg_and_g_move_to_ends_of_list() {
    let mut app = sample_app();

    app.send_key(Key::Char('G'));
    assert_eq!(
        app.state().talents.selected_talent().map(|t| t.name.as_str()),
        Some("Bola Adeyemi")
    );

    app.send_keys(&[Key::Char('g'), Key::Char('g')]);
    assert_eq!(
        app.state().talents.selected_talent().map(|t| t.name.as_str()),
        Some("Chinedu Umeh")
    );
}
