use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{InputMode, LoadingState, TalentsState};
use crate::ui::{
    components::{
        application_form, empty_state, help_bar, screen_title, search_input, talent_detail,
    },
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &TalentsState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());
    let (form_area, browser_area) = layouts::with_sidebar(content_area, theme::FORM_PANE_WIDTH);

    screen_title::render_screen_title(f, title_area, "Talent Board", &state.talents_loading);
    application_form::render_application_form(
        f,
        form_area,
        &state.application,
        state.input_mode == InputMode::ApplicationForm,
    );
    render_browser(f, browser_area, state);

    let help_text = match state.input_mode {
        InputMode::Normal => help_bar::HELP_TEXT_BROWSE,
        InputMode::Search => help_bar::HELP_TEXT_SEARCH,
        InputMode::ApplicationForm => help_bar::HELP_TEXT_FORM,
    };
    help_bar::render_help_bar(f, help_area, help_text);
}

fn render_browser(f: &mut Frame, area: Rect, state: &TalentsState) {
    // A failed load replaces the whole browser with the generic message
    if let LoadingState::Error(message) = &state.talents_loading {
        empty_state::render_error_state(f, area, "Talents", message, "Press r to try again");
        return;
    }

    // Only show the loading message when there is nothing to show yet
    if matches!(state.talents_loading, LoadingState::Loading(..)) && state.talents.is_empty() {
        empty_state::render_loading_state(f, area, "Talents", "Loading talents...");
        return;
    }

    let (search_area, list_area, detail_area) = layouts::browser_layout(area);
    search_input::render_search_input(
        f,
        search_area,
        &state.search_query,
        state.input_mode == InputMode::Search,
    );
    render_list(f, list_area, state);
    talent_detail::render_talent_detail(f, detail_area, state.selected_talent());
}

fn render_list(f: &mut Frame, area: Rect, state: &TalentsState) {
    let visible = state.visible_talents();

    let title = format!(
        "Talents [{}] ({} of {})",
        state.skill_filter.display_name(),
        visible.len(),
        state.talents.len()
    );

    if visible.is_empty() {
        let message = if state.talents.is_empty() {
            "No talents found"
        } else {
            "No matching talents"
        };
        empty_state::render_empty_state(f, area, &title, message, Some("Esc: clear search"));
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Experience"),
        Cell::from("Location"),
        Cell::from(Text::from("Rate").right_aligned()),
        Cell::from("Rating"),
        Cell::from(""),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = visible
        .iter()
        .map(|talent| {
            Row::new(vec![
                Cell::from(talent.display_name.as_str()),
                Cell::from(utils::format_experience(talent)),
                Cell::from(talent.location.as_str()),
                Cell::from(Text::from(utils::format_rate(talent.rate_usd_per_hour)).right_aligned()),
                Cell::from(utils::fmt_rating(talent.rating)),
                Cell::from(utils::fmt_verified(talent.verified)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(24),
            Constraint::Percentage(22),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(1),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}
