//! Shared placeholder states for a pane with nothing to list.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Render an empty state message with consistent styling.
///
/// Used when a list/table has no data to display.
///
/// # Arguments
/// * `title` - The block title (e.g., "Talents", "Session Logs")
/// * `message` - The message to display (e.g., "No talents found")
/// * `hint` - Optional hint text below the message
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::loading_style())),
    ];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_text,
            theme::help_text_style(),
        )));
    }

    render_centered(f, area, title, lines);
}

/// Render a loading state message with consistent styling.
///
/// Used when data is being loaded and nothing has been loaded before.
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::loading_style())),
    ];

    render_centered(f, area, title, lines);
}

/// Render a failure message in place of the pane's content
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, message: &str, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::error_style())),
        Line::from(""),
        Line::from(Span::styled(hint, theme::help_text_style())),
    ];

    render_centered(f, area, title, lines);
}

fn render_centered(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
