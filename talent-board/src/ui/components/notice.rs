use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme};

/// Render a dismissable message popup (e.g. submission confirmation)
pub fn render_notice(f: &mut Frame, message: &str) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Notice ",
        theme::info_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(2),    // Message
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let text = Paragraph::new(message)
        .style(
            Style::default()
                .fg(theme::COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(theme::COLOR_HELP_TEXT)),
        Span::raw(" / "),
        Span::styled("[Esc]", Style::default().fg(theme::COLOR_HELP_TEXT)),
        Span::raw(" Close"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}
