//! Name search box above the talent list.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the search box. While `active`, a cursor is shown and the border
/// is highlighted.
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool) {
    let (title, border_style) = if active {
        (
            "Search by name (Enter: keep, Esc: clear)",
            theme::focused_border_style(),
        )
    } else {
        ("Search (/)", theme::help_text_style())
    };

    let line = if query.is_empty() && !active {
        Line::from(Span::styled("Type / to search", theme::help_text_style()))
    } else {
        let mut spans = vec![Span::styled(query, theme::loading_style())];
        if active {
            spans.push(Span::styled("▏", theme::loading_style()));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(input, area);
}
