use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};
use tracing::Level;

use crate::log_buffer::{LogBuffer, LogEntry};
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar},
    layouts, theme,
};

const TARGET_WIDTH: usize = 25;

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Session log ({} entries)", state.total_entries);
    f.render_widget(
        ratatui::widgets::Paragraph::new(title).style(theme::title_style()),
        title_area,
    );
    render_logs(f, content_area, state, log_buffer);
    render_help(f, help_area, state);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.get_entries();
    let total = entries.len();

    if total == 0 {
        empty_state::render_empty_state(f, area, "Session Logs", "No logs yet", None);
        return;
    }

    // Newest entry at the bottom; scroll_offset counts entries hidden below
    let inner_height = area.height.saturating_sub(3) as usize; // Borders and header
    let offset = state.scroll_offset.min(total.saturating_sub(1));
    let end = total - offset;
    let start = end.saturating_sub(inner_height);

    let rows: Vec<Row> = entries[start..end].iter().map(log_row).collect();

    let widths = [
        Constraint::Length(12),                  // Time
        Constraint::Length(5),                   // Level
        Constraint::Length(TARGET_WIDTH as u16), // Target
        Constraint::Min(30),                     // Message
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            start + 1,
            end,
            total
        )))
        .header(Row::new(vec!["Time", "Level", "Target", "Message"]).style(theme::header_style()));

    f.render_widget(table, area);
}

fn log_row(entry: &LogEntry) -> Row<'static> {
    let (label, style) = match entry.level {
        Level::ERROR => ("ERROR", theme::error_style()),
        Level::WARN => ("WARN ", Style::default().fg(theme::COLOR_LOADING)),
        Level::INFO => ("INFO ", Style::default().fg(theme::COLOR_SUCCESS)),
        Level::DEBUG => ("DEBUG", Style::default().fg(Color::Blue)),
        Level::TRACE => ("TRACE", Style::default().fg(theme::COLOR_MUTED)),
    };

    Row::new(vec![
        entry.timestamp.format("%H:%M:%S%.3f").to_string(),
        label.to_string(),
        truncate_target(&entry.target, TARGET_WIDTH),
        entry.message.clone(),
    ])
    .style(style)
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState) {
    let scroll_info = if state.scroll_offset > 0 {
        format!(" (scrolled {} from bottom)", state.scroll_offset)
    } else {
        String::new()
    };

    let help_text = format!(
        "j/k: scroll | G: bottom | gg: top | PgUp/PgDn: page | h: back | ?: help{}",
        scroll_info
    );

    help_bar::render_help_bar(f, area, &help_text);
}

/// Keep the tail of a module path, which is the informative part
fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_target_keeps_tail() {
        assert_eq!(truncate_target("talent_board", 25), "talent_board");
        assert_eq!(
            truncate_target("talent_board::background::data_loader", 20),
            "...ound::data_loader"
        );
    }
}
