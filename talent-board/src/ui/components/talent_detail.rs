//! Detail panel for the selected talent.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use talent_api::endpoints::talents::Profile;

use crate::ui::{theme, utils};

pub fn render_talent_detail(f: &mut Frame, area: Rect, talent: Option<&Profile>) {
    let block = Block::default().borders(Borders::ALL).title("Details");

    let Some(talent) = talent else {
        let empty = Paragraph::new(Span::styled(
            "Select a talent to see details",
            theme::help_text_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(talent.display_name.as_str(), theme::title_style()),
            Span::raw("  "),
            utils::fmt_verified(talent.verified),
            Span::raw("  "),
            utils::fmt_rating(talent.rating),
        ]),
        detail_row("Location", format!("{} ({})", talent.location, talent.timezone)),
        detail_row(
            "Availability",
            utils::format_availability(talent.availability_hrs_per_week),
        ),
        detail_row("Skills", utils::format_list(&talent.skills)),
        detail_row("Tags", utils::format_list(&talent.tags)),
        detail_row(
            "Last active",
            utils::format_last_active(talent.last_active, Utc::now()),
        ),
        // Bio has already been reduced to plain text by the loader
        Line::from(Span::raw(talent.bio.as_str())),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(paragraph, area);
}

fn detail_row(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:13}", label), theme::header_style()),
        Span::raw(value),
    ])
}
