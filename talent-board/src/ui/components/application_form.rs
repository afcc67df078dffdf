//! Left-hand "Apply as talent" pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ApplicationFormState, DraftField};
use crate::ui::theme;
use talent_api::endpoints::Skill;

const FIELDS: [DraftField; 3] = [DraftField::Name, DraftField::Email, DraftField::DesiredSkill];

/// Render the form. `active` is true while the form owns keyboard input.
pub fn render_application_form(f: &mut Frame, area: Rect, form: &ApplicationFormState, active: bool) {
    let border_style = if active {
        theme::focused_border_style()
    } else {
        Style::default()
    };

    let mut lines = Vec::new();
    for field in FIELDS {
        let focused = active && form.focused_field == field;

        lines.push(Line::from(Span::styled(
            field.label(),
            theme::header_style(),
        )));
        lines.push(field_line(form, field, focused));

        if let Some(error) = form.errors.get(field) {
            lines.push(Line::from(Span::styled(error, theme::error_style())));
        }
        lines.push(Line::from(""));
    }

    let hint = if active {
        "Enter: submit | Esc: back"
    } else {
        "a or Tab to fill in"
    };
    lines.push(Line::from(Span::styled(hint, theme::help_text_style())));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Apply as talent"),
    );

    f.render_widget(paragraph, area);
}

fn field_line<'a>(form: &'a ApplicationFormState, field: DraftField, focused: bool) -> Line<'a> {
    let style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    match field {
        DraftField::Name | DraftField::Email => {
            let value = if field == DraftField::Name {
                form.draft.name.as_str()
            } else {
                form.draft.email.as_str()
            };
            let mut spans = vec![Span::styled(format!(" {}", value), style)];
            if focused {
                spans.push(Span::styled("▏", style));
            }
            Line::from(spans)
        }
        DraftField::DesiredSkill => {
            let mut spans = vec![Span::raw(" ")];
            for skill in Skill::ALL {
                let selected = skill == form.draft.desired_skill;
                let skill_style = match (selected, focused) {
                    (true, true) => style.fg(theme::COLOR_INPUT_FOCUSED),
                    (true, false) => Style::default().add_modifier(Modifier::BOLD),
                    (false, _) => theme::help_text_style(),
                };
                let marker = if selected { "●" } else { "○" };
                spans.push(Span::styled(format!("{} {} ", marker, skill), skill_style));
            }
            Line::from(spans)
        }
    }
}
