use crate::app::AppState;
use crate::domain::{ActiveField, UiMode};
use crate::ui::styles::{border_style, default_style, editing_style, focused_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the always-visible event form (name + date fields).
///
/// Every keystroke while editing lands directly in the canonical event
/// value, so what is drawn here is always the live state.
pub fn render_form_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    for field in [ActiveField::Name, ActiveField::Date] {
        let focused = app.active_field == field;
        let editing = focused && app.ui_mode == UiMode::Editing;

        let label = if editing {
            format!("{}: (editing)", field.label())
        } else {
            format!("{}:", field.label())
        };
        lines.push(Line::from(Span::styled(
            label,
            if focused { focused_style() } else { default_style() },
        )));

        let value = match field {
            ActiveField::Name => &app.event.name,
            ActiveField::Date => &app.event.date,
        };

        let mut value_spans = vec![
            Span::raw(if focused { "> " } else { "  " }),
            Span::styled(
                value.clone(),
                if editing { editing_style() } else { default_style() },
            ),
        ];
        if editing {
            value_spans.push(Span::styled("█", editing_style())); // Cursor
        }
        lines.push(Line::from(value_spans));
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Event ", title_style())),
    );

    f.render_widget(paragraph, area);
}
