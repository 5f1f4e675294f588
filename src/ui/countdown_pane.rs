use crate::app::AppState;
use crate::ui::styles::{
    arrived_style, border_style, title_style, unit_style, value_style, warning_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the countdown display: event name as the title, the four
/// remaining-time fields, and a status line underneath
pub fn render_countdown_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let title = if app.event.name.trim().is_empty() {
        " Countdown ".to_string()
    } else {
        format!(" {} ", app.event.name.trim())
    };

    let left = app.time_left;

    let mut lines = vec![Line::raw("")];

    lines.push(Line::from(vec![
        Span::styled(format!("{:>4}", left.days), value_style()),
        Span::styled(" days   ", unit_style()),
        Span::styled(format!("{:02}", left.hours), value_style()),
        Span::styled(" hours   ", unit_style()),
        Span::styled(format!("{:02}", left.minutes), value_style()),
        Span::styled(" minutes   ", unit_style()),
        Span::styled(format!("{:02}", left.seconds), value_style()),
        Span::styled(" seconds", unit_style()),
    ]));
    lines.push(Line::raw(""));

    // Status line: counting, arrived, or no usable date
    let status = match app.target {
        Some(target) if !left.is_zero() => Line::from(Span::styled(
            format!("counting down to {}", target.format("%A, %B %-d %Y")),
            unit_style(),
        )),
        Some(_) => Line::from(Span::styled("The day is here!", arrived_style())),
        None => Line::from(Span::styled(
            "No valid date set - press e to edit",
            warning_style(),
        )),
    };
    lines.push(status);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        );

    f.render_widget(paragraph, area);
}
