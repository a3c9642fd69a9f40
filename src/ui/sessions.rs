//! Charging session list widget rendering.

use crate::app::App;
use crate::network::models::TerminationReason;
use crate::ui::layout::{SESSION_ROW_LINES, scroll_offset, visible_rows};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Render the session list widget.
///
/// # Details
/// Each session takes four lines: station and connector badge, timing and
/// energy, termination reason and duration, separator.
pub fn render_sessions(app: &App, area: Rect, buf: &mut Buffer) {
    let sessions = &app.filtered_sessions;
    let title = format!("Charging sessions ({} sessions)", sessions.len());

    if sessions.is_empty() {
        let list = List::new(vec![ListItem::new("No sessions match the search")])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(sessions.len() - 1);
    let separator_line = "─".repeat(area.width.saturating_sub(2).max(10) as usize);

    let visible = visible_rows(area, SESSION_ROW_LINES);
    let offset = scroll_offset(selected_index, sessions.len(), visible);
    let label = Style::default().fg(Color::DarkGray);

    let items: Vec<ListItem> = sessions
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, session)| {
            let is_selected = idx == selected_index;

            let line1 = Line::from(vec![
                Span::styled(
                    session.station.as_str(),
                    Style::default()
                        .fg(if is_selected { Color::Yellow } else { Color::White })
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", session.connector),
                    Style::default().fg(Color::LightBlue),
                ),
            ]);

            let line2 = Line::from(vec![
                Span::styled("Start: ", label),
                Span::raw(session.format_start()),
                Span::styled("  End: ", label),
                Span::raw(session.format_end()),
                Span::styled("  Energy: ", label),
                Span::styled(
                    format!("{} kWh", session.energy_kwh),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Peak: ", label),
                Span::styled(
                    format!("{} kW", session.peak_power_kw),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);

            let reason_style = match session.reason {
                TerminationReason::Remote => Style::default().fg(Color::Black).bg(Color::White),
                TerminationReason::Local => Style::default().fg(Color::White).bg(Color::DarkGray),
            };
            let line3 = Line::from(vec![
                Span::styled("Ended: ", label),
                Span::styled(format!(" {} ", session.reason.label()), reason_style),
                Span::styled("  Duration: ", label),
                Span::raw(format!("{} min", session.duration_minutes())),
            ]);

            let separator = Line::from(Span::styled(
                separator_line.clone(),
                Style::default().fg(if is_selected { Color::Blue } else { Color::DarkGray }),
            ));

            ListItem::new(vec![line1, line2, line3, separator])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index - offset));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

    StatefulWidget::render(list, area, buf, &mut list_state);
}
