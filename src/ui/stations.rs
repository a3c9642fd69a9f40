//! Station list widget rendering.
//!
//! Displays a scrollable list of stations with selection highlighting.

use crate::app::App;
use crate::network::models::StationStatus;
use crate::ui::layout::{STATION_ROW_LINES, scroll_offset, visible_rows};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Render the station list widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each station takes four lines:
/// - Line 1: Name and online badge (bold)
/// - Line 2: IP address, SSH, serial number
/// - Line 3: City and street address
/// - Line 4: Separator
pub fn render_stations(app: &App, area: Rect, buf: &mut Buffer) {
    let stations = &app.filtered_stations;
    let title = format!("Charging stations ({} stations)", stations.len());

    if stations.is_empty() {
        let list = List::new(vec![ListItem::new("No stations match the search")])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(stations.len() - 1);
    let separator_line = "─".repeat(area.width.saturating_sub(2).max(10) as usize);

    let visible = visible_rows(area, STATION_ROW_LINES);
    let offset = scroll_offset(selected_index, stations.len(), visible);

    let items: Vec<ListItem> = stations
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, station)| {
            let is_selected = idx == selected_index;
            let is_opened = app.selected_station_id == Some(station.id);

            let (badge_icon, badge_color) = match station.status {
                StationStatus::Online => ("●", Color::Green),
                StationStatus::Offline => ("○", Color::Red),
            };
            let badge_text = format!(" {} {} ", badge_icon, station.status.label());

            let mut title_spans = vec![
                Span::styled(
                    station.name.as_str(),
                    Style::default()
                        .fg(if is_selected { Color::Yellow } else { Color::White })
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    badge_text,
                    Style::default().fg(Color::Black).bg(badge_color),
                ),
            ];
            if is_opened {
                title_spans.push(Span::styled(" ◆", Style::default().fg(Color::Cyan)));
            }

            let label = Style::default().fg(Color::DarkGray);
            let line2 = Line::from(vec![
                Span::styled("IP: ", label),
                Span::styled(station.ip.as_str(), Style::default().fg(Color::Cyan)),
                Span::styled("  SSH: ", label),
                Span::styled(station.ssh.as_str(), Style::default().fg(Color::Cyan)),
                Span::styled("  Serial: ", label),
                Span::styled(station.serial.as_str(), Style::default().fg(Color::Magenta)),
            ]);
            let line3 = Line::from(vec![
                Span::styled("City: ", label),
                Span::raw(station.city.as_str()),
                Span::styled("  Address: ", label),
                Span::raw(station.address.as_str()),
            ]);

            let separator = Line::from(Span::styled(
                separator_line.clone(),
                Style::default().fg(if is_selected { Color::Blue } else { Color::DarkGray }),
            ));

            ListItem::new(vec![Line::from(title_spans), line2, line3, separator])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index - offset));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

    StatefulWidget::render(list, area, buf, &mut list_state);
}
