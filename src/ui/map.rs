//! Map widget rendering.
//!
//! Draws a grid background, the status legend and one marker per station.

use crate::app::App;
use crate::network::ConnectorStatus;
use crate::ui::layout::{inset, legend_area, marker_area};
use crate::ui::status::dot_color;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Width of the marker box for a station name.
pub fn marker_width(name: &str) -> u16 {
    (Line::from(name).width() as u16 + 4).max(12)
}

/// Render the map widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The station under the cursor gets a thick border. Stations without map
/// information are drawn with a gray border and no connector dots.
pub fn render_map(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title("Charging station map (Enter to open)")
        .borders(Borders::ALL);
    Widget::render(block, area, buf);

    let map = inset(area);
    render_grid(map, buf);

    for (index, station) in app.stations.iter().enumerate() {
        let marker = marker_area(map, index, marker_width(&station.name));
        let is_selected = index == app.selected_index;

        let (border_color, dots) = match &station.map {
            Some(info) => (
                dot_color(info.availability),
                info.connectors
                    .iter()
                    .flat_map(|c| {
                        [
                            Span::styled("●", Style::default().fg(dot_color(c.status))),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ),
            None => (dot_color(ConnectorStatus::Unknown), Vec::new()),
        };

        let name_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(station.name.as_str(), name_style)),
            Line::from(dots),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if is_selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border_color)),
        );

        Widget::render(Clear, marker, buf);
        Widget::render(paragraph, marker, buf);
    }

    if app.show_legend {
        render_legend(map, buf);
    }
}

/// Draw faint grid lines every 10% across and 12.5% down.
fn render_grid(map: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(Color::DarkGray);
    for i in 0..10u32 {
        let x = map.x + (map.width as u32 * i / 10) as u16;
        for y in map.top()..map.bottom() {
            buf.set_string(x, y, "┊", style);
        }
    }
    for i in 0..8u32 {
        let y = map.y + (map.height as u32 * i / 8) as u16;
        for x in map.left()..map.right() {
            buf.set_string(x, y, "┈", style);
        }
    }
}

/// Draw the status legend in the top-right corner.
fn render_legend(map: Rect, buf: &mut Buffer) {
    let Some(legend) = legend_area(map) else {
        return;
    };
    let entry = |status: ConnectorStatus, label: &'static str| {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(dot_color(status))),
            Span::raw(label),
        ])
    };
    let paragraph = Paragraph::new(vec![
        entry(ConnectorStatus::Available, "Available"),
        entry(ConnectorStatus::Occupied, "Occupied"),
        entry(ConnectorStatus::Unavailable, "Unavailable"),
    ])
    .block(Block::default().title("Statuses").borders(Borders::ALL));

    Widget::render(Clear, legend, buf);
    Widget::render(paragraph, legend, buf);
}
