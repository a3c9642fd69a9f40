//! Tabs widget rendering.
//!
//! Displays tab headers for switching between dashboard views.

use crate::app::{App, Tab};
use crate::ui::layout::tab_header_areas;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays the Map, Stations and Sessions headers side by side, each in the
/// area used for mouse hit testing. While the detail view is open the block
/// title names the station and the Stations header is marked as its parent.
pub fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let title = if app.active_tab == Tab::StationDetail {
        format!("Tabs ▸ {}: {}", Tab::StationDetail.title(), app.detail_station().name)
    } else {
        "Tabs".to_string()
    };
    Widget::render(Block::default().title(title).borders(Borders::ALL), area, buf);

    for (i, (header, tab)) in tab_header_areas(area).into_iter().zip(Tab::HEADERS).enumerate() {
        let is_active = tab == app.active_tab;
        let is_parent = app.active_tab == Tab::StationDetail && tab == Tab::Stations;

        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if is_parent {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text = if is_active {
            format!("▶ {} {} ◀", i + 1, tab.title())
        } else {
            format!("  {} {}  ", i + 1, tab.title())
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center);
        Widget::render(paragraph, header, buf);
    }
}
