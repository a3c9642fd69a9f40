//! Screen layout and mouse hit testing.
//!
//! Rendering and mouse handling share these functions so a click always maps
//! to the widget drawn under it.

use crate::app::{App, Tab};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Lines used by one station row (3 content + 1 separator).
pub const STATION_ROW_LINES: u16 = 4;
/// Lines used by one session row (3 content + 1 separator).
pub const SESSION_ROW_LINES: u16 = 4;
/// Height of a map marker box.
pub const MARKER_HEIGHT: u16 = 4;
/// Width of the detail view's back button.
pub const BACK_BUTTON_WIDTH: u16 = 10;
/// Size of the map legend box.
pub const LEGEND_WIDTH: u16 = 18;
pub const LEGEND_HEIGHT: u16 = 5;

/// Top-level areas of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Active view
                Constraint::Length(3), // Status bar
            ])
            .split(area);
        Self {
            header: chunks[0],
            tabs: chunks[1],
            body: chunks[2],
            status: chunks[3],
        }
    }
}

/// Split the tab bar into one area per header.
pub fn tab_header_areas(tabs: Rect) -> Vec<Rect> {
    let inner = inset(tabs);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner)
        .to_vec()
}

/// Split a list view into search bar and list.
pub fn split_list_view(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);
    (chunks[0], chunks[1])
}

/// Split the detail view into header and the three columns.
pub fn split_detail_view(body: Rect) -> (Rect, [Rect; 3]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    (rows[0], [columns[0], columns[1], columns[2]])
}

/// Area of the back button inside the detail header.
pub fn back_button_area(detail_header: Rect) -> Rect {
    Rect {
        width: BACK_BUTTON_WIDTH.min(detail_header.width),
        ..detail_header
    }
}

/// Area of a map marker.
///
/// # Arguments
/// * `map` - Inner area of the map
/// * `index` - Station index in the dataset
/// * `width` - Marker width
///
/// # Details
/// Markers are centred at `20 + index*30` percent across and `30 + index*20`
/// percent down, then clamped so the box stays inside the map.
pub fn marker_area(map: Rect, index: usize, width: u16) -> Rect {
    let width = width.min(map.width);
    let height = MARKER_HEIGHT.min(map.height);

    let pct_x = 20 + index as u32 * 30;
    let pct_y = 30 + index as u32 * 20;
    let center_x = map.x as u32 + map.width as u32 * pct_x / 100;
    let center_y = map.y as u32 + map.height as u32 * pct_y / 100;

    let max_x = (map.x + map.width - width) as u32;
    let max_y = (map.y + map.height - height) as u32;
    let x = center_x
        .saturating_sub(width as u32 / 2)
        .clamp(map.x as u32, max_x);
    let y = center_y
        .saturating_sub(height as u32 / 2)
        .clamp(map.y as u32, max_y);

    Rect::new(x as u16, y as u16, width, height)
}

/// Area of the map legend in the top-right corner.
///
/// # Returns
/// * `Option<Rect>` - None when the map is too small to hold the legend
pub fn legend_area(map: Rect) -> Option<Rect> {
    if map.width < LEGEND_WIDTH || map.height < LEGEND_HEIGHT {
        return None;
    }
    Some(Rect::new(
        map.right() - LEGEND_WIDTH,
        map.y,
        LEGEND_WIDTH,
        LEGEND_HEIGHT,
    ))
}

/// Scroll offset that keeps the selected row centred.
///
/// # Arguments
/// * `selected` - Selected row index
/// * `len` - Number of rows
/// * `visible` - Rows that fit on screen
pub fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    let center_offset = visible / 2;
    let offset = selected.saturating_sub(center_offset);
    offset.min(len.saturating_sub(visible))
}

/// Number of whole rows that fit in a bordered list.
pub fn visible_rows(list: Rect, lines_per_row: u16) -> usize {
    (list.height.saturating_sub(2) / lines_per_row).max(1) as usize
}

/// Row index under a screen line of a bordered list, if any.
pub fn row_at(list: Rect, lines_per_row: u16, row: u16, selected: usize, len: usize) -> Option<usize> {
    let inner = inset(list);
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    let visible = visible_rows(list, lines_per_row);
    let offset = scroll_offset(selected, len, visible);
    let index = offset + ((row - inner.y) / lines_per_row) as usize;
    (index < len).then_some(index)
}

/// Area inside a one-cell border.
pub fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Clickable element under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A tab header
    Tab(Tab),
    /// A map marker, by station index
    Marker(usize),
    /// A station list row, by index in the filtered list
    StationRow(usize),
    /// The detail view's back button
    Back,
}

/// Find the clickable element at a screen position.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Full terminal area
/// * `column` - Mouse column
/// * `row` - Mouse row
pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<Hit> {
    let layout = AppLayout::new(area);
    let pos = Position::new(column, row);

    for (header, tab) in tab_header_areas(layout.tabs).iter().zip(Tab::HEADERS) {
        if header.contains(pos) {
            return Some(Hit::Tab(tab));
        }
    }

    if !layout.body.contains(pos) {
        return None;
    }

    match app.active_tab {
        Tab::Map => {
            let map = inset(layout.body);
            // The legend is drawn over the markers
            if app.show_legend && legend_area(map).is_some_and(|legend| legend.contains(pos)) {
                return None;
            }
            // Later markers are drawn on top, so check them first
            app.stations
                .iter()
                .enumerate()
                .rev()
                .find(|(i, station)| {
                    marker_area(map, *i, crate::ui::map::marker_width(&station.name)).contains(pos)
                })
                .map(|(i, _)| Hit::Marker(i))
        }
        Tab::Stations => {
            let (_, list) = split_list_view(layout.body);
            row_at(
                list,
                STATION_ROW_LINES,
                row,
                app.selected_index,
                app.filtered_stations.len(),
            )
            .filter(|_| list.contains(pos))
            .map(Hit::StationRow)
        }
        Tab::Sessions => None,
        Tab::StationDetail => {
            let (header, _) = split_detail_view(layout.body);
            back_button_area(header).contains(pos).then_some(Hit::Back)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Dataset;

    fn screen() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn test_scroll_offset_centres_selection() {
        assert_eq!(scroll_offset(0, 10, 4), 0);
        assert_eq!(scroll_offset(5, 10, 4), 3);
        assert_eq!(scroll_offset(9, 10, 4), 6);
        assert_eq!(scroll_offset(2, 3, 5), 0);
    }

    #[test]
    fn test_marker_area_stays_inside_map() {
        let map = Rect::new(1, 1, 60, 20);
        for index in 0..6 {
            let marker = marker_area(map, index, 16);
            assert!(marker.x >= map.x && marker.right() <= map.right());
            assert!(marker.y >= map.y && marker.bottom() <= map.bottom());
        }
    }

    #[test]
    fn test_marker_positions_follow_percentages() {
        let map = Rect::new(0, 0, 100, 50);
        let first = marker_area(map, 0, 10);
        assert_eq!(first.x, 15);
        assert_eq!(first.y, 13);
        let second = marker_area(map, 1, 10);
        assert_eq!(second.x, 45);
        assert_eq!(second.y, 23);
    }

    #[test]
    fn test_hit_tab_headers() {
        let app = App::new(Dataset::builtin(), Tab::Map);
        let layout = AppLayout::new(screen());
        let headers = tab_header_areas(layout.tabs);
        let sessions = headers[2];
        assert_eq!(
            hit_test(&app, screen(), sessions.x + 1, sessions.y),
            Some(Hit::Tab(Tab::Sessions))
        );
    }

    #[test]
    fn test_hit_station_row() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        app.switch_tab(Tab::Stations);
        let layout = AppLayout::new(screen());
        let (_, list) = split_list_view(layout.body);
        let second_row = list.y + 1 + STATION_ROW_LINES;
        assert_eq!(
            hit_test(&app, screen(), list.x + 2, second_row),
            Some(Hit::StationRow(1))
        );
        // Below the last row
        let past_end = list.y + 1 + STATION_ROW_LINES * 3;
        assert_eq!(hit_test(&app, screen(), list.x + 2, past_end), None);
    }

    #[test]
    fn test_hit_marker() {
        let app = App::new(Dataset::builtin(), Tab::Map);
        let layout = AppLayout::new(screen());
        let map = inset(layout.body);
        let name = &app.stations[1].name;
        let marker = marker_area(map, 1, crate::ui::map::marker_width(name));
        assert_eq!(
            hit_test(&app, screen(), marker.x + 1, marker.y + 1),
            Some(Hit::Marker(1))
        );
    }

    #[test]
    fn test_legend_covers_marker_clicks() {
        // Short and narrow enough that the last marker sits under the legend
        let screen = Rect::new(0, 0, 40, 16);
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        let map = inset(AppLayout::new(screen).body);
        let legend = legend_area(map).unwrap();
        let marker = marker_area(map, 2, crate::ui::map::marker_width(&app.stations[2].name));
        let overlap = marker.intersection(legend);
        assert!(!overlap.is_empty());

        let (column, row) = (overlap.x, overlap.y);
        assert_eq!(hit_test(&app, screen, column, row), None);

        app.toggle_legend();
        assert_eq!(hit_test(&app, screen, column, row), Some(Hit::Marker(2)));
    }

    #[test]
    fn test_hit_back_button() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        app.select_station(1);
        let layout = AppLayout::new(screen());
        let (header, _) = split_detail_view(layout.body);
        assert_eq!(
            hit_test(&app, screen(), header.x + 2, header.y + 1),
            Some(Hit::Back)
        );
    }
}
