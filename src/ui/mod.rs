//! UI components module.
//!
//! Contains ratatui widgets for displaying the dashboard.

pub mod detail;
pub mod layout;
pub mod map;
pub mod search;
pub mod sessions;
pub mod stations;
pub mod status;
pub mod tabs;

use crate::app::{App, Tab, UiMode};
use layout::{AppLayout, split_list_view};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub use detail::render_detail;
pub use map::render_map;
pub use search::render_search;
pub use sessions::render_sessions;
pub use stations::render_stations;
pub use tabs::render_tabs;

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Details
/// Lays out the header, tab bar, active view and status bar.
pub fn render_ui(f: &mut Frame, app: &App) {
    let layout = AppLayout::new(f.area());
    let buf = f.buffer_mut();

    render_header(layout.header, buf);
    render_tabs(app, layout.tabs, buf);

    match app.active_tab {
        Tab::Map => render_map(app, layout.body, buf),
        Tab::Stations => {
            let (search, list) = split_list_view(layout.body);
            render_search(app, search, buf);
            render_stations(app, list, buf);
        }
        Tab::Sessions => {
            let (search, list) = split_list_view(layout.body);
            render_search(app, search, buf);
            render_sessions(app, list, buf);
        }
        Tab::StationDetail => render_detail(app, layout.body, buf),
    }

    render_status_bar(app, layout.status, buf);
}

fn render_header(area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("⚡ ", Style::default().fg(Color::Blue)),
        Span::styled(
            "EV Charging Network",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    Widget::render(title, chunks[0], buf);

    let badge = Paragraph::new(Line::from(Span::styled(
        "● System online",
        Style::default().fg(Color::Green),
    )))
    .alignment(Alignment::Right);
    Widget::render(badge, chunks[1], buf);
}

/// Key hints for the current tab and mode.
fn key_hints(app: &App) -> &'static str {
    if app.mode == UiMode::Search {
        return "Type to filter, 'Backspace' to delete, 'Enter' or 'Esc' to finish";
    }
    match app.active_tab {
        Tab::Map => "'q' quit, '1-3' tabs, 'j/k' move, 'Enter' open station, 'l' legend",
        Tab::Stations => "'q' quit, '1-3' tabs, 'j/k' move, 'Enter' open station, '/' search",
        Tab::Sessions => "'q' quit, '1-3' tabs, 'j/k' move, '/' search",
        Tab::StationDetail => "'q' quit, 'Esc' or 'b' back, 'p' chart period, '1-3' tabs",
    }
}

fn render_status_bar(app: &App, area: Rect, buf: &mut Buffer) {
    let text = app.status_message.as_deref().unwrap_or_else(|| key_hints(app));
    let status = Paragraph::new(Line::from(text))
        .block(Block::default().borders(Borders::ALL));
    Widget::render(status, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Dataset;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    #[test]
    fn test_render_map_shows_markers() {
        let app = App::new(Dataset::builtin(), Tab::Map);
        let screen = draw(&app);
        assert!(screen.contains("EV Charging Network"));
        assert!(screen.contains("Statuses"));
        assert!(screen.contains("Офис-3"));
    }

    #[test]
    fn test_render_filtered_station_list() {
        let mut app = App::new(Dataset::builtin(), Tab::Stations);
        app.start_search();
        for ch in "спб".chars() {
            app.add_search_char(ch);
        }
        let screen = draw(&app);
        assert!(screen.contains("(1 stations)"));
        assert!(screen.contains("192.168.1.103"));
        assert!(!screen.contains("192.168.1.101"));
    }

    #[test]
    fn test_render_sessions_shows_duration() {
        let app = App::new(Dataset::builtin(), Tab::Sessions);
        let screen = draw(&app);
        assert!(screen.contains("75 min"));
        assert!(screen.contains("CHAdeMO"));
    }

    #[test]
    fn test_render_detail_of_selected_station() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        app.select_station(2);
        let screen = draw(&app);
        assert!(screen.contains("← Back"));
        assert!(screen.contains("EV001235"));
        assert!(screen.contains("Unavailable"));
    }

    #[test]
    fn test_render_status_message_overrides_hints() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        app.set_status("Loaded 3 stations".to_string());
        let screen = draw(&app);
        assert!(screen.contains("Loaded 3 stations"));
    }
}
