//! EV charging network dashboard - terminal UI for stations and charging sessions.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod filter;
mod logging;
mod network;
mod ui;

use anyhow::Context;
use app::{App, Tab, UiMode};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use network::Dataset;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use ui::layout::{Hit, hit_test};

/// Main application entry point.
///
/// # Details
/// Loads configuration and the dataset, initializes logging and the terminal,
/// and runs the event loop.
fn main() -> anyhow::Result<()> {
    let config_path = Config::default_config_path()?;
    let config = Config::load(Some(&config_path))?;
    if !config_path.exists() {
        // Leave a template behind for the user to edit
        config.save(Some(&config_path))?;
    }
    let config_home = Config::config_home()?;

    logging::init(&config.log_file_path(&config_home), &config.log_level)?;

    let dataset = match config.dataset_file_path(&config_home) {
        Some(path) => Dataset::load(&path)
            .with_context(|| format!("Failed to load dataset: {}", path.display()))?,
        None => Dataset::builtin(),
    };
    tracing::info!(
        stations = dataset.stations.len(),
        sessions = dataset.sessions.len(),
        "dataset loaded"
    );

    let mut app = App::new(dataset, config.default_tab);
    app.show_legend = config.show_legend;
    app.set_status(format!(
        "Loaded {} stations and {} sessions",
        app.stations.len(),
        app.sessions.len()
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
///
/// # Details
/// Redraws, then waits up to 100 ms for a keyboard or mouse event and applies it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut screen = Rect::default();

    loop {
        terminal.draw(|f| {
            screen = f.area();
            ui::render_ui(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if !handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, screen),
                _ => {}
            }
        }
    }

    tracing::info!("quit");
    Ok(())
}

/// Apply a key press.
///
/// # Returns
/// * `bool` - False when the application should quit
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    // Any key press replaces the startup message with key hints
    app.status_message = None;

    if app.mode == UiMode::Search {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.mode = UiMode::Browse,
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char(c) => app.add_search_char(c),
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return false,
        KeyCode::Char('1') => app.switch_tab(Tab::Map),
        KeyCode::Char('2') => app.switch_tab(Tab::Stations),
        KeyCode::Char('3') => app.switch_tab(Tab::Sessions),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('l') if app.active_tab == Tab::Map => app.toggle_legend(),
        KeyCode::Char('p') if app.active_tab == Tab::StationDetail => app.cycle_chart_period(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')
            if app.active_tab == Tab::StationDetail =>
        {
            app.back()
        }
        KeyCode::Esc => return false,
        _ => {}
    }
    true
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `screen` - Terminal area of the last draw
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, screen: Rect) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            match hit_test(app, screen, mouse.column, mouse.row) {
                Some(Hit::Tab(tab)) => app.switch_tab(tab),
                Some(Hit::Marker(index)) => {
                    if let Some(id) = app.stations.get(index).map(|s| s.id) {
                        app.select_station(id);
                    }
                }
                Some(Hit::StationRow(index)) => {
                    if let Some(id) = app.filtered_stations.get(index).map(|s| s.id) {
                        app.select_station(id);
                    }
                }
                Some(Hit::Back) => app.back(),
                None => {}
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    #[test]
    fn test_keys_open_and_leave_detail() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        assert!(press(&mut app, KeyCode::Char('j')));
        assert!(press(&mut app, KeyCode::Enter));
        assert_eq!(app.active_tab, Tab::StationDetail);
        assert_eq!(app.selected_station_id, Some(2));

        // Esc leaves the detail view instead of quitting
        assert!(press(&mut app, KeyCode::Esc));
        assert_eq!(app.active_tab, Tab::Stations);
    }

    #[test]
    fn test_keys_type_into_search() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        // 'q' is text while searching
        assert!(press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.station_query, "q");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, UiMode::Browse);
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key_event(key, &mut app));
    }

    #[test]
    fn test_click_marker_then_back() {
        let mut app = App::new(Dataset::builtin(), Tab::Map);
        let screen = Rect::new(0, 0, 120, 40);
        let layout = ui::layout::AppLayout::new(screen);
        let map = ui::layout::inset(layout.body);
        let marker = ui::layout::marker_area(map, 0, ui::map::marker_width(&app.stations[0].name));

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse_event(click(marker.x + 1, marker.y + 1), &mut app, screen);
        assert_eq!(app.active_tab, Tab::StationDetail);
        assert_eq!(app.selected_station_id, Some(1));

        let (header, _) = ui::layout::split_detail_view(layout.body);
        handle_mouse_event(click(header.x + 1, header.y + 1), &mut app, screen);
        assert_eq!(app.active_tab, Tab::Stations);
        assert_eq!(app.selected_station_id, Some(1));
    }
}
