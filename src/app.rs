//! Application state management.
//!
//! Manages station and session lists, search queries, tab navigation,
//! station selection and UI mode.

use crate::filter::filter;
use crate::network::{ChargingSession, Dataset, Station};
use serde::{Deserialize, Serialize};
use std::cmp;

/// Input mode of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal navigation
    Browse,
    /// Typing into the active tab's search bar
    Search,
}

/// Dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    /// Map with station markers
    Map,
    /// Station list
    Stations,
    /// Charging session history
    Sessions,
    /// Detail view of the selected station
    StationDetail,
}

impl Tab {
    /// Tabs reachable from the tab bar, in display order.
    pub const HEADERS: [Tab; 3] = [Tab::Map, Tab::Stations, Tab::Sessions];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Stations => "Stations",
            Tab::Sessions => "Sessions",
            Tab::StationDetail => "Station",
        }
    }

    /// Whether the tab has a search bar.
    pub fn is_searchable(self) -> bool {
        matches!(self, Tab::Stations | Tab::Sessions)
    }
}

/// Period shown by the detail view's energy chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPeriod {
    Hour,
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 5] = [
        ChartPeriod::Hour,
        ChartPeriod::Month,
        ChartPeriod::Quarter,
        ChartPeriod::HalfYear,
        ChartPeriod::Year,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartPeriod::Hour => "H",
            ChartPeriod::Month => "M",
            ChartPeriod::Quarter => "3M",
            ChartPeriod::HalfYear => "6M",
            ChartPeriod::Year => "Y",
        }
    }

    fn next(self) -> Self {
        match self {
            ChartPeriod::Hour => ChartPeriod::Month,
            ChartPeriod::Month => ChartPeriod::Quarter,
            ChartPeriod::Quarter => ChartPeriod::HalfYear,
            ChartPeriod::HalfYear => ChartPeriod::Year,
            ChartPeriod::Year => ChartPeriod::Hour,
        }
    }
}

/// Main application state.
///
/// Holds the dataset, derived filtered lists, and navigation state.
#[derive(Debug)]
pub struct App {
    /// All stations, never empty
    pub stations: Vec<Station>,
    /// All charging sessions
    pub sessions: Vec<ChargingSession>,
    /// Stations matching `station_query`
    pub filtered_stations: Vec<Station>,
    /// Sessions matching `session_query`
    pub filtered_sessions: Vec<ChargingSession>,
    /// Station search query (name or city)
    pub station_query: String,
    /// Session search query (station name)
    pub session_query: String,
    /// Cursor index in the active tab's list
    pub selected_index: usize,
    /// Station opened in the detail view
    pub selected_station_id: Option<u32>,
    /// Active tab
    pub active_tab: Tab,
    /// Current UI mode
    pub mode: UiMode,
    /// Whether the map legend is drawn
    pub show_legend: bool,
    /// Energy chart period in the detail view
    pub chart_period: ChartPeriod,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `dataset` - Validated dataset with at least one station
    /// * `initial_tab` - Tab shown on startup
    ///
    /// # Details
    /// The detail view falls back to the first station, so callers pass a
    /// dataset that went through [`Dataset::validate`].
    pub fn new(dataset: Dataset, initial_tab: Tab) -> Self {
        debug_assert!(
            !dataset.stations.is_empty(),
            "App::new requires at least one station"
        );
        let mut app = Self {
            stations: dataset.stations,
            sessions: dataset.sessions,
            filtered_stations: Vec::new(),
            filtered_sessions: Vec::new(),
            station_query: String::new(),
            session_query: String::new(),
            selected_index: 0,
            selected_station_id: None,
            active_tab: initial_tab,
            mode: UiMode::Browse,
            show_legend: true,
            chart_period: ChartPeriod::Quarter,
            status_message: None,
        };
        app.apply_filters();
        app
    }

    /// Recompute both filtered lists from the current queries.
    ///
    /// # Details
    /// Called on every query change. Clamps the cursor to the active list.
    pub fn apply_filters(&mut self) {
        self.filtered_stations = filter(&self.stations, &self.station_query);
        self.filtered_sessions = filter(&self.sessions, &self.session_query);
        self.selected_index = cmp::min(
            self.selected_index,
            self.current_list_len().saturating_sub(1),
        );
    }

    /// Number of entries the cursor moves through on the active tab.
    pub fn current_list_len(&self) -> usize {
        match self.active_tab {
            Tab::Map => self.stations.len(),
            Tab::Stations => self.filtered_stations.len(),
            Tab::Sessions => self.filtered_sessions.len(),
            Tab::StationDetail => 0,
        }
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Activate a tab directly.
    ///
    /// # Details
    /// Resets the cursor and leaves search mode. The selected station ID is not touched.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "switch tab");
        }
        self.active_tab = tab;
        self.selected_index = 0;
        self.mode = UiMode::Browse;
    }

    /// Cycle through the tab bar headers.
    ///
    /// # Details
    /// From the detail view this moves to the tab after Stations.
    pub fn next_tab(&mut self) {
        let next = match self.active_tab {
            Tab::Map => Tab::Stations,
            Tab::Stations | Tab::StationDetail => Tab::Sessions,
            Tab::Sessions => Tab::Map,
        };
        self.switch_tab(next);
    }

    /// Open the detail view for a station.
    ///
    /// # Arguments
    /// * `station_id` - ID of the map marker or list row that was chosen
    pub fn select_station(&mut self, station_id: u32) {
        tracing::info!(station_id, "open station detail");
        self.selected_station_id = Some(station_id);
        self.switch_tab(Tab::StationDetail);
    }

    /// Open the station under the cursor on the map or station list.
    ///
    /// # Returns
    /// * `bool` - True if a station was opened
    pub fn open_selected(&mut self) -> bool {
        let station_id = match self.active_tab {
            Tab::Map => self.stations.get(self.selected_index).map(|s| s.id),
            Tab::Stations => self.filtered_stations.get(self.selected_index).map(|s| s.id),
            Tab::Sessions | Tab::StationDetail => None,
        };
        match station_id {
            Some(id) => {
                self.select_station(id);
                true
            }
            None => false,
        }
    }

    /// Leave the detail view.
    ///
    /// # Details
    /// Always lands on the Stations tab. The selected station ID is kept and, when the
    /// station is visible under the current query, the cursor is placed on its row.
    pub fn back(&mut self) {
        self.switch_tab(Tab::Stations);
        if let Some(id) = self.selected_station_id
            && let Some(pos) = self.filtered_stations.iter().position(|s| s.id == id)
        {
            self.selected_index = pos;
        }
    }

    /// Station shown by the detail view.
    ///
    /// # Returns
    /// * `&Station` - The selected station, or the first station when the ID
    ///   is absent or does not resolve
    pub fn detail_station(&self) -> &Station {
        self.selected_station_id
            .and_then(|id| self.stations.iter().find(|s| s.id == id))
            .unwrap_or(&self.stations[0])
    }

    /// Query string of the active tab.
    pub fn active_query(&self) -> &str {
        match self.active_tab {
            Tab::Sessions => &self.session_query,
            _ => &self.station_query,
        }
    }

    /// Enter search mode on a searchable tab.
    pub fn start_search(&mut self) {
        if self.active_tab.is_searchable() {
            self.mode = UiMode::Search;
        }
    }

    /// Add a character to the active tab's query.
    ///
    /// # Details
    /// Only works in Search mode. Applies filters after adding character.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode != UiMode::Search {
            return;
        }
        match self.active_tab {
            Tab::Stations => self.station_query.push(ch),
            Tab::Sessions => self.session_query.push(ch),
            _ => return,
        }
        self.apply_filters();
    }

    /// Remove last character from the active tab's query.
    pub fn remove_search_char(&mut self) {
        if self.mode != UiMode::Search {
            return;
        }
        match self.active_tab {
            Tab::Stations => self.station_query.pop(),
            Tab::Sessions => self.session_query.pop(),
            _ => return,
        };
        self.apply_filters();
    }

    /// Toggle the map legend.
    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
    }

    /// Cycle the detail chart period.
    pub fn cycle_chart_period(&mut self) {
        self.chart_period = self.chart_period.next();
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
