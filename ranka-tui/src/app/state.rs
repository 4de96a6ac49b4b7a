use chrono::{DateTime, Local};
use ranka_types::{ColorScheme, Profile};
use ratatui::widgets::ListState;

use crate::store::ProfileStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation, // Browsing content, shortcuts active
    Typing,     // In the search input, shortcuts disabled
}

/// Main application state
pub struct App {
    pub running: bool,
    pub store: ProfileStore,
    pub current_tab: Tab,
    pub search_state: SearchState,
    /// Wall-clock time of the most recent refresh (bulk or single).
    pub last_refresh: DateTime<Local>,
    pub color_scheme: ColorScheme,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub log_config: crate::logging::LogConfig,
}

/// Search tab state
pub struct SearchState {
    /// Live query; refilters on every keystroke.
    pub query: String,
    /// Profiles matching the current query, in store order.
    pub results: Vec<Profile>,
    pub list_state: ListState,
    /// Snapshot of the profile shown in the detail panel, if any.
    /// Replaced wholesale by a single refresh; never patched in place.
    pub selected_profile: Option<Profile>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            list_state: ListState::default(),
            selected_profile: None,
        }
    }

    /// The result currently highlighted in the list, if the list is
    /// non-empty and the highlight is in range.
    pub fn highlighted_result(&self) -> Option<&Profile> {
        self.list_state
            .selected()
            .and_then(|index| self.results.get(index))
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Leaderboard,
    Search,
}

impl Tab {
    pub fn next(&self) -> Self {
        match self {
            Tab::Leaderboard => Tab::Search,
            Tab::Search => Tab::Leaderboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Leaderboard => Tab::Search,
            Tab::Search => Tab::Leaderboard,
        }
    }
}
