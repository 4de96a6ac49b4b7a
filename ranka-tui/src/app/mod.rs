use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ranka_types::Profile;

use crate::store::ProfileStore;
use crate::{log_debug, log_refresh, log_search};

pub mod state;
pub use state::*;
pub mod handlers;

impl App {
    pub fn new() -> Self {
        Self::with_profiles(crate::data::seed_profiles())
    }

    /// Build an app over an arbitrary profile collection. Tests use this to
    /// control the store contents.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            running: true,
            store: ProfileStore::new(profiles),
            current_tab: Tab::Leaderboard,
            search_state: SearchState::new(),
            last_refresh: Local::now(),
            color_scheme: ranka_types::ColorScheme::default(),
            show_help: false,
            input_mode: InputMode::Navigation,
            log_config: crate::logging::LogConfig::default(),
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.current_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.switch_tab(self.current_tab.previous());
    }

    fn switch_tab(&mut self, new_tab: Tab) {
        log_debug!(self.log_config, "switched to {:?} tab", new_tab);
        self.current_tab = new_tab;
        // The search input has focus whenever the Search tab opens; the
        // leaderboard is navigation-only.
        self.input_mode = match new_tab {
            Tab::Leaderboard => InputMode::Navigation,
            Tab::Search => InputMode::Typing,
        };
    }

    /// Focus the search input (Search tab, navigation mode).
    pub fn enter_search_input(&mut self) {
        self.input_mode = InputMode::Typing;
    }

    /// Unfocus the search input without clearing an in-progress query.
    pub fn exit_search_input(&mut self) {
        self.input_mode = InputMode::Navigation;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.search_state.query.push(c);
        self.rerun_search();
    }

    pub fn pop_query_char(&mut self) {
        self.search_state.query.pop();
        self.rerun_search();
    }

    pub fn clear_query(&mut self) {
        self.search_state.query.clear();
        self.rerun_search();
    }

    /// Re-derive search results from the store and the current query,
    /// resetting the highlight to the first hit.
    fn rerun_search(&mut self) {
        self.search_state.results = self.store.search(&self.search_state.query);
        let highlight = if self.search_state.results.is_empty() {
            None
        } else {
            Some(0)
        };
        self.search_state.list_state.select(highlight);
        log_search!(
            self.log_config,
            "query={:?}, hits={}",
            self.search_state.query,
            self.search_state.results.len()
        );
    }

    pub fn select_next_result(&mut self) {
        let len = self.search_state.results.len();
        if len == 0 {
            return;
        }
        let next = match self.search_state.list_state.selected() {
            Some(index) => (index + 1).min(len - 1),
            None => 0,
        };
        self.search_state.list_state.select(Some(next));
    }

    pub fn select_previous_result(&mut self) {
        if self.search_state.results.is_empty() {
            return;
        }
        let previous = self
            .search_state
            .list_state
            .selected()
            .map(|index| index.saturating_sub(1))
            .unwrap_or(0);
        self.search_state.list_state.select(Some(previous));
    }

    /// Promote the highlighted search result to the selected profile and
    /// clear the active query.
    pub fn select_highlighted_result(&mut self) {
        let Some(profile) = self.search_state.highlighted_result().cloned() else {
            return;
        };
        log_search!(self.log_config, "selected profile: {}", profile.username);
        self.search_state.selected_profile = Some(profile);
        self.clear_query();
        self.input_mode = InputMode::Navigation;
    }

    /// Perturb every profile in the store and stamp the refresh time.
    pub fn refresh_leaderboard(&mut self) {
        let mut rng = rand::rng();
        self.store.refresh_all(&mut rng);
        self.last_refresh = Local::now();
        log_refresh!(self.log_config, "bulk refresh of {} profiles", self.store.len());
        // Keep any active search results consistent with the store
        if !self.search_state.query.is_empty() {
            self.rerun_search();
        }
    }

    /// Perturb the selected profile from its canonical store entry.
    ///
    /// A selection whose username is missing from the store is left as-is
    /// (silent no-op); the refresh timestamp advances either way.
    pub fn refresh_selected(&mut self) {
        let mut rng = rand::rng();
        if let Some(selected) = &self.search_state.selected_profile {
            if let Some(updated) = self.store.refresh_profile(&selected.username, &mut rng) {
                log_refresh!(self.log_config, "single refresh: {}", updated.username);
                self.search_state.selected_profile = Some(updated);
            }
        }
        self.last_refresh = Local::now();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key_event(self, key)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
