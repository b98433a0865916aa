//! # Search Section State
//!
//! State for the "Find an Orphanage" section: the two query fields, the last
//! result set, and the flags distinguishing "not yet searched", "searching",
//! and "no results" from each other.

use shared::Orphanage;
use std::time::{Duration, Instant};

/// Fixed duration of the simulated search round-trip
pub const SEARCH_DELAY: Duration = Duration::from_millis(500);

/// State for the orphanage directory search
#[derive(Debug)]
pub struct SearchSectionState {
    /// Free-text name query
    pub name_query: String,

    /// Free-text city/country query
    pub location_query: String,

    /// Results of the last completed search
    pub results: Vec<Orphanage>,

    /// Whether a search has ever been run; gates the results/empty states
    pub has_searched: bool,

    /// When the in-flight search started; Some while the simulated delay runs
    pub search_started: Option<Instant>,
}

impl SearchSectionState {
    /// Create search state with no search performed yet
    pub fn new() -> Self {
        Self {
            name_query: String::new(),
            location_query: String::new(),
            results: Vec::new(),
            has_searched: false,
            search_started: None,
        }
    }

    /// Whether the simulated search delay is running
    pub fn is_searching(&self) -> bool {
        self.search_started.is_some()
    }

    /// Start a search over the current queries. No-op while one is pending.
    pub fn begin_search(&mut self) {
        if !self.is_searching() {
            self.has_searched = true;
            self.search_started = Some(Instant::now());
        }
    }

    /// Whether the pending search's fixed delay has elapsed
    pub fn search_elapsed(&self) -> bool {
        self.search_started
            .map(|started| started.elapsed() >= SEARCH_DELAY)
            .unwrap_or(false)
    }

    /// Finish the pending search with its filtered results
    pub fn complete_search(&mut self, results: Vec<Orphanage>) {
        self.results = results;
        self.search_started = None;
    }

    /// Clear the queries and show the whole directory; used by the
    /// empty-state "View All Orphanages" button
    pub fn view_all(&mut self, all: Vec<Orphanage>) {
        self.name_query.clear();
        self.location_query.clear();
        self.results = all;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seed;

    #[test]
    fn test_no_results_is_distinct_from_not_searched() {
        let mut search = SearchSectionState::new();
        assert!(!search.has_searched);

        search.name_query = "zzz".to_string();
        search.begin_search();
        search.complete_search(Vec::new());

        // Empty results after a search is the "no results" terminal state
        assert!(search.has_searched);
        assert!(search.results.is_empty());
        assert!(!search.is_searching());
    }

    #[test]
    fn test_begin_search_is_not_reentrant() {
        let mut search = SearchSectionState::new();
        search.begin_search();
        let first_started = search.search_started;

        search.begin_search();
        assert_eq!(search.search_started, first_started);
    }

    #[test]
    fn test_view_all_clears_queries_and_shows_everything() {
        let mut search = SearchSectionState::new();
        search.name_query = "zzz".to_string();
        search.location_query = "nowhere".to_string();
        search.begin_search();
        search.complete_search(Vec::new());

        search.view_all(seed::orphanages());

        assert!(search.name_query.is_empty());
        assert!(search.location_query.is_empty());
        assert_eq!(search.results.len(), 4);
    }
}
