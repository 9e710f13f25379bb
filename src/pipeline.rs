//! Lead View Pipeline
//!
//! Pure composition of the qualification, search, category, and bookmark
//! predicates with sorting and windowing. The view is recomputed in full
//! from (lead set, view state, bookmark set) on every change; the
//! pipeline holds no state of its own.

use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::filter::{matches_category, matches_search, qualifies, ALL_CATEGORIES};
use crate::sorter::sort_leads;
use crate::types::{Lead, SortKey};
use crate::window::Window;

/// Presentation-owned view parameters. The mutators encode the window
/// reset policy: filter changes (search, category, bookmarks-only)
/// reset the window; a sort-key change keeps the current size.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search: String,
    pub category: String,
    pub sort_key: SortKey,
    pub window: Window,
    pub bookmarks_only: bool,
}

impl ViewState {
    pub fn new(config: &Config) -> Self {
        ViewState {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_key: SortKey::Cost,
            window: Window::new(config.window_initial, config.window_step),
            bookmarks_only: false,
        }
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        self.window.reset();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.window.reset();
    }

    pub fn set_bookmarks_only(&mut self, on: bool) {
        self.bookmarks_only = on;
        self.window.reset();
    }

    /// Sort-key changes do not reset the window
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn show_more(&mut self) {
        self.window.grow();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(&Config::default())
    }
}

/// Filtered, sorted view over the full lead set
#[derive(Debug, Clone)]
pub struct LeadView {
    matched: Vec<Lead>,
    visible: usize,
}

impl LeadView {
    /// Full qualified-and-filtered sequence in sort order
    pub fn matched(&self) -> &[Lead] {
        &self.matched
    }

    /// Currently windowed prefix
    pub fn visible(&self) -> &[Lead] {
        &self.matched[..self.visible]
    }

    /// Total match count across the whole sequence
    pub fn total_matches(&self) -> usize {
        self.matched.len()
    }
}

/// Build the view: conjunctive filtering, stable sort, window prefix.
/// Nothing on this path can fail; every predicate and comparator is
/// total over normalized leads.
pub fn build_view(
    leads: &[Lead],
    view: &ViewState,
    bookmarks: &BookmarkStore,
    min_value: f64,
) -> LeadView {
    let mut matched: Vec<Lead> = leads
        .iter()
        .filter(|lead| qualifies(lead, min_value))
        .filter(|lead| matches_search(lead, &view.search))
        .filter(|lead| matches_category(lead, &view.category))
        .filter(|lead| !view.bookmarks_only || bookmarks.contains(&lead.id))
        .cloned()
        .collect();

    sort_leads(&mut matched, view.sort_key);

    let visible = view.window.apply(&matched).len();
    LeadView { matched, visible }
}
