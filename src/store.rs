//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! is the single owner of the favorites set and the view state; all
//! mutations go through the helper functions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Recipe;
use crate::query::{FilterMode, SortOrder};
use crate::storage;

/// A collapsible section of a recipe card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Ingredients,
    Steps,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Loaded recipes, immutable for the session
    pub recipes: Vec<Recipe>,
    /// Favorite recipe ids, persisted across reloads
    pub favorites: Vec<u32>,
    /// Committed search text (post-debounce)
    pub search_text: String,
    pub filter: FilterMode,
    pub sort: SortOrder,
    /// Expanded card sections; everything not listed is collapsed
    pub expanded: Vec<(u32, Section)>,
}

impl AppState {
    /// Session-start state: favorites rehydrated, everything else default
    pub fn new() -> Self {
        Self {
            favorites: storage::load_favorites(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle a recipe's favorite flag and persist the updated set
pub fn store_toggle_favorite(store: &AppStore, id: u32) {
    // The subfield must outlive its write guard
    let field = store.favorites();
    let mut favorites = field.write();
    storage::toggle(&mut favorites, id);
    storage::save_favorites(&favorites);
}

/// Toggle one card section between expanded and collapsed
pub fn store_toggle_section(store: &AppStore, id: u32, section: Section) {
    let field = store.expanded();
    let mut expanded = field.write();
    if let Some(index) = expanded.iter().position(|entry| *entry == (id, section)) {
        expanded.remove(index);
    } else {
        expanded.push((id, section));
    }
}

pub fn store_set_filter(store: &AppStore, mode: FilterMode) {
    store.filter().set(mode);
}

pub fn store_set_sort(store: &AppStore, order: SortOrder) {
    store.sort().set(order);
}

/// Commit debounced search text into the derivation inputs
pub fn store_commit_search(store: &AppStore, text: String) {
    store.search_text().set(text);
}

/// Reset the search field to empty (bypasses the debounce)
pub fn store_clear_search(store: &AppStore) {
    store.search_text().set(String::new());
}
