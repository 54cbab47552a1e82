//! Filter Bar Component
//!
//! Mutually-exclusive filter buttons over the recipe list.

use leptos::prelude::*;

use crate::models::Difficulty;
use crate::query::FilterMode;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Filter options in display order
pub const FILTERS: &[(FilterMode, &str)] = &[
    (FilterMode::All, "All"),
    (FilterMode::Favorites, "Favorites"),
    (FilterMode::Difficulty(Difficulty::Easy), "Easy"),
    (FilterMode::Difficulty(Difficulty::Medium), "Medium"),
    (FilterMode::Difficulty(Difficulty::Hard), "Hard"),
    (FilterMode::Quick, "Quick"),
];

/// Filter selector buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|(mode, label)| {
                let mode = *mode;
                let is_selected = move || store.filter().get() == mode;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store_set_filter(&store, mode)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
