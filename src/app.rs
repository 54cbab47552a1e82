//! Recipe Shelf App
//!
//! Main application component: loads recipes, derives the visible list
//! through the query pipeline, and lays out the controls above the
//! card list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{FilterBar, RecipeList, SearchBar, SortBar};
use crate::data;
use crate::query;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    // Load recipes once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match data::load_recipes().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} recipes", loaded.len()).into(),
                    );
                    store.recipes().set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Recipe load failed: {}", e).into());
                }
            }
        });
    });

    // Derived visible list, recomputed from scratch on every state change
    let visible = Memo::new(move |_| {
        query::derive(
            &store.recipes().get(),
            &store.search_text().get(),
            store.filter().get(),
            store.sort().get(),
            &store.favorites().get(),
        )
    });

    view! {
        <div class="app-layout">
            <h1>"Recipe Shelf"</h1>

            <SearchBar />

            <div class="control-bars">
                <FilterBar />
                <SortBar />
            </div>

            <p class="recipe-counter">
                {move || format!(
                    "Showing {} of {} recipes",
                    visible.get().len(),
                    store.recipes().get().len(),
                )}
            </p>

            <RecipeList visible=visible />
        </div>
    }
}
