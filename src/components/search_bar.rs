//! Search Bar Component
//!
//! Search input committing through a single-slot debounce timer, with a
//! clear button shown only while the box is non-empty.

use leptos::prelude::*;
use leptos_debounce::DebounceSlot;

use crate::store::{store_clear_search, store_commit_search, use_app_store};

/// Delay between the last keystroke and the search commit
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    // Draft text tracks the input directly; the store only sees it
    // after the debounce fires
    let (draft, set_draft) = signal(String::new());
    let debounce = DebounceSlot::new(SEARCH_DEBOUNCE_MS);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_draft.set(value.clone());
        debounce.schedule(move || store_commit_search(&store, value));
    };

    let clear = move || {
        debounce.cancel();
        set_draft.set(String::new());
        store_clear_search(&store);
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search recipes..."
                prop:value=move || draft.get()
                on:input=on_input
            />
            <Show when=move || !draft.get().is_empty()>
                <button class="clear-search-btn" on:click=move |_| clear()>"×"</button>
            </Show>
        </div>
    }
}
