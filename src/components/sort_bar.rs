//! Sort Bar Component
//!
//! Mutually-exclusive sort order buttons.

use leptos::prelude::*;

use crate::query::SortOrder;
use crate::store::{store_set_sort, use_app_store, AppStateStoreFields};

/// Sort options in display order
pub const SORT_ORDERS: &[(SortOrder, &str)] = &[
    (SortOrder::None, "Default"),
    (SortOrder::NameAsc, "Name A-Z"),
    (SortOrder::NameDesc, "Name Z-A"),
    (SortOrder::Time, "Time"),
];

/// Sort selector buttons
#[component]
pub fn SortBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="sort-bar">
            {SORT_ORDERS.iter().map(|(order, label)| {
                let order = *order;
                let is_selected = move || store.sort().get() == order;
                view! {
                    <button
                        class=move || if is_selected() { "sort-btn active" } else { "sort-btn" }
                        on:click=move |_| store_set_sort(&store, order)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
