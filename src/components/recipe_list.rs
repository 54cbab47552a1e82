//! Recipe List Component
//!
//! The derived recipe cards, keyed by id, with an empty-state message.

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::models::Recipe;

#[component]
pub fn RecipeList(visible: Memo<Vec<Recipe>>) -> impl IntoView {
    view! {
        <div class="recipe-list">
            <For
                each=move || visible.get()
                key=|recipe| recipe.id
                children=move |recipe| view! { <RecipeCard recipe=recipe /> }
            />

            {move || if visible.get().is_empty() {
                view! { <div class="no-recipes-message">"No recipes found"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
