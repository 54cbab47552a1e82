//! Recipe Card Component
//!
//! One recipe with its favorite toggle and collapsible
//! ingredients/steps sections.

use leptos::prelude::*;

use crate::components::StepList;
use crate::models::Recipe;
use crate::store::{
    store_toggle_favorite, store_toggle_section, use_app_store, AppStateStoreFields, Section,
};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let store = use_app_store();
    let id = recipe.id;

    let is_favorite = move || store.favorites().get().contains(&id);
    let is_expanded = move |section: Section| {
        store
            .expanded()
            .get()
            .iter()
            .any(|entry| *entry == (id, section))
    };

    let ingredients = recipe.ingredients.clone();
    let steps = recipe.steps.clone();

    view! {
        <div class="recipe-card">
            <div class="recipe-card-header">
                <h3>{recipe.title.clone()}</h3>
                <button
                    class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                    on:click=move |_| store_toggle_favorite(&store, id)
                >
                    "❤"
                </button>
            </div>

            <p class="recipe-description">{recipe.description.clone()}</p>
            <p class="recipe-meta">
                {format!("{} · {} min", recipe.difficulty.as_str(), recipe.time)}
            </p>

            <button
                class="section-toggle"
                on:click=move |_| store_toggle_section(&store, id, Section::Ingredients)
            >
                {move || if is_expanded(Section::Ingredients) { "▼ Ingredients" } else { "▶ Ingredients" }}
            </button>
            <Show when=move || is_expanded(Section::Ingredients)>
                <ul class="ingredient-list">
                    {ingredients.iter().map(|ing| view! { <li>{ing.clone()}</li> }).collect_view()}
                </ul>
            </Show>

            <button
                class="section-toggle"
                on:click=move |_| store_toggle_section(&store, id, Section::Steps)
            >
                {move || if is_expanded(Section::Steps) { "▼ Steps" } else { "▶ Steps" }}
            </button>
            <Show when=move || is_expanded(Section::Steps)>
                <StepList steps=steps.clone() />
            </Show>
        </div>
    }
}
