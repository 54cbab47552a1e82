//! UI Components
//!
//! Reusable Leptos components.

mod search_bar;
mod filter_bar;
mod sort_bar;
mod recipe_list;
mod recipe_card;
mod step_list;

pub use search_bar::SearchBar;
pub use filter_bar::FilterBar;
pub use sort_bar::SortBar;
pub use recipe_list::RecipeList;
pub use recipe_card::RecipeCard;
pub use step_list::StepList;
