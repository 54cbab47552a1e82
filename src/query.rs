//! Query Pipeline
//!
//! Pure derivation of the visible recipe list from the loaded recipes
//! and the current search/filter/sort selection. Stages always run in
//! the order search -> filter -> sort, so filter and sort only see the
//! already-reduced candidate set.

use crate::models::{Difficulty, Recipe};

/// Recipes at or above this many minutes are not "quick"
pub const QUICK_MAX_MINUTES: u32 = 30;

// ========================
// Selectors
// ========================

/// Filter selector. Unknown selectors are unrepresentable: every control
/// carries one of these values, and the default is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Favorites,
    Difficulty(Difficulty),
    Quick,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Favorites => "favorites",
            FilterMode::Difficulty(level) => level.as_str(),
            FilterMode::Quick => "quick",
        }
    }

    /// Parse a selector label; anything unknown is the identity filter
    pub fn from_str(s: &str) -> Self {
        match s {
            "favorites" => FilterMode::Favorites,
            "easy" => FilterMode::Difficulty(Difficulty::Easy),
            "medium" => FilterMode::Difficulty(Difficulty::Medium),
            "hard" => FilterMode::Difficulty(Difficulty::Hard),
            "quick" => FilterMode::Quick,
            _ => FilterMode::All,
        }
    }
}

/// Sort selector. `None` is the canonical default: input order, untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    NameAsc,
    NameDesc,
    Time,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::Time => "time",
        }
    }

    /// Parse a selector label; one source variant labels the identity
    /// order "default", the other "none"
    pub fn from_str(s: &str) -> Self {
        match s {
            "name" | "name-asc" => SortOrder::NameAsc,
            "name-desc" => SortOrder::NameDesc,
            "time" => SortOrder::Time,
            _ => SortOrder::None,
        }
    }
}

// ========================
// Pipeline Stages
// ========================

/// Keep recipes whose title, description, or any single ingredient
/// contains the query, case-insensitively. A blank query is the identity.
pub fn search(data: &[Recipe], query: &str) -> Vec<Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return data.to_vec();
    }

    data.iter()
        .filter(|recipe| {
            let title_match = recipe.title.to_lowercase().contains(&query);
            let description_match = recipe.description.to_lowercase().contains(&query);
            let ingredient_match = recipe
                .ingredients
                .iter()
                .any(|ing| ing.to_lowercase().contains(&query));
            title_match || description_match || ingredient_match
        })
        .cloned()
        .collect()
}

/// Keep recipes matching the filter selector. `favorites` is the current
/// favorite-id list; stale ids in it simply match nothing.
pub fn filter(data: &[Recipe], mode: FilterMode, favorites: &[u32]) -> Vec<Recipe> {
    match mode {
        FilterMode::All => data.to_vec(),
        FilterMode::Favorites => data
            .iter()
            .filter(|recipe| favorites.contains(&recipe.id))
            .cloned()
            .collect(),
        FilterMode::Difficulty(level) => data
            .iter()
            .filter(|recipe| recipe.difficulty == level)
            .cloned()
            .collect(),
        FilterMode::Quick => data
            .iter()
            .filter(|recipe| recipe.time < QUICK_MAX_MINUTES)
            .cloned()
            .collect(),
    }
}

/// Return a sorted copy. `Vec::sort_by` is stable, so equal keys keep
/// their input order; the caller's slice is never mutated.
pub fn sort(data: &[Recipe], order: SortOrder) -> Vec<Recipe> {
    let mut sorted = data.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::NameAsc => sorted.sort_by(|a, b| title_key(a).cmp(&title_key(b))),
        SortOrder::NameDesc => sorted.sort_by(|a, b| title_key(b).cmp(&title_key(a))),
        SortOrder::Time => sorted.sort_by_key(|recipe| recipe.time),
    }
    sorted
}

// Case-insensitive stand-in for the browser's locale-aware compare
fn title_key(recipe: &Recipe) -> String {
    recipe.title.to_lowercase()
}

/// Full pipeline: search, then filter, then sort
pub fn derive(
    data: &[Recipe],
    search_text: &str,
    mode: FilterMode,
    order: SortOrder,
    favorites: &[u32],
) -> Vec<Recipe> {
    let found = search(data, search_text);
    let kept = filter(&found, mode, favorites);
    sort(&kept, order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_recipe(
        id: u32,
        title: &str,
        description: &str,
        time: u32,
        difficulty: Difficulty,
        ingredients: &[&str],
    ) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: description.to_string(),
            difficulty,
            time,
            ingredients: ingredients.iter().map(|ing| ing.to_string()).collect(),
            steps: vec![],
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            make_recipe(
                1,
                "Pasta",
                "Classic with olive oil",
                20,
                Difficulty::Easy,
                &["spaghetti", "garlic", "salt"],
            ),
            make_recipe(
                2,
                "Fried Rice",
                "Weeknight wok staple",
                35,
                Difficulty::Medium,
                &["rice", "egg", "peas"],
            ),
            make_recipe(
                3,
                "Beef Stew",
                "Slow-cooked beef and carrots",
                90,
                Difficulty::Hard,
                &["beef", "potatoes", "salt"],
            ),
        ]
    }

    fn ids(recipes: &[Recipe]) -> Vec<u32> {
        recipes.iter().map(|recipe| recipe.id).collect()
    }

    #[test]
    fn test_search_blank_is_identity() {
        let data = sample();
        assert_eq!(search(&data, ""), data);
        assert_eq!(search(&data, "   "), data);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = sample();
        let upper = search(&data, "PASTA");
        let lower = search(&data, "pasta");

        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![1]);
    }

    #[test]
    fn test_search_matches_title_description_and_ingredients() {
        let data = sample();

        // Title only
        assert_eq!(ids(&search(&data, "stew")), vec![3]);
        // Description only
        assert_eq!(ids(&search(&data, "olive")), vec![1]);
        // Single ingredient only
        assert_eq!(ids(&search(&data, "spaghetti")), vec![1]);
        // "rice" hits Fried Rice and nothing else
        assert_eq!(ids(&search(&data, "rice")), vec![2]);
    }

    #[test]
    fn test_search_trims_and_preserves_order() {
        let data = sample();
        // salt is an ingredient of 1 and 3; relative order is kept
        assert_eq!(ids(&search(&data, "  salt  ")), vec![1, 3]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let data = sample();
        assert_eq!(filter(&data, FilterMode::All, &[]), data);
    }

    #[test]
    fn test_filter_favorites() {
        let data = sample();
        // Favorites in toggle order; output keeps recipe order
        assert_eq!(ids(&filter(&data, FilterMode::Favorites, &[3, 1])), vec![1, 3]);
        // Stale ids match nothing
        assert!(filter(&data, FilterMode::Favorites, &[99]).is_empty());
    }

    #[test]
    fn test_filter_difficulty() {
        let data = sample();
        let kept = filter(&data, FilterMode::Difficulty(Difficulty::Medium), &[]);
        assert_eq!(ids(&kept), vec![2]);
    }

    #[test]
    fn test_filter_quick_keeps_under_threshold() {
        let data = sample();
        assert_eq!(ids(&filter(&data, FilterMode::Quick, &[])), vec![1]);
    }

    #[test]
    fn test_sort_none_keeps_input_order() {
        let data = sample();
        assert_eq!(sort(&data, SortOrder::None), data);
    }

    #[test]
    fn test_sort_by_name() {
        let data = sample();
        assert_eq!(ids(&sort(&data, SortOrder::NameAsc)), vec![3, 2, 1]);
        assert_eq!(ids(&sort(&data, SortOrder::NameDesc)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_time() {
        let data = sample();
        let shuffled = vec![data[2].clone(), data[0].clone(), data[1].clone()];
        assert_eq!(ids(&sort(&shuffled, SortOrder::Time)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let data = vec![
            make_recipe(4, "Omelette", "", 10, Difficulty::Easy, &[]),
            make_recipe(5, "pasta", "", 15, Difficulty::Easy, &[]),
            make_recipe(6, "Pasta", "", 25, Difficulty::Easy, &[]),
        ];

        // 5 and 6 compare equal ignoring case; both directions keep 5 first
        assert_eq!(ids(&sort(&data, SortOrder::NameAsc)), vec![4, 5, 6]);
        assert_eq!(ids(&sort(&data, SortOrder::NameDesc)), vec![5, 6, 4]);
    }

    #[test]
    fn test_derive_runs_search_then_filter_then_sort() {
        let data = sample();

        // salt -> [1, 3], name ascending -> Beef Stew before Pasta
        let derived = derive(&data, "salt", FilterMode::All, SortOrder::NameAsc, &[]);
        assert_eq!(ids(&derived), vec![3, 1]);

        // salt -> [1, 3], quick keeps only Pasta
        let derived = derive(&data, "salt", FilterMode::Quick, SortOrder::None, &[]);
        assert_eq!(ids(&derived), vec![1]);
    }

    #[test]
    fn test_derive_is_idempotent_and_pure() {
        let data = sample();
        let first = derive(&data, "e", FilterMode::Quick, SortOrder::NameAsc, &[1]);
        let second = derive(&data, "e", FilterMode::Quick, SortOrder::NameAsc, &[1]);

        assert_eq!(first, second);
        // Input is never mutated
        assert_eq!(data, sample());
    }

    #[test]
    fn test_selector_parsing_falls_back_to_identity() {
        assert_eq!(FilterMode::from_str("quick"), FilterMode::Quick);
        assert_eq!(
            FilterMode::from_str("medium"),
            FilterMode::Difficulty(Difficulty::Medium)
        );
        assert_eq!(FilterMode::from_str("seasonal"), FilterMode::All);

        assert_eq!(SortOrder::from_str("name"), SortOrder::NameAsc);
        assert_eq!(SortOrder::from_str("default"), SortOrder::None);
        assert_eq!(SortOrder::from_str("rating"), SortOrder::None);
    }

    #[test]
    fn test_selector_labels_round_trip() {
        for mode in [
            FilterMode::All,
            FilterMode::Favorites,
            FilterMode::Difficulty(Difficulty::Hard),
            FilterMode::Quick,
        ] {
            assert_eq!(FilterMode::from_str(mode.as_str()), mode);
        }
        for order in [
            SortOrder::None,
            SortOrder::NameAsc,
            SortOrder::NameDesc,
            SortOrder::Time,
        ] {
            assert_eq!(SortOrder::from_str(order.as_str()), order);
        }
    }

    #[test]
    fn test_quick_filter_counter_scenario() {
        let data = vec![
            make_recipe(1, "Pasta", "", 20, Difficulty::Easy, &[]),
            make_recipe(2, "Fried Rice", "", 35, Difficulty::Medium, &[]),
        ];

        let shown = derive(&data, "", FilterMode::Quick, SortOrder::None, &[]);
        assert_eq!(ids(&shown), vec![1]);

        let counter = format!("Showing {} of {} recipes", shown.len(), data.len());
        assert_eq!(counter, "Showing 1 of 2 recipes");
    }

    #[test]
    fn test_search_ignores_filter_and_sort_inputs() {
        let data = sample();
        // "rice" matches Fried Rice regardless of the rest of the selection
        for mode in [FilterMode::All, FilterMode::Difficulty(Difficulty::Medium)] {
            let derived = derive(&data, "RICE", mode, SortOrder::NameDesc, &[]);
            assert_eq!(ids(&derived), vec![2]);
        }
    }
}
