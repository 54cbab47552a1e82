//! Favorites Persistence
//!
//! localStorage round-trip for the favorite recipe ids. A missing or
//! corrupt persisted value is treated as an empty set, never an error.

use web_sys::Storage;

const FAVORITES_KEY: &str = "recipeFavorites";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Decode the persisted JSON array; anything unparseable is an empty list
fn decode(raw: &str) -> Vec<u32> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode(favorites: &[u32]) -> String {
    // Serializing a slice of integers cannot fail
    serde_json::to_string(favorites).unwrap_or_else(|_| "[]".to_string())
}

/// Read the persisted favorite ids, rehydrated once at startup
pub fn load_favorites() -> Vec<u32> {
    local_storage()
        .and_then(|storage| storage.get_item(FAVORITES_KEY).ok().flatten())
        .map(|raw| decode(&raw))
        .unwrap_or_default()
}

/// Persist the favorite ids; a no-op when storage is unavailable
pub fn save_favorites(favorites: &[u32]) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(FAVORITES_KEY, &encode(favorites));
    }
}

/// Toggle one id in place: remove if present, append otherwise
pub fn toggle(favorites: &mut Vec<u32>, id: u32) {
    if let Some(index) = favorites.iter().position(|fav| *fav == id) {
        favorites.remove(index);
    } else {
        favorites.push(id);
    }
}
