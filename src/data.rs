//! Recipe Data Seam
//!
//! Frontend binding to the recipe list the hosting page supplies as
//! `window.recipes` before the app mounts.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::models::Recipe;

/// Load the externally supplied recipe list. An absent `window.recipes`
/// is an empty list, not an error.
pub async fn load_recipes() -> Result<Vec<Recipe>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let value = Reflect::get(&window, &JsValue::from_str("recipes"))
        .map_err(|_| "window.recipes is unreadable".to_string())?;

    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
