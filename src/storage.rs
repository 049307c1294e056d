//! LocalStorage persistence bridge
//!
//! The full list is written under a single fixed key on every change, and
//! read back once at startup. Absent or unreadable data loads as an empty
//! list rather than an error.

use crate::store::TodoList;

/// LocalStorage key (used only in wasm32)
///
/// Kept as plain `"todos"` so lists written by earlier versions of the
/// widget keep loading.
#[allow(dead_code)]
pub const STORAGE_KEY: &str = "todos";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Load the list from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load() -> TodoList {
    if let Some(storage) = local_storage() {
        if let Ok(Some(json)) = storage.get_item(STORAGE_KEY) {
            match TodoList::from_json(&json) {
                Ok(list) => {
                    log::info!("Loaded {} todos", list.len());
                    return list;
                }
                Err(err) => {
                    log::warn!("Stored todos unreadable ({}), starting empty", err);
                    return TodoList::new();
                }
            }
        }
    }

    log::info!("No stored todos, starting empty");
    TodoList::new()
}

/// Save the list to LocalStorage (WASM only), replacing prior content
#[cfg(target_arch = "wasm32")]
pub fn save(list: &TodoList) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = list.to_json() {
            let _ = storage.set_item(STORAGE_KEY, &json);
            log::info!("Saved {} todos", list.len());
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> TodoList {
    TodoList::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_list: &TodoList) {
    // No-op for native
}
