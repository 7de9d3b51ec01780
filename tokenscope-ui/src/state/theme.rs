//! Theme Persistence
//!
//! Loads, stores and applies the dark-mode preference.

use tokenscope_core::{encode_dark_mode, parse_dark_mode, DARK_MODE_KEY};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Stored preference; absent or malformed means light mode
pub fn load_dark_mode() -> bool {
    let stored = storage().and_then(|s| s.get_item(DARK_MODE_KEY).ok().flatten());

    match parse_dark_mode(stored.as_deref()) {
        Ok(dark) => dark,
        Err(raw) => {
            web_sys::console::warn_1(
                &format!("Ignoring malformed {} value: {:?}", DARK_MODE_KEY, raw).into(),
            );
            false
        }
    }
}

/// Persist the preference
pub fn save_dark_mode(dark: bool) {
    if let Some(storage) = storage() {
        if storage.set_item(DARK_MODE_KEY, &encode_dark_mode(dark)).is_err() {
            web_sys::console::error_1(&"Failed to persist dark mode".into());
        }
    }
}

/// Toggle the `dark` class on the root element
pub fn apply_theme(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_preference_survives_reload() {
        save_dark_mode(true);
        assert!(load_dark_mode());
        save_dark_mode(false);
        assert!(!load_dark_mode());
    }

    #[wasm_bindgen_test]
    fn test_malformed_preference_is_light() {
        if let Some(storage) = storage() {
            storage.set_item(DARK_MODE_KEY, "maybe").unwrap();
        }
        assert!(!load_dark_mode());
    }

    #[wasm_bindgen_test]
    fn test_apply_theme_toggles_class() {
        apply_theme(true);
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();
        assert!(root.class_list().contains("dark"));

        apply_theme(false);
        assert!(!root.class_list().contains("dark"));
    }
}
