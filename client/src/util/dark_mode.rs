//! Theme preference: read, apply, and toggle.
//!
//! The preference is stored as `"dark"` / `"light"` under `THEME_STORAGE_KEY`
//! and applied as a `data-theme` attribute on `<html>`. With no stored
//! preference the system `prefers-color-scheme` decides.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort; SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage::KeyValueStore;

pub const THEME_STORAGE_KEY: &str = "fishcast_theme";

fn parse_preference(raw: &str) -> Option<bool> {
    match raw {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Read the dark mode preference from `store`, falling back to the system
/// preference when nothing valid is stored.
pub fn read_preference(store: &dyn KeyValueStore) -> bool {
    if let Some(enabled) = store.get(THEME_STORAGE_KEY).ok().flatten().as_deref().and_then(parse_preference) {
        return enabled;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it, and persist the new preference.
pub fn toggle(store: &dyn KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = store.set(THEME_STORAGE_KEY, if next { "dark" } else { "light" }) {
        log::warn!("theme preference not persisted: {e}");
    }
    next
}
