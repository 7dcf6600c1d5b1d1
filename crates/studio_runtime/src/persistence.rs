//! Panel layout persistence through an injected preference store.
//!
//! A stored layout that cannot be read is never surfaced to the user: it is logged and the
//! default table takes its place.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::{
    model::{default_panel_layout, PanelDescriptor, PANEL_LAYOUT_KEY},
    panel_manager::{first_duplicate_id, merge_missing_defaults},
};

/// Writes `panels` under [`PANEL_LAYOUT_KEY`] as a JSON array.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn persist_panel_layout(
    store: &dyn PrefsStore,
    panels: &[PanelDescriptor],
) -> Result<(), String> {
    save_pref_with(store, PANEL_LAYOUT_KEY, panels)
}

/// Loads the stored layout, falling back to [`default_panel_layout`] when nothing usable is stored.
///
/// Default panels missing from an otherwise valid layout are appended so new panels appear for
/// returning users.
pub fn load_panel_layout(store: &dyn PrefsStore) -> Vec<PanelDescriptor> {
    let mut panels = match load_pref_with::<_, Vec<PanelDescriptor>>(store, PANEL_LAYOUT_KEY) {
        Ok(Some(panels)) => panels,
        Ok(None) => return default_panel_layout(),
        Err(err) => {
            logging::warn!("panel layout load failed, using defaults: {err}");
            return default_panel_layout();
        }
    };

    if let Some(id) = first_duplicate_id(&panels) {
        logging::warn!("panel layout has duplicate id `{id}`, using defaults");
        return default_panel_layout();
    }

    merge_missing_defaults(&mut panels, default_panel_layout());
    panels
}

/// Removes the stored layout and returns the default table.
///
/// A failed delete is logged; the defaults are returned either way.
pub fn reset_panel_layout(store: &dyn PrefsStore) -> Vec<PanelDescriptor> {
    if let Err(err) = store.delete_pref(PANEL_LAYOUT_KEY) {
        logging::warn!("panel layout reset failed: {err}");
    }
    default_panel_layout()
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingStore;

    impl PrefsStore for FailingStore {
        fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }

        fn delete_pref(&self, _key: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }
    }

    #[test]
    fn empty_store_yields_default_layout() {
        assert_eq!(
            load_panel_layout(&MemoryPrefsStore::default()),
            default_panel_layout()
        );
    }

    #[test]
    fn store_failures_fall_back_or_propagate() {
        assert_eq!(load_panel_layout(&FailingStore), default_panel_layout());
        assert_eq!(reset_panel_layout(&FailingStore), default_panel_layout());
        assert_eq!(
            persist_panel_layout(&FailingStore, &default_panel_layout()),
            Err("quota exceeded".to_string())
        );
    }

    #[test]
    fn wrong_shape_json_falls_back_to_defaults() {
        let store = MemoryPrefsStore::with_raw(PANEL_LAYOUT_KEY, r#"{"panels":[]}"#);
        assert_eq!(load_panel_layout(&store), default_panel_layout());
    }

    #[test]
    fn duplicate_ids_fall_back_to_defaults() {
        let mut panels = default_panel_layout();
        panels[1].id = panels[0].id.clone();
        panels[1].position.x = 500;
        let store = MemoryPrefsStore::default();
        persist_panel_layout(&store, &panels).expect("persist");
        assert_eq!(load_panel_layout(&store), default_panel_layout());
    }

    #[test]
    fn missing_default_panels_are_appended() {
        let mut panels = default_panel_layout();
        panels.retain(|p| p.id.as_str() != "export");
        panels[0].position.x = 200;
        let store = MemoryPrefsStore::default();
        persist_panel_layout(&store, &panels).expect("persist");

        let loaded = load_panel_layout(&store);
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded[0].position.x, 200);
        assert_eq!(loaded[4].id.as_str(), "export");
    }
}
