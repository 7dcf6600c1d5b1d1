use platform_host::{MemoryPrefsStore, PrefsStore};

use crate::WebPrefsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters (`localStorage`).
    Browser,
    /// In-process adapters for headless previews and native runs; nothing outlives the process.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

#[derive(Debug, Clone)]
/// Preference store selected by [`selected_host_strategy`].
pub enum PrefsStoreAdapter {
    /// `localStorage` store.
    Browser(WebPrefsStore),
    /// Process-local store.
    Headless(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Headless(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Headless(store) => store.delete_pref(key),
        }
    }
}

/// Builds the preference store for the active host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(MemoryPrefsStore::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_name_matches_selected_adapter() {
        let adapter = prefs_store();
        match (selected_host_strategy(), &adapter) {
            (HostStrategy::Browser, PrefsStoreAdapter::Browser(_)) => {
                assert_eq!(host_strategy_name(), "browser")
            }
            (HostStrategy::Headless, PrefsStoreAdapter::Headless(_)) => {
                assert_eq!(host_strategy_name(), "headless")
            }
            (strategy, adapter) => panic!("mismatched adapter {adapter:?} for {strategy:?}"),
        }
    }
}
