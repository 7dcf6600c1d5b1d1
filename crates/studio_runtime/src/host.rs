//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

use std::rc::Rc;

use leptos::{logging, Callable, Callback, SignalGetUntracked};
use platform_host::PrefsStore;
use platform_host_web::{host_strategy_name, prefs_store};
use studio_effects::{build_effects_config, EffectsConfig, EffectsPolicy, SurfaceTheme};

use crate::{
    model::{PanelDescriptor, StudioState, Viewport},
    persistence,
    reducer::{RuntimeEffect, StudioAction},
    runtime_context::StudioRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for studio runtime side effects.
pub struct StudioHostContext {
    prefs: Rc<dyn PrefsStore>,
    policy: EffectsPolicy,
    host_strategy_name: &'static str,
}

impl Default for StudioHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()), EffectsPolicy::default())
    }
}

impl StudioHostContext {
    /// Builds a host bundle around an explicit preference store and effects policy.
    pub fn new(prefs: Rc<dyn PrefsStore>, policy: EffectsPolicy) -> Self {
        Self {
            prefs,
            policy,
            host_strategy_name: host_strategy_name(),
        }
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Loads the stored layout and the current viewport into the reducer.
    pub fn hydrate(&self, dispatch: Callback<StudioAction>) {
        dispatch.call(self.hydrate_action(self.viewport()));
    }

    /// Builds the single mount-time action for `viewport`.
    ///
    /// Layout and viewport arrive together so no intermediate clamp of the default table can
    /// queue a write over the stored layout.
    pub fn hydrate_action(&self, viewport: Viewport) -> StudioAction {
        StudioAction::HydrateLayout {
            panels: self.load_layout(),
            viewport,
        }
    }

    /// Derives stylesheet, particle preset, and summary for the current state and theme.
    pub fn effects_config(&self, state: &StudioState, theme: &SurfaceTheme) -> EffectsConfig {
        build_effects_config(
            &state.effects,
            self.is_mobile(state.viewport),
            theme,
            &self.policy,
        )
    }

    /// Loads the persisted panel layout, or the defaults.
    pub fn load_layout(&self) -> Vec<PanelDescriptor> {
        persistence::load_panel_layout(self.prefs.as_ref())
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: StudioRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistLayout => {
                let panels = runtime.state.get_untracked().panels;
                if let Err(err) = persistence::persist_panel_layout(self.prefs.as_ref(), &panels) {
                    logging::warn!("persist panel layout failed: {err}");
                }
            }
            RuntimeEffect::ClearPersistedLayout => {
                persistence::reset_panel_layout(self.prefs.as_ref());
            }
        }
    }

    /// Returns the browser viewport, or the default 1280x800 viewport off-browser.
    pub fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let fallback = Viewport::default();
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback.height);
                return Viewport { width, height };
            }
        }

        Viewport::default()
    }

    /// Whether `viewport` is mobile-class under the configured policy.
    pub fn is_mobile(&self, viewport: Viewport) -> bool {
        self.policy.is_mobile_width(viewport.width)
    }
}
