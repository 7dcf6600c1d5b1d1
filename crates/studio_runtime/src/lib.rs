//! Floating-panel runtime for the orbital studio editor.
//!
//! Panel layout lives in a reducer ([`reduce_studio`]) that emits [`RuntimeEffect`] intents; the
//! host bundle executes them against an injected preference store. Leptos components in
//! [`components`] render the panels and the effects-aware preview surface.

pub mod components;
pub mod host;
pub mod model;
pub mod panel_manager;
pub mod persistence;
pub mod reducer;
mod runtime_context;

pub use components::{
    use_studio_runtime, StudioProvider, StudioRuntimeContext, StudioShell, EFFECTS_PANEL_ID,
};
pub use host::StudioHostContext;
pub use studio_effects::RawSurfaceTheme;
pub use model::*;
pub use panel_manager::{clamp_layout, clamp_panel_to_viewport, clamp_position};
pub use persistence::{load_panel_layout, persist_panel_layout, reset_panel_layout};
pub use reducer::{reduce_studio, ReducerError, RuntimeEffect, StudioAction};
