//! Runtime provider and context wiring for the studio shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and boot
//! hydration. UI composition stays in [`crate::components`].

use leptos::*;
use studio_effects::{EffectsConfig, RawSurfaceTheme, SurfaceTheme};

use crate::{
    host::StudioHostContext,
    model::{InteractionState, StudioState},
    reducer::{reduce_studio, RuntimeEffect, StudioAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading studio runtime state and dispatching [`StudioAction`] values.
pub struct StudioRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<StudioHostContext>,
    /// Reactive studio state signal.
    pub state: RwSignal<StudioState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Colours applied to effects-aware surfaces.
    pub theme: RwSignal<SurfaceTheme>,
    /// Effects derived from the current toggles, viewport, and theme.
    pub effects_config: Memo<EffectsConfig>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<StudioAction>,
}

impl StudioRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: StudioAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`StudioRuntimeContext`] to descendant components and hydrates the stored layout.
pub fn StudioProvider(
    /// Host bundle; defaults to the build's selected preference store and the default policy.
    #[prop(optional)]
    host: Option<StudioHostContext>,
    /// Editor colours; unset or unparsable slots use the default palette.
    #[prop(optional)]
    theme: Option<RawSurfaceTheme>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(StudioState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let theme = create_rw_signal(theme.as_ref().map(SurfaceTheme::from).unwrap_or_default());

    let dispatch = Callback::new(move |action: StudioAction| {
        let mut studio = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_studio = studio.clone();
        let previous_ui = ui.clone();

        match reduce_studio(&mut studio, &mut ui, action) {
            Ok(new_effects) => {
                if studio != previous_studio {
                    state.set(studio);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("studio reducer error: {err}"),
        }
    });

    let effects_config = create_memo(move |_| {
        host.with_value(|host| {
            state.with(|studio| theme.with(|theme| host.effects_config(studio, theme)))
        })
    });

    let runtime = StudioRuntimeContext {
        host,
        state,
        interaction,
        effects,
        theme,
        effects_config,
        dispatch,
    };

    provide_context(runtime);

    host.get_value().hydrate(dispatch);
    drain_runtime_effects(runtime);

    children().into_view()
}

/// Runs queued reducer effects in dispatch order whenever the queue grows.
fn drain_runtime_effects(runtime: StudioRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Take the batch first; anything dispatched while running it queues for the next pass.
        let batch = runtime.effects.try_update(std::mem::take).unwrap_or_default();
        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

/// Returns the current [`StudioRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`StudioProvider`].
pub fn use_studio_runtime() -> StudioRuntimeContext {
    use_context::<StudioRuntimeContext>().expect("StudioRuntimeContext not provided")
}
