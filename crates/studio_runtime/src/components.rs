//! Studio shell UI composition and interaction surfaces.

mod dock;
mod effects_panel;
mod panel;

use leptos::*;
use studio_effects::{css::PARTICLES_CLASS, surface_classes};

use self::{dock::PanelDock, effects_panel::EffectsPanelBody, panel::FloatingPanel};

use crate::{
    host::StudioHostContext,
    model::{PanelId, PointerPosition},
    reducer::StudioAction,
};

pub use crate::runtime_context::{use_studio_runtime, StudioProvider, StudioRuntimeContext};

/// Id of the panel that hosts the built-in effect toggles.
pub const EFFECTS_PANEL_ID: &str = "effects";

#[component]
/// Renders the preview surface, the floating panel layer, and the dock.
///
/// Panels other than the effects panel render `panel_body` when supplied, otherwise their title.
pub fn StudioShell(
    /// Body renderer for editor panels keyed by panel id.
    #[prop(optional)]
    panel_body: Option<Callback<PanelId, View>>,
    /// Content shown on the effects-aware preview surface.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let runtime = use_studio_runtime();
    let state = runtime.state;
    let config = runtime.effects_config;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport();
        if viewport != state.get_untracked().viewport {
            runtime.dispatch_action(StudioAction::ViewportResized { viewport });
        }
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(StudioAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(StudioAction::EndDrag);
        }
    };

    view! {
        <div
            id="studio-shell-root"
            class="studio-shell"
            data-host-strategy=runtime.host.with_value(StudioHostContext::host_strategy_name)
            data-mobile=move || config.get().state.is_mobile.to_string()
            data-dragging=move || runtime.interaction.get().dragging.is_some().to_string()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <style>{move || config.get().css}</style>
            <main
                class=move || surface_classes(&config.get().state)
                data-ui-slot="preview-surface"
            >
                {move || {
                    config
                        .get()
                        .particles
                        .and_then(|particles| particles.to_json().ok())
                        .map(|options| {
                            view! {
                                <div
                                    class=PARTICLES_CLASS
                                    aria-hidden="true"
                                    data-particle-options=options
                                ></div>
                            }
                        })
                }}
                {children.map(|children| children())}
            </main>
            <div class="studio-panel-layer" data-ui-slot="panel-layer">
                <For
                    each={move || state.get().visible_panels().cloned().collect::<Vec<_>>()}
                    key=|panel| panel.id.clone()
                    let:panel
                >
                    {{
                        let panel_id = panel.id.clone();
                        let body = if panel_id.as_str() == EFFECTS_PANEL_ID {
                            view! { <EffectsPanelBody /> }.into_view()
                        } else {
                            match panel_body {
                                Some(render) => render.call(panel_id.clone()),
                                None => view! { <p class="studio-panel-placeholder">{panel.title.clone()}</p> }
                                    .into_view(),
                            }
                        };
                        view! { <FloatingPanel panel_id=panel_id>{body}</FloatingPanel> }
                    }}
                </For>
            </div>
            <PanelDock />
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
