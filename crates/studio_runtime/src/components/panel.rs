use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, use_studio_runtime};
use crate::{model::PanelId, reducer::StudioAction};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// One draggable editor panel with minimize and close controls.
pub(super) fn FloatingPanel(panel_id: PanelId, children: Children) -> impl IntoView {
    let runtime = use_studio_runtime();
    let lookup_id = panel_id.clone();
    let panel = create_memo(move |_| runtime.state.get().panel(&lookup_id).cloned());

    let drag_id = panel_id.clone();
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        stop_pointer_event(&ev);
        runtime.dispatch_action(StudioAction::BeginDrag {
            panel_id: drag_id.clone(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize_id = panel_id.clone();
    let toggle_minimize = move |_| {
        runtime.dispatch_action(StudioAction::ToggleMinimize {
            panel_id: minimize_id.clone(),
        })
    };
    let close_id = panel_id.clone();
    let close = move |_| {
        runtime.dispatch_action(StudioAction::ClosePanel {
            panel_id: close_id.clone(),
        })
    };

    let style = move || {
        panel
            .get()
            .map(|p| {
                format!(
                    "left:{}px;top:{}px;width:{}px;",
                    p.position.x,
                    p.position.y,
                    p.size.width_px()
                )
            })
            .unwrap_or_default()
    };
    let is_minimized = move || panel.get().is_some_and(|p| p.is_minimized);
    let title = panel.get_untracked().map(|p| p.title).unwrap_or_default();
    let icon = panel.get_untracked().map(|p| p.icon).unwrap_or_default();
    let size = panel
        .get_untracked()
        .map(|p| p.size.css_id())
        .unwrap_or_default();
    let anchor = panel
        .get_untracked()
        .map(|p| p.position.anchor.css_id())
        .unwrap_or_default();

    view! {
        <section
            class="studio-panel"
            class:minimized=is_minimized
            style=style
            role="dialog"
            aria-label=title.clone()
            data-panel-id=panel_id.to_string()
            data-panel-size=size
            data-panel-anchor=anchor
        >
            <header class="studio-panel-titlebar" on:pointerdown=begin_drag>
                <span class="studio-panel-icon" data-icon=icon aria-hidden="true"></span>
                <span class="studio-panel-title">{title}</span>
                <div class="studio-panel-controls">
                    <button
                        aria-label=move || {
                            if is_minimized() { "Expand panel" } else { "Minimize panel" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                        on:click=toggle_minimize
                    >
                        {move || if is_minimized() { "+" } else { "\u{2212}" }}
                    </button>
                    <button
                        aria-label="Close panel"
                        on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                        on:click=close
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </header>
            <div class="studio-panel-body" hidden=is_minimized>
                {children()}
            </div>
        </section>
    }
}
