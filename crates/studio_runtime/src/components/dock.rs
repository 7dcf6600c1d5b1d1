use leptos::*;

use super::use_studio_runtime;
use crate::reducer::StudioAction;

#[component]
/// Lists closed panels for reopening and offers a layout reset.
pub(super) fn PanelDock() -> impl IntoView {
    let runtime = use_studio_runtime();
    let hidden = create_memo(move |_| {
        runtime
            .state
            .get()
            .hidden_panels()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <nav class="studio-panel-dock" aria-label="Panels">
            <For each=move || hidden.get() key=|panel| panel.id.clone() let:panel>
                {{
                    let panel_id = panel.id.clone();
                    view! {
                        <button
                            class="studio-dock-item"
                            data-icon=panel.icon.clone()
                            title=format!("Show {}", panel.title)
                            on:click=move |_| {
                                runtime.dispatch_action(StudioAction::ShowPanel {
                                    panel_id: panel_id.clone(),
                                })
                            }
                        >
                            {panel.title.clone()}
                        </button>
                    }
                }}
            </For>
            <button
                class="studio-dock-reset"
                on:click=move |_| runtime.dispatch_action(StudioAction::ResetPositions)
            >
                "Reset layout"
            </button>
        </nav>
    }
}
