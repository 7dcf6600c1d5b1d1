//! Reducer actions, side-effect intents, and transition logic for the studio panel runtime.

use studio_effects::EffectToggleSet;
use thiserror::Error;

use crate::{
    model::{
        default_panel_layout, DragSession, InteractionState, PanelDescriptor, PanelId,
        PointerPosition, StudioState, Viewport,
    },
    panel_manager::{clamp_layout, clamp_panel_to_viewport, clamp_position},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_studio`] to mutate [`StudioState`].
pub enum StudioAction {
    /// Begin dragging a panel by its title bar.
    BeginDrag {
        /// Panel being dragged.
        panel_id: PanelId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag.
    EndDrag,
    /// Collapse a panel to its title bar.
    MinimizePanel {
        /// Panel to minimize.
        panel_id: PanelId,
    },
    /// Expand a minimized panel.
    RestorePanel {
        /// Panel to restore.
        panel_id: PanelId,
    },
    /// Flip a panel between minimized and expanded.
    ToggleMinimize {
        /// Panel to toggle.
        panel_id: PanelId,
    },
    /// Hide a panel; it can be reopened from the dock.
    ClosePanel {
        /// Panel to hide.
        panel_id: PanelId,
    },
    /// Reopen a hidden panel.
    ShowPanel {
        /// Panel to show.
        panel_id: PanelId,
    },
    /// Discard the stored layout and return to the default table.
    ResetPositions,
    /// React to a browser resize.
    ViewportResized {
        /// New viewport size.
        viewport: Viewport,
    },
    /// Replace the layout with one loaded from storage, clamped to the mount viewport.
    ///
    /// Never persists: loading must not rewrite what was stored.
    HydrateLayout {
        /// Loaded panels.
        panels: Vec<PanelDescriptor>,
        /// Viewport at mount.
        viewport: Viewport,
    },
    /// Replace the effect toggles driving the preview surface.
    SetEffectToggles {
        /// New toggles.
        toggles: EffectToggleSet,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_studio`] for the host to execute.
pub enum RuntimeEffect {
    /// Persist the current panel layout.
    PersistLayout,
    /// Remove the stored panel layout.
    ClearPersistedLayout,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference unknown panels.
pub enum ReducerError {
    /// The target panel id was not found in the current layout.
    #[error("panel `{0}` not found")]
    PanelNotFound(PanelId),
}

/// Applies a [`StudioAction`] to the studio state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::PanelNotFound`] when an action references a panel that is not present.
pub fn reduce_studio(
    state: &mut StudioState,
    interaction: &mut InteractionState,
    action: StudioAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        StudioAction::BeginDrag { panel_id, pointer } => {
            let origin = find_panel_mut(state, &panel_id)?.position;
            interaction.dragging = Some(DragSession {
                panel_id,
                pointer_start: pointer,
                origin,
            });
        }
        StudioAction::UpdateDrag { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x.saturating_sub(session.pointer_start.x);
                let dy = pointer.y.saturating_sub(session.pointer_start.y);
                let viewport = state.viewport;
                let panel = find_panel_mut(state, &session.panel_id)?;
                let (x, y) = clamp_position(
                    session.origin.x.saturating_add(dx),
                    session.origin.y.saturating_add(dy),
                    panel.size,
                    viewport,
                );
                panel.position.x = x;
                panel.position.y = y;
            }
        }
        StudioAction::EndDrag => {
            if interaction.dragging.take().is_some() {
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        StudioAction::MinimizePanel { panel_id } => {
            let panel = find_panel_mut(state, &panel_id)?;
            if !panel.is_minimized {
                panel.is_minimized = true;
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        StudioAction::RestorePanel { panel_id } => {
            let panel = find_panel_mut(state, &panel_id)?;
            if panel.is_minimized {
                panel.is_minimized = false;
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        StudioAction::ToggleMinimize { panel_id } => {
            let panel = find_panel_mut(state, &panel_id)?;
            panel.is_minimized = !panel.is_minimized;
            effects.push(RuntimeEffect::PersistLayout);
        }
        StudioAction::ClosePanel { panel_id } => {
            let panel = find_panel_mut(state, &panel_id)?;
            panel.is_visible = false;
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.panel_id == panel_id)
            {
                interaction.dragging = None;
            }
            effects.push(RuntimeEffect::PersistLayout);
        }
        StudioAction::ShowPanel { panel_id } => {
            let viewport = state.viewport;
            let panel = find_panel_mut(state, &panel_id)?;
            panel.is_visible = true;
            panel.is_minimized = false;
            clamp_panel_to_viewport(panel, viewport);
            effects.push(RuntimeEffect::PersistLayout);
        }
        StudioAction::ResetPositions => {
            interaction.dragging = None;
            state.panels = default_panel_layout();
            clamp_layout(&mut state.panels, state.viewport);
            effects.push(RuntimeEffect::ClearPersistedLayout);
        }
        StudioAction::ViewportResized { viewport } => {
            state.viewport = viewport;
            if clamp_layout(&mut state.panels, viewport) > 0 {
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        StudioAction::HydrateLayout { panels, viewport } => {
            interaction.dragging = None;
            state.viewport = viewport;
            state.panels = panels;
            clamp_layout(&mut state.panels, state.viewport);
        }
        StudioAction::SetEffectToggles { toggles } => {
            state.effects = toggles;
        }
    }

    Ok(effects)
}

fn find_panel_mut<'a>(
    state: &'a mut StudioState,
    panel_id: &PanelId,
) -> Result<&'a mut PanelDescriptor, ReducerError> {
    state
        .panels
        .iter_mut()
        .find(|p| &p.id == panel_id)
        .ok_or_else(|| ReducerError::PanelNotFound(panel_id.clone()))
}
