//! Viewport clamp arithmetic and layout helpers used by the studio reducer.

use std::collections::HashSet;

use crate::model::{PanelDescriptor, PanelId, PanelSize, Viewport, PANEL_HEIGHT_BUDGET};

/// Width reserved for a panel of `size`.
pub fn width_of(size: PanelSize) -> i32 {
    size.width_px()
}

/// Clamps a panel origin so a panel of `size` stays inside `viewport`.
///
/// `x` is bounded by `viewport.width - width_of(size)` and `y` by
/// `viewport.height - PANEL_HEIGHT_BUDGET`. When the viewport is smaller than the panel the
/// coordinate pins to `0`.
pub fn clamp_position(x: i32, y: i32, size: PanelSize, viewport: Viewport) -> (i32, i32) {
    let max_x = viewport.width.saturating_sub(width_of(size));
    let max_y = viewport.height.saturating_sub(PANEL_HEIGHT_BUDGET);
    (x.min(max_x).max(0), y.min(max_y).max(0))
}

/// Clamps one panel in place and returns whether it moved.
pub fn clamp_panel_to_viewport(panel: &mut PanelDescriptor, viewport: Viewport) -> bool {
    let (x, y) = clamp_position(panel.position.x, panel.position.y, panel.size, viewport);
    let moved = x != panel.position.x || y != panel.position.y;
    panel.position.x = x;
    panel.position.y = y;
    moved
}

/// Clamps every panel in place and returns how many moved.
pub fn clamp_layout(panels: &mut [PanelDescriptor], viewport: Viewport) -> usize {
    panels
        .iter_mut()
        .map(|panel| clamp_panel_to_viewport(panel, viewport))
        .filter(|moved| *moved)
        .count()
}

/// Returns the first id that occurs more than once, if any.
pub fn first_duplicate_id(panels: &[PanelDescriptor]) -> Option<&PanelId> {
    let mut seen = HashSet::new();
    panels.iter().map(|p| &p.id).find(|id| !seen.insert(*id))
}

/// Appends any panel from `defaults` whose id is missing in `panels`.
///
/// Returns how many panels were appended.
pub fn merge_missing_defaults(
    panels: &mut Vec<PanelDescriptor>,
    defaults: Vec<PanelDescriptor>,
) -> usize {
    let known: HashSet<PanelId> = panels.iter().map(|p| p.id.clone()).collect();
    let before = panels.len();
    panels.extend(defaults.into_iter().filter(|p| !known.contains(&p.id)));
    panels.len() - before
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::default_panel_layout;

    const DESKTOP: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    #[test]
    fn width_table_matches_size_classes() {
        assert_eq!(width_of(PanelSize::Small), 250);
        assert_eq!(width_of(PanelSize::Medium), 320);
        assert_eq!(width_of(PanelSize::Large), 400);
        assert_eq!(width_of(PanelSize::XLarge), 500);
    }

    #[test]
    fn clamp_keeps_in_bounds_positions() {
        assert_eq!(clamp_position(100, 200, PanelSize::Medium, DESKTOP), (100, 200));
    }

    #[test]
    fn clamp_pulls_overflowing_positions_back() {
        assert_eq!(clamp_position(5000, 5000, PanelSize::Large, DESKTOP), (880, 400));
        assert_eq!(clamp_position(-40, -1, PanelSize::Small, DESKTOP), (0, 0));
    }

    #[test]
    fn undersized_viewport_pins_to_origin() {
        let tiny = Viewport {
            width: 200,
            height: 300,
        };
        assert_eq!(clamp_position(50, 50, PanelSize::XLarge, tiny), (0, 0));
    }

    #[test]
    fn clamp_bounds_and_idempotence_hold_across_inputs() {
        let viewports = [
            DESKTOP,
            Viewport {
                width: 375,
                height: 667,
            },
            Viewport {
                width: 2560,
                height: 1440,
            },
        ];
        let sizes = [
            PanelSize::Small,
            PanelSize::Medium,
            PanelSize::Large,
            PanelSize::XLarge,
        ];
        let coords = [i32::MIN, -500, -1, 0, 1, 137, 400, 879, 880, 881, 3000, i32::MAX];
        for viewport in viewports {
            for size in sizes {
                for x in coords {
                    for y in coords {
                        let (cx, cy) = clamp_position(x, y, size, viewport);
                        assert!(cx >= 0 && cy >= 0);
                        assert!(cx <= (viewport.width - width_of(size)).max(0));
                        assert!(cy <= (viewport.height - PANEL_HEIGHT_BUDGET).max(0));
                        assert_eq!(clamp_position(x, y, size, viewport), (cx, cy));
                        assert_eq!(clamp_position(cx, cy, size, viewport), (cx, cy));
                    }
                }
            }
        }
    }

    #[test]
    fn clamp_layout_counts_moved_panels() {
        let mut panels = default_panel_layout();
        let narrow = Viewport {
            width: 1000,
            height: 800,
        };
        // effects (x 936) and layers (x 1006) overflow; export (x 440, large) fits.
        assert_eq!(clamp_layout(&mut panels, narrow), 2);
        assert_eq!(clamp_layout(&mut panels, narrow), 0);
    }

    #[test]
    fn merge_appends_only_missing_defaults() {
        let mut panels = default_panel_layout();
        panels.retain(|p| p.id.as_str() != "layers");
        assert_eq!(merge_missing_defaults(&mut panels, default_panel_layout()), 1);
        assert_eq!(panels.last().map(|p| p.id.as_str()), Some("layers"));
        assert_eq!(merge_missing_defaults(&mut panels, default_panel_layout()), 0);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let mut panels = default_panel_layout();
        assert_eq!(first_duplicate_id(&panels), None);
        panels.push(panels[1].clone());
        assert_eq!(first_duplicate_id(&panels), Some(&PanelId::new("effects")));
    }
}
