use serde::{Deserialize, Serialize};
use studio_effects::EffectToggleSet;

/// Local-storage key holding the JSON array of [`PanelDescriptor`] values.
pub const PANEL_LAYOUT_KEY: &str = "orbital-studio.panels.v1";
/// Vertical space reserved for every panel regardless of its content.
pub const PANEL_HEIGHT_BUDGET: i32 = 400;
pub const DEFAULT_VIEWPORT_WIDTH: i32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: i32 = 800;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl PanelSize {
    pub fn width_px(self) -> i32 {
        match self {
            Self::Small => 250,
            Self::Medium => 320,
            Self::Large => 400,
            Self::XLarge => 500,
        }
    }

    pub fn css_id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Dock corner a panel started from.
///
/// Informational only: it is stored and exposed as `data-panel-anchor` for styling, but never
/// changes how [`PanelPosition`] is measured, clamped, or dragged.
pub enum PanelAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl PanelAnchor {
    pub fn css_id(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Panel placement. `x` and `y` are always left/top offsets from the viewport origin.
pub struct PanelPosition {
    pub x: i32,
    pub y: i32,
    pub anchor: PanelAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDescriptor {
    pub id: PanelId,
    pub title: String,
    pub icon: String,
    pub position: PanelPosition,
    pub size: PanelSize,
    pub is_visible: bool,
    pub is_minimized: bool,
}

impl PanelDescriptor {
    fn docked(
        id: &str,
        title: &str,
        icon: &str,
        (x, y, anchor): (i32, i32, PanelAnchor),
        size: PanelSize,
    ) -> Self {
        Self {
            id: PanelId::new(id),
            title: title.to_string(),
            icon: icon.to_string(),
            position: PanelPosition { x, y, anchor },
            size,
            is_visible: true,
            is_minimized: false,
        }
    }
}

/// Layout used at first mount, after a reset, and whenever the stored layout is unreadable.
///
/// Positions fit the default 1280x800 viewport.
pub fn default_panel_layout() -> Vec<PanelDescriptor> {
    vec![
        PanelDescriptor::docked(
            "themes",
            "Themes",
            "palette",
            (24, 88, PanelAnchor::TopLeft),
            PanelSize::Medium,
        ),
        PanelDescriptor::docked(
            "effects",
            "Visual Effects",
            "sparkles",
            (936, 88, PanelAnchor::TopRight),
            PanelSize::Medium,
        ),
        PanelDescriptor::docked(
            "typography",
            "Typography",
            "text",
            (24, 400, PanelAnchor::BottomLeft),
            PanelSize::Small,
        ),
        PanelDescriptor::docked(
            "layers",
            "Layers",
            "layers",
            (1006, 400, PanelAnchor::BottomRight),
            PanelSize::Small,
        ),
        PanelDescriptor {
            is_minimized: true,
            ..PanelDescriptor::docked(
                "export",
                "Export",
                "share",
                (440, 88, PanelAnchor::TopLeft),
                PanelSize::Large,
            )
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioState {
    pub panels: Vec<PanelDescriptor>,
    pub viewport: Viewport,
    pub effects: EffectToggleSet,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            panels: default_panel_layout(),
            viewport: Viewport::default(),
            effects: EffectToggleSet::default(),
        }
    }
}

impl StudioState {
    pub fn panel(&self, panel_id: &PanelId) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|p| &p.id == panel_id)
    }

    pub fn visible_panels(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.panels.iter().filter(|p| p.is_visible)
    }

    pub fn hidden_panels(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.panels.iter().filter(|p| !p.is_visible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub panel_id: PanelId,
    pub pointer_start: PointerPosition,
    pub origin: PanelPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_layout_has_five_unique_panels_inside_default_viewport() {
        let layout = default_panel_layout();
        assert_eq!(layout.len(), 5);
        let ids: HashSet<_> = layout.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 5);

        let viewport = Viewport::default();
        for panel in &layout {
            assert!(panel.position.x >= 0);
            assert!(panel.position.x <= viewport.width - panel.size.width_px());
            assert!(panel.position.y >= 0);
            assert!(panel.position.y <= viewport.height - PANEL_HEIGHT_BUDGET);
        }
    }

    #[test]
    fn descriptor_json_uses_client_field_names() {
        let panel = &default_panel_layout()[0];
        let json = serde_json::to_value(panel).expect("serialize panel");
        assert_eq!(json["id"], "themes");
        assert_eq!(json["isVisible"], true);
        assert_eq!(json["isMinimized"], false);
        assert_eq!(json["size"], "medium");
        assert_eq!(json["position"]["anchor"], "top-left");
    }

    #[test]
    fn xlarge_size_round_trips_through_its_token() {
        let size: PanelSize = serde_json::from_str("\"xlarge\"").expect("xlarge");
        assert_eq!(size, PanelSize::XLarge);
        assert_eq!(size.width_px(), 500);
        assert_eq!(serde_json::to_string(&size).expect("json"), "\"xlarge\"");
    }
}
