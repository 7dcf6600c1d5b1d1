//! Effect caps, device breakpoint, and fixed intensities.
//!
//! One policy governs every surface so particle caps stay consistent between the editor, the
//! card preview, and the slide preview.

use serde::{Deserialize, Serialize};

use crate::model::EffectKind;

/// Viewport width below which a device is treated as mobile-class.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;
/// Particle cap for mobile-class devices.
pub const MOBILE_PARTICLE_CAP: u32 = 15;
/// Particle cap for desktop-class devices.
pub const DESKTOP_PARTICLE_CAP: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Intensity applied to each effect when enabled.
pub struct EffectIntensities {
    /// Hover lift intensity.
    pub hover: f32,
    /// Glass backdrop intensity.
    pub glassmorphism: f32,
    /// Animation intensity.
    pub animations: f32,
    /// Pattern opacity.
    pub patterns: f32,
    /// Particle field intensity.
    pub particles: f32,
}

impl Default for EffectIntensities {
    fn default() -> Self {
        Self {
            hover: 1.0,
            glassmorphism: 0.8,
            animations: 0.8,
            patterns: 0.3,
            particles: 1.0,
        }
    }
}

impl EffectIntensities {
    /// Returns the intensity for `kind`, clamped into `[0, 1]`.
    ///
    /// NaN collapses to `0.0`.
    pub fn for_kind(&self, kind: EffectKind) -> f32 {
        let raw = match kind {
            EffectKind::Hover => self.hover,
            EffectKind::Glassmorphism => self.glassmorphism,
            EffectKind::Animations => self.animations,
            EffectKind::Patterns => self.patterns,
            EffectKind::Particles => self.particles,
        };
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Configuration for effect derivation.
pub struct EffectsPolicy {
    /// Widths strictly below this are mobile-class.
    pub mobile_breakpoint_px: i32,
    /// Maximum particle count on mobile-class devices.
    pub mobile_particle_cap: u32,
    /// Maximum particle count on desktop-class devices.
    pub desktop_particle_cap: u32,
    /// Intensities applied to enabled effects.
    pub intensities: EffectIntensities,
}

impl Default for EffectsPolicy {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            mobile_particle_cap: MOBILE_PARTICLE_CAP,
            desktop_particle_cap: DESKTOP_PARTICLE_CAP,
            intensities: EffectIntensities::default(),
        }
    }
}

impl EffectsPolicy {
    /// Whether a viewport of `width_px` counts as mobile-class.
    pub fn is_mobile_width(&self, width_px: i32) -> bool {
        width_px < self.mobile_breakpoint_px
    }

    /// Particle cap for the given device class.
    pub fn particle_cap(&self, is_mobile: bool) -> u32 {
        if is_mobile {
            self.mobile_particle_cap
        } else {
            self.desktop_particle_cap
        }
    }
}
