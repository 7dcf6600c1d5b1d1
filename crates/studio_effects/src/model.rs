//! Effect toggle inputs and the derived per-render effects state.

use serde::{Deserialize, Serialize};

/// Particle count used when a toggle bag omits `particleCount`.
pub const DEFAULT_PARTICLE_COUNT: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Particle preset family.
pub enum ParticleType {
    /// Slow drifting dots.
    #[default]
    Floating,
    /// Linked nodes forming a network.
    Constellation,
    /// Sparse, muted, low-motion field.
    Professional,
    /// Mixed shapes and colours with more motion.
    Creative,
}

impl ParticleType {
    /// Every preset in picker order.
    pub const ALL: [ParticleType; 4] = [
        ParticleType::Floating,
        ParticleType::Constellation,
        ParticleType::Professional,
        ParticleType::Creative,
    ];

    /// Parses a token produced by [`ParticleType::as_str`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }

    /// Stable token used in CSS data attributes and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Floating => "floating",
            Self::Constellation => "constellation",
            Self::Professional => "professional",
            Self::Creative => "creative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Individual cosmetic treatments a surface can carry.
pub enum EffectKind {
    /// Lift/scale on pointer hover.
    Hover,
    /// Frosted-glass backdrop blur.
    Glassmorphism,
    /// Subtle looping motion.
    Animations,
    /// Decorative background pattern.
    Patterns,
    /// Particle field behind the surface.
    Particles,
}

impl EffectKind {
    /// All kinds in render order.
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Hover,
        EffectKind::Glassmorphism,
        EffectKind::Animations,
        EffectKind::Patterns,
        EffectKind::Particles,
    ];

    /// Whether the effect may stay enabled on mobile-class devices.
    pub fn is_mobile_safe(self) -> bool {
        !matches!(self, Self::Glassmorphism | Self::Particles)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Glassmorphism => "glassmorphism",
            Self::Animations => "animations",
            Self::Patterns => "background patterns",
            Self::Particles => "particles",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Flat set of effect toggles supplied by the caller on every render.
///
/// Missing fields deserialize to their defaults, so partial JSON bags are accepted as-is.
pub struct EffectToggleSet {
    /// Hover lift on interactive surfaces.
    pub hover_effect: bool,
    /// Frosted-glass backdrop.
    pub glassmorphism: bool,
    /// Subtle looping animations.
    pub subtle_animations: bool,
    /// Decorative background pattern.
    pub background_patterns: bool,
    /// Particle field.
    pub particles: bool,
    /// Particle preset family.
    pub particle_type: ParticleType,
    /// Requested particle count; out-of-range values are clamped, never rejected.
    pub particle_count: i32,
}

impl Default for EffectToggleSet {
    fn default() -> Self {
        Self {
            hover_effect: false,
            glassmorphism: false,
            subtle_animations: false,
            background_patterns: false,
            particles: false,
            particle_type: ParticleType::default(),
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl EffectToggleSet {
    /// Returns the raw toggle value for `kind`.
    pub fn requested(&self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Hover => self.hover_effect,
            EffectKind::Glassmorphism => self.glassmorphism,
            EffectKind::Animations => self.subtle_animations,
            EffectKind::Patterns => self.background_patterns,
            EffectKind::Particles => self.particles,
        }
    }

    /// Sets the raw toggle value for `kind`.
    pub fn set(&mut self, kind: EffectKind, enabled: bool) {
        match kind {
            EffectKind::Hover => self.hover_effect = enabled,
            EffectKind::Glassmorphism => self.glassmorphism = enabled,
            EffectKind::Animations => self.subtle_animations = enabled,
            EffectKind::Patterns => self.background_patterns = enabled,
            EffectKind::Particles => self.particles = enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Resolved state of one effect.
pub struct EffectSetting {
    /// Whether the effect renders.
    pub enabled: bool,
    /// Strength in `[0, 1]`.
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Normalized effects state derived from an [`EffectToggleSet`] and the device class.
pub struct EffectsState {
    /// Hover lift.
    pub hover: EffectSetting,
    /// Frosted-glass backdrop.
    pub glassmorphism: EffectSetting,
    /// Looping animations.
    pub animations: EffectSetting,
    /// Background pattern.
    pub patterns: EffectSetting,
    /// Particle field.
    pub particles: EffectSetting,
    /// Particle preset family.
    pub particle_type: ParticleType,
    /// Particle count after the device cap is applied.
    pub particle_count: u32,
    /// Whether mobile overrides were applied.
    pub is_mobile: bool,
}

impl EffectsState {
    /// Returns the resolved setting for `kind`.
    pub fn setting(&self, kind: EffectKind) -> EffectSetting {
        match kind {
            EffectKind::Hover => self.hover,
            EffectKind::Glassmorphism => self.glassmorphism,
            EffectKind::Animations => self.animations,
            EffectKind::Patterns => self.patterns,
            EffectKind::Particles => self.particles,
        }
    }

    /// Kinds that are enabled, in render order.
    pub fn enabled_kinds(&self) -> Vec<EffectKind> {
        EffectKind::ALL
            .into_iter()
            .filter(|kind| self.setting(*kind).enabled)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn particle_tokens_parse_back() {
        for kind in ParticleType::ALL {
            assert_eq!(ParticleType::from_token(kind.as_str()), Some(kind));
        }
        assert_eq!(ParticleType::from_token("sparkle"), None);
    }

    #[test]
    fn partial_toggle_bag_uses_defaults() {
        let toggles: EffectToggleSet =
            serde_json::from_str(r#"{"particles":true,"particleType":"creative"}"#)
                .expect("partial bag");
        assert!(toggles.particles);
        assert!(!toggles.glassmorphism);
        assert_eq!(toggles.particle_type, ParticleType::Creative);
        assert_eq!(toggles.particle_count, DEFAULT_PARTICLE_COUNT);
    }

    #[test]
    fn empty_toggle_bag_matches_default() {
        let toggles: EffectToggleSet = serde_json::from_str("{}").expect("empty bag");
        assert_eq!(toggles, EffectToggleSet::default());
    }

    #[test]
    fn only_glassmorphism_and_particles_are_device_gated() {
        let gated: Vec<EffectKind> = EffectKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_mobile_safe())
            .collect();
        assert_eq!(gated, vec![EffectKind::Glassmorphism, EffectKind::Particles]);
    }

    #[test]
    fn set_and_requested_address_the_same_field() {
        let mut toggles = EffectToggleSet::default();
        for kind in EffectKind::ALL {
            toggles.set(kind, true);
            assert!(toggles.requested(kind), "{kind:?} should read back as set");
        }
    }
}
