//! Toggle-to-state mapping and the bundled effects configuration.

use serde::Serialize;

use crate::{
    css::generate_effects_css,
    model::{EffectKind, EffectSetting, EffectToggleSet, EffectsState},
    particles::{particle_engine_config, ParticleEngineConfig},
    policy::EffectsPolicy,
    summary::{summarize_effects, EffectsSummary},
    theme::SurfaceTheme,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything a themed surface needs for one render.
pub struct EffectsConfig {
    /// Normalized effects state.
    pub state: EffectsState,
    /// Generated stylesheet text.
    pub css: String,
    /// Particle engine configuration, when particles render.
    pub particles: Option<ParticleEngineConfig>,
    /// Validation and performance summary.
    pub summary: EffectsSummary,
}

/// Maps `toggles` to an [`EffectsState`] using the default [`EffectsPolicy`].
pub fn compute_effects(toggles: &EffectToggleSet, is_mobile: bool) -> EffectsState {
    compute_effects_with(toggles, is_mobile, &EffectsPolicy::default())
}

/// Maps `toggles` to an [`EffectsState`] under `policy`.
///
/// An effect is enabled when requested and either mobile-safe or rendered on a desktop-class
/// device. The particle count is clamped into `[0, cap]` for the device class.
pub fn compute_effects_with(
    toggles: &EffectToggleSet,
    is_mobile: bool,
    policy: &EffectsPolicy,
) -> EffectsState {
    let setting = |kind: EffectKind| EffectSetting {
        enabled: toggles.requested(kind) && (kind.is_mobile_safe() || !is_mobile),
        intensity: policy.intensities.for_kind(kind),
    };
    let cap = policy.particle_cap(is_mobile);
    let requested = u32::try_from(toggles.particle_count.max(0)).unwrap_or(0);

    EffectsState {
        hover: setting(EffectKind::Hover),
        glassmorphism: setting(EffectKind::Glassmorphism),
        animations: setting(EffectKind::Animations),
        patterns: setting(EffectKind::Patterns),
        particles: setting(EffectKind::Particles),
        particle_type: toggles.particle_type,
        particle_count: requested.min(cap),
        is_mobile,
    }
}

/// Computes state, stylesheet, particle preset, and summary in one pass.
pub fn build_effects_config(
    toggles: &EffectToggleSet,
    is_mobile: bool,
    theme: &SurfaceTheme,
    policy: &EffectsPolicy,
) -> EffectsConfig {
    let state = compute_effects_with(toggles, is_mobile, policy);
    EffectsConfig {
        css: generate_effects_css(&state, theme),
        particles: particle_engine_config(&state, theme),
        summary: summarize_effects(toggles, &state, policy),
        state,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ParticleType;

    fn all_on(particle_count: i32) -> EffectToggleSet {
        EffectToggleSet {
            hover_effect: true,
            glassmorphism: true,
            subtle_animations: true,
            background_patterns: true,
            particles: true,
            particle_type: ParticleType::Constellation,
            particle_count,
        }
    }

    #[test]
    fn desktop_enables_everything_requested_with_fixed_intensities() {
        let state = compute_effects(&all_on(20), false);
        assert_eq!(
            state.hover,
            EffectSetting {
                enabled: true,
                intensity: 1.0
            }
        );
        assert_eq!(state.glassmorphism.intensity, 0.8);
        assert_eq!(state.animations.intensity, 0.8);
        assert_eq!(state.patterns.intensity, 0.3);
        assert_eq!(state.particles.intensity, 1.0);
        assert_eq!(state.enabled_kinds().len(), 5);
        assert_eq!(state.particle_count, 20);
    }

    #[test]
    fn mobile_forces_glass_and_particles_off() {
        let state = compute_effects(&all_on(20), true);
        assert!(!state.glassmorphism.enabled);
        assert!(!state.particles.enabled);
        assert!(state.hover.enabled);
        assert!(state.animations.enabled);
        assert!(state.patterns.enabled);
        assert_eq!(state.particle_count, 15);
    }

    #[test]
    fn unrequested_effects_stay_off() {
        let state = compute_effects(&EffectToggleSet::default(), false);
        assert!(state.enabled_kinds().is_empty());
    }

    #[test]
    fn creative_particles_over_cap_clamp_to_fifty() {
        let toggles = EffectToggleSet {
            particles: true,
            particle_type: ParticleType::Creative,
            particle_count: 200,
            ..EffectToggleSet::default()
        };
        let state = compute_effects(&toggles, false);
        assert!(state.particles.enabled);
        assert_eq!(state.particle_type, ParticleType::Creative);
        assert_eq!(state.particle_count, 50);
    }

    #[test]
    fn negative_particle_count_clamps_to_zero() {
        let state = compute_effects(&all_on(-12), false);
        assert_eq!(state.particle_count, 0);
    }

    #[test]
    fn state_invariants_hold_across_inputs() {
        for count in [i32::MIN, -1, 0, 1, 15, 16, 49, 50, 51, 200, i32::MAX] {
            for is_mobile in [false, true] {
                for mask in 0u8..32 {
                    let mut toggles = EffectToggleSet {
                        particle_count: count,
                        ..EffectToggleSet::default()
                    };
                    for (bit, kind) in EffectKind::ALL.into_iter().enumerate() {
                        toggles.set(kind, mask & (1 << bit) != 0);
                    }
                    let state = compute_effects(&toggles, is_mobile);
                    assert!(state.particle_count <= 50);
                    for kind in EffectKind::ALL {
                        let intensity = state.setting(kind).intensity;
                        assert!((0.0..=1.0).contains(&intensity));
                    }
                    if is_mobile {
                        assert!(!state.particles.enabled);
                        assert!(!state.glassmorphism.enabled);
                    }
                }
            }
        }
    }

    #[test]
    fn custom_policy_caps_are_respected() {
        let policy = EffectsPolicy {
            desktop_particle_cap: 25,
            ..EffectsPolicy::default()
        };
        let state = compute_effects_with(&all_on(40), false, &policy);
        assert_eq!(state.particle_count, 25);
    }

    #[test]
    fn bundled_config_carries_every_output() {
        let config = build_effects_config(
            &all_on(30),
            false,
            &SurfaceTheme::default(),
            &EffectsPolicy::default(),
        );
        assert!(config.css.contains(".studio-fx-glass"));
        assert_eq!(config.particles.map(|p| p.count), Some(30));
        assert_eq!(config.summary.active.len(), 5);
        assert_eq!(config.state.particle_count, 30);
    }
}
