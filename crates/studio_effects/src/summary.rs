//! Validation and performance summary for a computed [`EffectsState`].

use serde::Serialize;

use crate::{
    model::{EffectKind, EffectToggleSet, EffectsState},
    policy::EffectsPolicy,
};

const LIGHT_COST_CEILING: u32 = 4;
const MODERATE_COST_CEILING: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
/// Coarse rendering cost bucket.
pub enum PerformanceTier {
    /// Cheap on any device.
    Light,
    /// Noticeable on low-end devices.
    Moderate,
    /// Expensive; expect dropped frames on weak GPUs.
    Heavy,
}

impl PerformanceTier {
    /// Stable lowercase token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
/// Adjustments and advisories produced while mapping toggles.
pub enum EffectsWarning {
    /// The requested particle count was outside `[0, cap]`.
    ParticleCountClamped {
        /// Count the caller asked for.
        requested: i32,
        /// Count that will render.
        applied: u32,
    },
    /// A requested effect was switched off for a mobile-class device.
    SuppressedOnMobile {
        /// Suppressed effect.
        effect: EffectKind,
    },
    /// Glassmorphism and particles are both active.
    HeavyCombination,
}

impl EffectsWarning {
    /// One-line description for editor hints.
    pub fn message(&self) -> String {
        match self {
            Self::ParticleCountClamped { requested, applied } => {
                format!("particle count {requested} adjusted to {applied}")
            }
            Self::SuppressedOnMobile { effect } => {
                format!("{} disabled on mobile devices", effect.label())
            }
            Self::HeavyCombination => {
                "glassmorphism with particles may reduce frame rate".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Summary of what renders and what it costs.
pub struct EffectsSummary {
    /// Enabled effects in render order.
    pub active: Vec<EffectKind>,
    /// Weighted cost score.
    pub estimated_cost: u32,
    /// Bucket for `estimated_cost`.
    pub tier: PerformanceTier,
    /// Adjustments and advisories.
    pub warnings: Vec<EffectsWarning>,
}

fn effect_cost(kind: EffectKind, particle_count: u32) -> u32 {
    match kind {
        EffectKind::Hover | EffectKind::Patterns => 1,
        EffectKind::Animations => 2,
        EffectKind::Glassmorphism => 3,
        EffectKind::Particles => 2 + particle_count / 10,
    }
}

/// Summarizes `state` as derived from `toggles` under `policy`.
pub fn summarize_effects(
    toggles: &EffectToggleSet,
    state: &EffectsState,
    policy: &EffectsPolicy,
) -> EffectsSummary {
    let active = state.enabled_kinds();
    let estimated_cost = active
        .iter()
        .map(|kind| effect_cost(*kind, state.particle_count))
        .sum();
    let tier = match estimated_cost {
        cost if cost <= LIGHT_COST_CEILING => PerformanceTier::Light,
        cost if cost <= MODERATE_COST_CEILING => PerformanceTier::Moderate,
        _ => PerformanceTier::Heavy,
    };

    let mut warnings = Vec::new();
    let cap = policy.particle_cap(state.is_mobile);
    if toggles.particles && (toggles.particle_count < 0 || toggles.particle_count as i64 > cap as i64)
    {
        warnings.push(EffectsWarning::ParticleCountClamped {
            requested: toggles.particle_count,
            applied: state.particle_count,
        });
    }
    if state.is_mobile {
        warnings.extend(
            EffectKind::ALL
                .into_iter()
                .filter(|kind| !kind.is_mobile_safe() && toggles.requested(*kind))
                .map(|effect| EffectsWarning::SuppressedOnMobile { effect }),
        );
    }
    if state.glassmorphism.enabled && state.particles.enabled {
        warnings.push(EffectsWarning::HeavyCombination);
    }

    EffectsSummary {
        active,
        estimated_cost,
        tier,
        warnings,
    }
}
