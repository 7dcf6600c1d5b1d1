//! Particle-engine presets keyed by [`ParticleType`].

use serde::{Deserialize, Serialize};

use crate::{
    model::{EffectsState, ParticleType},
    theme::SurfaceTheme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Particle glyph.
pub enum ParticleShape {
    /// Round dot.
    Circle,
    /// Triangle.
    Triangle,
    /// Five-point star.
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How particles react to the pointer.
pub enum HoverMode {
    /// No interaction.
    None,
    /// Particles grow near the pointer.
    Bubble,
    /// Links are drawn to the pointer.
    Grab,
    /// Particles move away from the pointer.
    Repulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Inclusive particle radius range in CSS pixels.
pub struct SizeRange {
    /// Smallest radius.
    pub min: f32,
    /// Largest radius.
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Lines drawn between nearby particles.
pub struct LinkSettings {
    /// Whether links render.
    pub enabled: bool,
    /// Maximum link length in CSS pixels.
    pub distance: u32,
    /// Link colour.
    pub color: String,
    /// Link opacity in `[0, 1]`.
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration handed to the client particle engine.
pub struct ParticleEngineConfig {
    /// Preset family this config was built from.
    pub preset: ParticleType,
    /// Number of particles.
    pub count: u32,
    /// Glyphs drawn; the engine picks one per particle.
    pub shapes: Vec<ParticleShape>,
    /// Colours drawn; the engine picks one per particle.
    pub colors: Vec<String>,
    /// Radius range.
    pub size: SizeRange,
    /// Base opacity in `[0, 1]`.
    pub opacity: f32,
    /// Movement speed multiplier.
    pub speed: f32,
    /// Whether particles drift in random directions instead of straight up.
    pub random_direction: bool,
    /// Link settings.
    pub links: LinkSettings,
    /// Pointer interaction.
    pub hover_mode: HoverMode,
}

impl ParticleEngineConfig {
    /// Serializes the config for the engine's JSON options argument.
    ///
    /// # Errors
    ///
    /// Returns the serialization error message.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

/// Builds the particle preset for `state`, or `None` when no particles render.
pub fn particle_engine_config(
    state: &EffectsState,
    theme: &SurfaceTheme,
) -> Option<ParticleEngineConfig> {
    if !state.particles.enabled || state.particle_count == 0 {
        return None;
    }
    let intensity = state.particles.intensity;
    let link = |distance: u32, opacity: f32| LinkSettings {
        enabled: true,
        distance,
        color: theme.primary.to_string(),
        opacity: opacity * intensity,
    };
    let no_links = LinkSettings {
        enabled: false,
        distance: 0,
        color: theme.primary.to_string(),
        opacity: 0.0,
    };

    let config = match state.particle_type {
        ParticleType::Floating => ParticleEngineConfig {
            preset: ParticleType::Floating,
            count: state.particle_count,
            shapes: vec![ParticleShape::Circle],
            colors: vec![theme.primary.to_string()],
            size: SizeRange { min: 1.0, max: 4.0 },
            opacity: 0.5 * intensity,
            speed: 1.0,
            random_direction: false,
            links: no_links,
            hover_mode: HoverMode::Bubble,
        },
        ParticleType::Constellation => ParticleEngineConfig {
            preset: ParticleType::Constellation,
            count: state.particle_count,
            shapes: vec![ParticleShape::Circle],
            colors: vec![theme.primary.to_string()],
            size: SizeRange { min: 1.0, max: 3.0 },
            opacity: 0.4 * intensity,
            speed: 0.6,
            random_direction: true,
            links: link(150, 0.4),
            hover_mode: HoverMode::Grab,
        },
        ParticleType::Professional => ParticleEngineConfig {
            preset: ParticleType::Professional,
            count: state.particle_count,
            shapes: vec![ParticleShape::Circle],
            colors: vec![theme.text.to_string()],
            size: SizeRange { min: 1.0, max: 2.0 },
            opacity: 0.3 * intensity,
            speed: 0.4,
            random_direction: true,
            links: link(120, 0.2),
            hover_mode: HoverMode::None,
        },
        ParticleType::Creative => ParticleEngineConfig {
            preset: ParticleType::Creative,
            count: state.particle_count,
            shapes: vec![
                ParticleShape::Circle,
                ParticleShape::Triangle,
                ParticleShape::Star,
            ],
            colors: vec![
                theme.primary.to_string(),
                theme.accent.to_string(),
                theme.text.to_string(),
            ],
            size: SizeRange { min: 2.0, max: 6.0 },
            opacity: 0.7 * intensity,
            speed: 2.0,
            random_direction: true,
            links: no_links,
            hover_mode: HoverMode::Repulse,
        },
    };
    Some(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{compute::compute_effects, model::EffectToggleSet};

    fn particles(particle_type: ParticleType, count: i32, is_mobile: bool) -> EffectsState {
        compute_effects(
            &EffectToggleSet {
                particles: true,
                particle_type,
                particle_count: count,
                ..EffectToggleSet::default()
            },
            is_mobile,
        )
    }

    #[test]
    fn disabled_or_empty_particles_have_no_config() {
        let theme = SurfaceTheme::default();
        assert_eq!(
            particle_engine_config(&compute_effects(&EffectToggleSet::default(), false), &theme),
            None
        );
        assert_eq!(
            particle_engine_config(&particles(ParticleType::Floating, 0, false), &theme),
            None
        );
        assert_eq!(
            particle_engine_config(&particles(ParticleType::Floating, 30, true), &theme),
            None
        );
    }

    #[test]
    fn constellation_links_particles_in_primary_colour() {
        let theme = SurfaceTheme::default();
        let config = particle_engine_config(&particles(ParticleType::Constellation, 40, false), &theme)
            .expect("constellation config");
        assert_eq!(config.count, 40);
        assert!(config.links.enabled);
        assert_eq!(config.links.distance, 150);
        assert_eq!(config.links.color, "#2c2c2c");
        assert_eq!(config.hover_mode, HoverMode::Grab);
    }

    #[test]
    fn creative_mixes_shapes_and_theme_colours() {
        let theme = SurfaceTheme::default();
        let config = particle_engine_config(&particles(ParticleType::Creative, 200, false), &theme)
            .expect("creative config");
        assert_eq!(config.count, 50);
        assert_eq!(config.shapes.len(), 3);
        assert_eq!(config.colors, vec!["#2c2c2c", "#667eea", "#2c2c2c"]);
        assert!(!config.links.enabled);
    }

    #[test]
    fn json_uses_engine_field_names() {
        let theme = SurfaceTheme::default();
        let json = particle_engine_config(&particles(ParticleType::Professional, 10, false), &theme)
            .expect("professional config")
            .to_json()
            .expect("json");
        assert!(json.contains("\"hoverMode\":\"none\""));
        assert!(json.contains("\"randomDirection\":true"));
        assert!(json.contains("\"preset\":\"professional\""));
    }
}
