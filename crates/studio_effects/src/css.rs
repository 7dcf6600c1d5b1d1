//! Stylesheet generation for an [`EffectsState`].
//!
//! Output is plain template substitution: one selector block per enabled effect plus a trailing
//! reduced-motion override. Surfaces opt in through the classes returned by [`surface_classes`].

use crate::{model::EffectsState, theme::SurfaceTheme};

/// Class carried by every effects-aware surface.
pub const SURFACE_CLASS: &str = "studio-fx-surface";
/// Class for hover lift.
pub const HOVER_CLASS: &str = "studio-fx-hover";
/// Class for the glass backdrop.
pub const GLASS_CLASS: &str = "studio-fx-glass";
/// Class for looping animation.
pub const ANIMATED_CLASS: &str = "studio-fx-animated";
/// Class for background pattern.
pub const PATTERN_CLASS: &str = "studio-fx-pattern";
/// Class for the particle layer container.
pub const PARTICLES_CLASS: &str = "studio-fx-particles";

/// Space-separated class list for a surface rendering `state`.
pub fn surface_classes(state: &EffectsState) -> String {
    let mut classes = vec![SURFACE_CLASS];
    if state.hover.enabled {
        classes.push(HOVER_CLASS);
    }
    if state.glassmorphism.enabled {
        classes.push(GLASS_CLASS);
    }
    if state.animations.enabled {
        classes.push(ANIMATED_CLASS);
    }
    if state.patterns.enabled {
        classes.push(PATTERN_CLASS);
    }
    classes.join(" ")
}

/// Renders the stylesheet for `state` coloured by `theme`.
pub fn generate_effects_css(state: &EffectsState, theme: &SurfaceTheme) -> String {
    let mut css = format!(".{SURFACE_CLASS} {{ position: relative; isolation: isolate; }}\n");

    if state.hover.enabled {
        let intensity = state.hover.intensity;
        css.push_str(&format!(
            ".{HOVER_CLASS} {{ transition: transform 0.25s ease, box-shadow 0.25s ease; }}\n\
             .{HOVER_CLASS}:hover {{ transform: translateY(-{lift:.1}px) scale({scale:.3}); \
             box-shadow: 0 {shadow:.0}px {blur:.0}px {shadow_color}; }}\n",
            lift = 4.0 * intensity,
            scale = 1.0 + 0.02 * intensity,
            shadow = 8.0 * intensity,
            blur = 24.0 * intensity,
            shadow_color = theme.primary.rgba(0.25 * intensity),
        ));
    }

    if state.glassmorphism.enabled {
        let intensity = state.glassmorphism.intensity;
        let blur = (16.0 * intensity).round();
        css.push_str(&format!(
            ".{GLASS_CLASS} {{ background: {fill}; backdrop-filter: blur({blur:.0}px); \
             -webkit-backdrop-filter: blur({blur:.0}px); border: 1px solid {edge}; }}\n",
            fill = theme.background.rgba(0.12 + 0.18 * intensity),
            edge = theme.background.rgba(0.25 * intensity),
        ));
    }

    if state.animations.enabled {
        let intensity = state.animations.intensity;
        css.push_str(&format!(
            "@keyframes studio-fx-drift {{ 0%, 100% {{ transform: translateY(0); }} \
             50% {{ transform: translateY(-{drift:.1}px); }} }}\n\
             .{ANIMATED_CLASS} {{ animation: studio-fx-drift {duration:.1}s ease-in-out infinite; }}\n",
            drift = 6.0 * intensity,
            duration = 8.0 - 2.0 * intensity,
        ));
    }

    if state.patterns.enabled {
        let intensity = state.patterns.intensity;
        css.push_str(&format!(
            ".{PATTERN_CLASS}::before {{ content: \"\"; position: absolute; inset: 0; \
             z-index: -1; pointer-events: none; \
             background-image: radial-gradient({dot} 1px, transparent 1px); \
             background-size: 24px 24px; opacity: {intensity:.2}; }}\n",
            dot = theme.accent.rgba(1.0),
        ));
    }

    if state.particles.enabled && state.particle_count > 0 {
        css.push_str(&format!(
            ".{PARTICLES_CLASS} {{ position: absolute; inset: 0; z-index: -1; \
             pointer-events: none; opacity: {opacity:.2}; }}\n",
            opacity = state.particles.intensity,
        ));
    }

    css.push_str(&format!(
        "@media (prefers-reduced-motion: reduce) {{ .{ANIMATED_CLASS} {{ animation: none; }} \
         .{HOVER_CLASS}, .{HOVER_CLASS}:hover {{ transition: none; transform: none; }} }}\n"
    ));
    css
}
