//! Visual-effects configuration for themed studio surfaces.
//!
//! Every function here is pure and total: caller-supplied toggle bags are defaulted rather than
//! rejected, device-class overrides are applied, and the resulting [`EffectsState`] feeds the CSS
//! generator, the particle-engine preset builder, and the performance summary.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod compute;
pub mod css;
pub mod model;
pub mod particles;
pub mod policy;
pub mod summary;
pub mod theme;

pub use compute::{build_effects_config, compute_effects, compute_effects_with, EffectsConfig};
pub use css::{generate_effects_css, surface_classes};
pub use model::{EffectKind, EffectSetting, EffectToggleSet, EffectsState, ParticleType};
pub use particles::{
    particle_engine_config, HoverMode, LinkSettings, ParticleEngineConfig, ParticleShape, SizeRange,
};
pub use policy::{EffectIntensities, EffectsPolicy};
pub use summary::{summarize_effects, EffectsSummary, EffectsWarning, PerformanceTier};
pub use theme::{ColorParseError, HexColor, RawSurfaceTheme, SurfaceTheme};
