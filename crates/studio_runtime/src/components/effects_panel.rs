use leptos::*;
use studio_effects::{EffectKind, EffectToggleSet, ParticleType};

use super::use_studio_runtime;
use crate::reducer::StudioAction;

const PARTICLE_SLIDER_MAX: i32 = 100;

fn toggle_label(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::Hover => "Hover lift",
        EffectKind::Glassmorphism => "Glass",
        EffectKind::Animations => "Subtle animations",
        EffectKind::Patterns => "Background pattern",
        EffectKind::Particles => "Particles",
    }
}

#[component]
/// Effect toggles, particle controls, and the performance readout for the preview surface.
pub(super) fn EffectsPanelBody() -> impl IntoView {
    let runtime = use_studio_runtime();
    let toggles = create_memo(move |_| runtime.state.get().effects);
    let summary = create_memo(move |_| runtime.effects_config.get().summary);
    let is_mobile = create_memo(move |_| runtime.effects_config.get().state.is_mobile);

    let update = move |apply: &dyn Fn(&mut EffectToggleSet)| {
        let mut next = toggles.get_untracked();
        apply(&mut next);
        runtime.dispatch_action(StudioAction::SetEffectToggles { toggles: next });
    };

    view! {
        <div class="studio-effects-panel">
            <fieldset>
                <legend>"Effects"</legend>
                {EffectKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <label
                                class="studio-effect-toggle"
                                data-effect=kind.label()
                                data-mobile-suppressed=move || {
                                    (is_mobile.get() && !kind.is_mobile_safe()).to_string()
                                }
                            >
                                <input
                                    type="checkbox"
                                    prop:checked=move || toggles.get().requested(kind)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        update(&|t: &mut EffectToggleSet| t.set(kind, checked));
                                    }
                                />
                                {toggle_label(kind)}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
            <fieldset prop:disabled=move || !toggles.get().particles>
                <legend>"Particles"</legend>
                <select
                    prop:value=move || toggles.get().particle_type.as_str()
                    on:change=move |ev| {
                        let token = event_target_value(&ev);
                        if let Some(particle_type) = ParticleType::from_token(&token) {
                            update(&|t: &mut EffectToggleSet| t.particle_type = particle_type);
                        }
                    }
                >
                    {ParticleType::ALL
                        .into_iter()
                        .map(|particle_type| {
                            view! {
                                <option
                                    value=particle_type.as_str()
                                    prop:selected=move || toggles.get().particle_type == particle_type
                                >
                                    {particle_type.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="range"
                    min="0"
                    max=PARTICLE_SLIDER_MAX
                    prop:value=move || toggles.get().particle_count.to_string()
                    on:input=move |ev| {
                        if let Ok(count) = event_target_value(&ev).parse::<i32>() {
                            update(&|t: &mut EffectToggleSet| t.particle_count = count);
                        }
                    }
                />
            </fieldset>
            <p class="studio-effects-tier" data-tier=move || summary.get().tier.as_str()>
                {move || format!("Estimated cost {}", summary.get().estimated_cost)}
            </p>
            <ul class="studio-effects-warnings">
                {move || {
                    summary
                        .get()
                        .warnings
                        .iter()
                        .map(|warning| view! { <li>{warning.message()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
