use leptos::*;
use leptos_meta::*;
use studio_runtime::{RawSurfaceTheme, StudioProvider, StudioShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Orbital Studio" />
        <Meta name="description" content="Card and slide editor with floating tool panels." />

        <div class="site-root">
            <StudioEntry />
        </div>
    }
}

fn card_theme() -> RawSurfaceTheme {
    RawSurfaceTheme {
        primary_color: Some("#5b4bdb".to_string()),
        accent_color: Some("#f0a500".to_string()),
        ..RawSurfaceTheme::default()
    }
}

#[component]
pub fn StudioEntry() -> impl IntoView {
    view! {
        <StudioProvider theme=card_theme()>
            <StudioShell>
                <article class="studio-preview-card">
                    <h1>"Untitled card"</h1>
                    <p>"Toggle effects from the Visual Effects panel to preview them here."</p>
                </article>
            </StudioShell>
        </StudioProvider>
    }
}
