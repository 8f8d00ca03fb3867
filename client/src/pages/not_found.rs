//! Fallback for unknown routes and missing slugs.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not found"/>
        <section class="mx-auto flex max-w-xl flex-col items-center gap-4 px-6 py-32 text-center">
            <p class="eyebrow">"404"</p>
            <h1 class="font-display text-4xl font-bold">"Nothing here"</h1>
            <p class="text-muted">"The page you were looking for moved or never existed."</p>
            <a href="/" class="btn btn--primary mt-4">"Back home"</a>
        </section>
    }
}
