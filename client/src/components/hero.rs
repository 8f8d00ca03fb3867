//! Landing hero with staggered entrance.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::reveal_observer::use_reveal_with_step;

#[component]
pub fn Hero() -> impl IntoView {
    let reveal = use_reveal_with_step("hero", 4, 150);

    view! {
        <section class="mx-auto flex max-w-6xl flex-col items-start gap-6 px-6 py-24 md:py-32">
            <p
                class=move || format!("eyebrow {}", reveal.class(0))
                style=reveal.style(0)
                data-reveal-scope=reveal.scope()
                data-reveal-index="0"
            >
                {format!("{} · {}", PROFILE.role, PROFILE.location)}
            </p>
            <h1
                class=move || format!("font-display text-5xl font-bold tracking-tight md:text-7xl {}", reveal.class(1))
                style=reveal.style(1)
                data-reveal-scope=reveal.scope()
                data-reveal-index="1"
            >
                {format!("Hi, I'm {}.", PROFILE.name)}
            </h1>
            <p
                class=move || format!("max-w-2xl text-xl text-muted {}", reveal.class(2))
                style=reveal.style(2)
                data-reveal-scope=reveal.scope()
                data-reveal-index="2"
            >
                {PROFILE.tagline}
            </p>
            <div
                class=move || format!("flex flex-wrap gap-4 {}", reveal.class(3))
                style=reveal.style(3)
                data-reveal-scope=reveal.scope()
                data-reveal-index="3"
            >
                <a href="/projects" class="btn btn--primary">"View projects"</a>
                <a href="/contact" class="btn btn--ghost">"Get in touch"</a>
            </div>
        </section>
    }
}
