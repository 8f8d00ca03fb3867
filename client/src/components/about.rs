//! About section: avatar plus profile paragraphs.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    // Index 0 is the avatar; paragraphs follow.
    let reveal = use_reveal("about", PROFILE.about.len() + 1);

    view! {
        <section id="about" class="mx-auto grid max-w-6xl gap-12 px-6 py-20 md:grid-cols-[1fr_2fr]">
            <img
                src=PROFILE.avatar
                alt=format!("Portrait of {}", PROFILE.name)
                class=move || format!("aspect-square w-full max-w-xs rounded-2xl object-cover {}", reveal.class(0))
                data-reveal-scope=reveal.scope()
                data-reveal-index="0"
            />
            <div class="flex flex-col gap-5">
                <h2 class="section-title">"About"</h2>
                {PROFILE
                    .about
                    .iter()
                    .enumerate()
                    .map(|(i, paragraph)| {
                        let index = i + 1;
                        view! {
                            <p
                                class=move || format!("text-lg leading-relaxed {}", reveal.class(index))
                                style=reveal.style(index)
                                data-reveal-scope=reveal.scope()
                                data-reveal-index=index.to_string()
                            >
                                {*paragraph}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
