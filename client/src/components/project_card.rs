//! Card linking to a project case study.

use leptos::prelude::*;

use crate::components::tag_list::TagList;
use crate::content::Project;
use crate::util::reveal_observer::Reveal;

#[component]
pub fn ProjectCard(project: &'static Project, reveal: Reveal, index: usize) -> impl IntoView {
    view! {
        <article
            class=move || format!("card group overflow-hidden {}", reveal.class(index))
            style=reveal.style(index)
            data-reveal-scope=reveal.scope()
            data-reveal-index=index.to_string()
        >
            <a href=project.href() class="block">
                <img
                    src=project.image
                    alt=format!("{} screenshot", project.title)
                    loading="lazy"
                    class="aspect-video w-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="flex flex-col gap-3 p-6">
                    <div class="flex items-baseline justify-between gap-4">
                        <h3 class="font-display text-xl font-semibold">{project.title}</h3>
                        <span class="text-sm text-muted">{project.year}</span>
                    </div>
                    <p class="text-muted">{project.summary}</p>
                    <TagList tags=project.stack/>
                    <Show when=move || project.featured>
                        <span class="chip chip--accent self-start">"Featured"</span>
                    </Show>
                </div>
            </a>
        </article>
    }
}
