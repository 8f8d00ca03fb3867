//! Project listing with an All / Featured filter.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_card::ProjectCard;
use crate::content::{PROJECTS, ProjectFilter};
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());
    // Sized for the unfiltered list; filtered views use a prefix of the indices.
    let reveal = use_reveal("projects", PROJECTS.len());

    let select = move |next: ProjectFilter| {
        if filter.get_untracked() == next {
            return;
        }
        filter.set(next);
        reveal.refresh();
    };

    view! {
        <Title text="Projects"/>
        <section class="mx-auto max-w-6xl px-6 py-16">
            <h1 class="font-display text-4xl font-bold">"Projects"</h1>
            <p class="mt-3 max-w-2xl text-lg text-muted">
                "Production systems, tools and a few experiments. Each links to a short case study."
            </p>

            <div class="mt-8 flex gap-2" role="group" aria-label="Filter projects">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                class=move || if filter.get() == option { "chip chip--active" } else { "chip" }
                                aria-pressed=move || (filter.get() == option).to_string()
                                on:click=move |_| select(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="mt-10 grid gap-8 md:grid-cols-2">
                {move || {
                    filter
                        .get()
                        .apply()
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project reveal=reveal index=index/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
