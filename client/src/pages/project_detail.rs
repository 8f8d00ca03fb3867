//! Project case study at `/projects/:slug`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::markdown_body::MarkdownBody;
use crate::components::tag_list::TagList;
use crate::content::{Project, find_project};
use crate::pages::not_found::NotFoundPage;
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match find_project(&slug()) {
        Some(project) => view! { <CaseStudy project=project/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn CaseStudy(project: &'static Project) -> impl IntoView {
    let sections = [("The problem", project.problem), ("The approach", project.solution), ("The outcome", project.outcome)];
    let reveal = use_reveal("case-study", sections.len());

    view! {
        <Title text=project.title/>
        <Meta name="description" content=project.summary/>
        <article class="mx-auto max-w-3xl px-6 py-16">
            <a href="/projects" class="text-sm text-accent hover:underline">"← All projects"</a>
            <header class="mt-6">
                <p class="eyebrow">{format!("{} · {}", project.year, project.role)}</p>
                <h1 class="mt-2 font-display text-4xl font-bold">{project.title}</h1>
                <p class="mt-4 text-lg text-muted">{project.summary}</p>
                <div class="mt-4">
                    <TagList tags=project.stack/>
                </div>
                <div class="mt-6 flex gap-4">
                    {project.live_url.map(|href| view! { <a href=href class="btn btn--primary" rel="noopener" target="_blank">"Visit site"</a> })}
                    {project.repo_url.map(|href| view! { <a href=href class="btn btn--ghost" rel="noopener" target="_blank">"Source"</a> })}
                </div>
            </header>
            <img src=project.image alt=format!("{} screenshot", project.title) class="mt-10 w-full rounded-2xl"/>
            {sections
                .into_iter()
                .enumerate()
                .map(|(index, (heading, body))| {
                    view! {
                        <section
                            class=move || format!("mt-12 {}", reveal.class(index))
                            data-reveal-scope=reveal.scope()
                            data-reveal-index=index.to_string()
                        >
                            <h2 class="section-title">{heading}</h2>
                            <MarkdownBody source=body class="mt-4"/>
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}
