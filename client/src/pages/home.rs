//! Landing page: hero, about, skills, featured work and latest writing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::about::About;
use crate::components::hero::Hero;
use crate::components::post_card::PostCard;
use crate::components::project_card::ProjectCard;
use crate::components::skills_grid::SkillsGrid;
use crate::content::{featured_projects, posts_newest_first};
use crate::util::reveal_observer::use_reveal;

const LATEST_POSTS: usize = 2;

#[component]
pub fn HomePage() -> impl IntoView {
    let projects = featured_projects();
    let posts: Vec<_> = posts_newest_first().into_iter().take(LATEST_POSTS).collect();

    let project_reveal = use_reveal("home-projects", projects.len());
    let post_reveal = use_reveal("home-posts", posts.len());
    let cta_reveal = use_reveal("home-cta", 1);

    view! {
        <Title text="Home"/>
        <Hero/>
        <About/>
        <SkillsGrid/>

        <section class="mx-auto max-w-6xl px-6 py-20">
            <div class="flex items-baseline justify-between">
                <h2 class="section-title">"Featured projects"</h2>
                <a href="/projects" class="text-accent hover:underline">"All projects →"</a>
            </div>
            <div class="mt-10 grid gap-8 md:grid-cols-2">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project reveal=project_reveal index=index/> })
                    .collect_view()}
            </div>
        </section>

        <section class="mx-auto max-w-6xl px-6 py-20">
            <div class="flex items-baseline justify-between">
                <h2 class="section-title">"Latest writing"</h2>
                <a href="/blog" class="text-accent hover:underline">"All posts →"</a>
            </div>
            <div class="mt-10 grid gap-6 md:grid-cols-2">
                {posts
                    .into_iter()
                    .enumerate()
                    .map(|(index, post)| view! { <PostCard post=post reveal=post_reveal index=index/> })
                    .collect_view()}
            </div>
        </section>

        <section
            class=move || format!("mx-auto max-w-3xl px-6 py-24 text-center {}", cta_reveal.class(0))
            data-reveal-scope=cta_reveal.scope()
            data-reveal-index="0"
        >
            <h2 class="font-display text-3xl font-bold">"Have something worth building?"</h2>
            <p class="mt-4 text-lg text-muted">
                "I take on a small number of projects each year. Tell me about yours."
            </p>
            <a href="/contact" class="btn btn--primary mt-8 inline-block">"Start a conversation"</a>
        </section>
    }
}
