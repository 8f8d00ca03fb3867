//! Single post at `/blog/:slug`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::markdown_body::MarkdownBody;
use crate::components::tag_list::TagList;
use crate::content::{Post, find_post};
use crate::pages::not_found::NotFoundPage;
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match find_post(&slug()) {
        Some(post) => view! { <PostArticle post=post/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn PostArticle(post: &'static Post) -> impl IntoView {
    let reveal = use_reveal("post", 2);

    view! {
        <Title text=post.title/>
        <Meta name="description" content=post.summary/>
        <article class="mx-auto max-w-3xl px-6 py-16">
            <a href="/blog" class="text-sm text-accent hover:underline">"← All posts"</a>
            <header
                class=move || format!("mt-6 {}", reveal.class(0))
                data-reveal-scope=reveal.scope()
                data-reveal-index="0"
            >
                <p class="text-sm text-muted">
                    <time datetime=post.published>{post.published}</time>
                    {format!(" · {} min read", post.reading_minutes())}
                </p>
                <h1 class="mt-2 font-display text-4xl font-bold">{post.title}</h1>
                <div class="mt-4">
                    <TagList tags=post.tags/>
                </div>
            </header>
            <div
                class=move || format!("mt-10 {}", reveal.class(1))
                style=reveal.style(1)
                data-reveal-scope=reveal.scope()
                data-reveal-index="1"
            >
                <MarkdownBody source=post.body/>
            </div>
        </article>
    }
}
