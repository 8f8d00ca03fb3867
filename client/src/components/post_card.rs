//! Blog listing entry.

use leptos::prelude::*;

use crate::components::tag_list::TagList;
use crate::content::Post;
use crate::util::reveal_observer::Reveal;

#[component]
pub fn PostCard(post: &'static Post, reveal: Reveal, index: usize) -> impl IntoView {
    view! {
        <article
            class=move || format!("card p-6 {}", reveal.class(index))
            style=reveal.style(index)
            data-reveal-scope=reveal.scope()
            data-reveal-index=index.to_string()
        >
            <header class="flex flex-wrap items-center gap-3 text-sm text-muted">
                <time datetime=post.published>{post.published}</time>
                <span aria-hidden="true">"·"</span>
                <span>{format!("{} min read", post.reading_minutes())}</span>
                {post.featured.then(|| view! { <span class="chip chip--accent">"Featured"</span> })}
            </header>
            <h3 class="mt-2 font-display text-xl font-semibold">
                <a href=post.href() class="hover:text-accent">{post.title}</a>
            </h3>
            <p class="mt-2 text-muted">{post.summary}</p>
            <div class="mt-4">
                <TagList tags=post.tags/>
            </div>
        </article>
    }
}
