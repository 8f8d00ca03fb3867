//! Blog index: featured posts above the rest, with a tag filter.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::post_card::PostCard;
use crate::content::{POSTS, blog_listing, post_tags};
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn BlogPage() -> impl IntoView {
    let tag = RwSignal::new(None::<&'static str>);
    let reveal = use_reveal("blog", POSTS.len());

    let select = move |next: Option<&'static str>| {
        if tag.get_untracked() == next {
            return;
        }
        tag.set(next);
        reveal.refresh();
    };

    let chip = move |label: &'static str, value: Option<&'static str>| {
        view! {
            <button
                type="button"
                class=move || if tag.get() == value { "chip chip--active" } else { "chip" }
                aria-pressed=move || (tag.get() == value).to_string()
                on:click=move |_| select(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <Title text="Blog"/>
        <section class="mx-auto max-w-4xl px-6 py-16">
            <h1 class="font-display text-4xl font-bold">"Writing"</h1>
            <p class="mt-3 text-lg text-muted">"Notes on systems, tooling and the web."</p>

            <div class="mt-8 flex flex-wrap gap-2" role="group" aria-label="Filter posts by tag">
                {chip("All", None)}
                {post_tags().into_iter().map(|t| chip(t, Some(t))).collect_view()}
            </div>

            {move || {
                let listing = blog_listing(tag.get());
                if listing.is_empty() {
                    return view! { <p class="mt-10 text-muted">"No posts with that tag yet."</p> }.into_any();
                }
                let featured = (!listing.featured.is_empty()).then(|| {
                    view! {
                        <section class="mt-10" aria-labelledby="featured-heading">
                            <h2 id="featured-heading" class="section-title">"Featured"</h2>
                            <div class="mt-6 flex flex-col gap-6">
                                {listing
                                    .featured
                                    .iter()
                                    .enumerate()
                                    .map(|(index, post)| view! { <PostCard post=*post reveal=reveal index=index/> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                });
                let heading = (!listing.featured.is_empty()).then(|| view! { <h2 class="section-title">"Recent"</h2> });
                let rest = listing
                    .rest
                    .iter()
                    .enumerate()
                    .map(|(position, post)| {
                        let index = listing.rest_index(position);
                        view! { <PostCard post=*post reveal=reveal index=index/> }
                    })
                    .collect_view();
                view! {
                    {featured}
                    <section class="mt-10">
                        {heading}
                        <div class="mt-6 flex flex-col gap-6">{rest}</div>
                    </section>
                }
                .into_any()
            }}
        </section>
    }
}
