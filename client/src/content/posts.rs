//! Blog posts.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

/// Average reading speed used for the "N min read" label.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// ISO-8601 calendar date; lexical order equals chronological order.
    pub published: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    /// Markdown body.
    pub body: &'static str,
}

impl Post {
    /// Estimated reading time in whole minutes, never less than one.
    #[must_use]
    pub fn reading_minutes(&self) -> usize {
        let words = self.body.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

pub static POSTS: &[Post] = &[
    Post {
        slug: "scroll-reveal-without-the-jank",
        title: "Scroll reveal without the jank",
        summary: "One intersection observer per section, a monotonic flag per element, and why \
                  animations should never replay.",
        published: "2026-08-14",
        tags: &["wasm", "frontend", "leptos"],
        featured: true,
        body: r"
Every portfolio eventually grows a fade-in-on-scroll effect. Mine grew eight of them, one per
section, each with its own copy of the observer wiring.

## One flag per element

The state is just a list of booleans. An element flips to visible the first time it crosses
the threshold and **never flips back**. Replaying an entrance animation every time someone
scrolls up is distracting, and it costs layout work for nothing.

## Observe each node once

Re-querying the DOM on every effect run is fine as long as you remember what you already
observed. Keep a set of observed targets and hand the observer only the new ones.

## Fail open

If the browser has no intersection observer, show everything. The animation is decoration;
the content is not.
",
    },
    Post {
        slug: "config-languages-are-compilers",
        title: "Configuration languages are compilers",
        summary: "Treating a YAML replacement like a real compiler: lexer, parser, type checker, \
                  and error messages people can act on.",
        published: "2026-05-02",
        tags: &["rust", "compilers"],
        featured: true,
        body: r"
The moment your configuration format grows variables it has become a programming language,
and it deserves a compiler.

## Spans everywhere

Every token carries a byte range. Every diagnostic points at one. Users forgive a strict
checker; they do not forgive `error: invalid value` with no location.

## Types before evaluation

A small type checker catches most mistakes before anything is rendered. The evaluator can
then assume well-typed input and stay simple.
",
    },
    Post {
        slug: "backpressure-by-example",
        title: "Backpressure by example",
        summary: "Bounded channels, load shedding and the queue that ate our latency budget.",
        published: "2025-11-20",
        tags: &["rust", "systems"],
        featured: false,
        body: r"
An unbounded queue is a promise you cannot keep. We learned this the usual way: p99 latency
climbing for an hour before anyone noticed the queue depth graph.

## Bound it

A bounded channel turns silent memory growth into an explicit decision at the producer: wait,
drop, or shed. Each of those is a product decision, and that is the point.
",
    },
    Post {
        slug: "notes-on-design-tokens",
        title: "Notes on design tokens",
        summary: "How a three-way theme switch forced us to finally name our colors.",
        published: "2025-06-09",
        tags: &["frontend", "design"],
        featured: false,
        body: r"
Supporting light, dark and *follow the system* sounds like two palettes. It is actually three
states and one resolver, and the resolver is where the bugs live.

Name colors by role, not by value. `surface-raised` survives a redesign; `gray-100` does not.
",
    },
];

/// All posts, newest first.
#[must_use]
pub fn posts_newest_first() -> Vec<&'static Post> {
    let mut posts: Vec<&'static Post> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published.cmp(a.published));
    posts
}

/// Posts carrying `tag` (case-insensitive), newest first. `None` returns all posts.
#[must_use]
pub fn posts_tagged(tag: Option<&str>) -> Vec<&'static Post> {
    posts_newest_first()
        .into_iter()
        .filter(|post| tag.map_or(true, |t| post.has_tag(t)))
        .collect()
}

/// Featured posts, newest first.
#[must_use]
pub fn featured_posts() -> Vec<&'static Post> {
    posts_newest_first().into_iter().filter(|post| post.featured).collect()
}

/// Posts not featured, newest first.
#[must_use]
pub fn recent_posts() -> Vec<&'static Post> {
    posts_newest_first().into_iter().filter(|post| !post.featured).collect()
}

/// Blog index layout: a featured block above the remaining posts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogListing {
    pub featured: Vec<&'static Post>,
    pub rest: Vec<&'static Post>,
}

impl BlogListing {
    /// Reveal index of `rest[position]`; the featured block takes the first slots.
    #[must_use]
    pub fn rest_index(&self, position: usize) -> usize {
        self.featured.len() + position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.featured.len() + self.rest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.rest.is_empty()
    }
}

/// Unfiltered, featured posts lead; under a tag filter everything is one
/// flat list.
#[must_use]
pub fn blog_listing(tag: Option<&str>) -> BlogListing {
    match tag {
        None => BlogListing { featured: featured_posts(), rest: recent_posts() },
        Some(_) => BlogListing { featured: Vec::new(), rest: posts_tagged(tag) },
    }
}

#[must_use]
pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Distinct tags across all posts, sorted alphabetically.
#[must_use]
pub fn post_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = POSTS.iter().flat_map(|post| post.tags.iter().copied()).collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}
