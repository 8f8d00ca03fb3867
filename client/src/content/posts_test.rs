use super::*;

// =============================================================
// Table integrity
// =============================================================

#[test]
fn post_slugs_are_unique() {
    let mut slugs: Vec<&str> = POSTS.iter().map(|p| p.slug).collect();
    let total = slugs.len();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), total);
}

#[test]
fn post_dates_are_iso_formatted() {
    for post in POSTS {
        let parts: Vec<&str> = post.published.split('-').collect();
        assert_eq!(parts.len(), 3, "{}", post.slug);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }
}

// =============================================================
// Lookup and ordering
// =============================================================

#[test]
fn posts_newest_first_is_sorted_descending() {
    let posts = posts_newest_first();
    assert_eq!(posts.len(), POSTS.len());
    for pair in posts.windows(2) {
        assert!(pair[0].published >= pair[1].published);
    }
}

#[test]
fn find_post_by_slug() {
    let post = find_post("backpressure-by-example").expect("post should exist");
    assert_eq!(post.title, "Backpressure by example");
    assert!(find_post("does-not-exist").is_none());
}

#[test]
fn post_href_uses_blog_prefix() {
    let post = find_post("notes-on-design-tokens").expect("post should exist");
    assert_eq!(post.href(), "/blog/notes-on-design-tokens");
}

// =============================================================
// Tags
// =============================================================

#[test]
fn post_tags_are_sorted_and_distinct() {
    let tags = post_tags();
    let mut expected = tags.clone();
    expected.sort_unstable();
    expected.dedup();
    assert_eq!(tags, expected);
    assert!(tags.contains(&"rust"));
}

#[test]
fn posts_tagged_filters_case_insensitively() {
    let rust = posts_tagged(Some("RUST"));
    assert!(!rust.is_empty());
    assert!(rust.iter().all(|p| p.has_tag("rust")));
    assert_eq!(posts_tagged(None).len(), POSTS.len());
    assert!(posts_tagged(Some("cobol")).is_empty());
}

// =============================================================
// Featured split
// =============================================================

#[test]
fn featured_and_recent_partition_all_posts() {
    let featured = featured_posts();
    let recent = recent_posts();
    assert!(!featured.is_empty());
    assert!(!recent.is_empty());
    assert!(featured.iter().all(|p| p.featured));
    assert!(recent.iter().all(|p| !p.featured));
    assert_eq!(featured.len() + recent.len(), POSTS.len());
    for pair in featured.windows(2).chain(recent.windows(2)) {
        assert!(pair[0].published >= pair[1].published);
    }
}

#[test]
fn unfiltered_listing_leads_with_featured() {
    let listing = blog_listing(None);
    assert_eq!(listing.featured, featured_posts());
    assert_eq!(listing.rest, recent_posts());
    assert_eq!(listing.len(), POSTS.len());
}

#[test]
fn rest_indices_continue_after_featured() {
    let listing = blog_listing(None);
    let offset = listing.featured.len();
    assert_eq!(listing.rest_index(0), offset);
    let mut indices: Vec<usize> = (0..listing.featured.len()).collect();
    indices.extend((0..listing.rest.len()).map(|i| listing.rest_index(i)));
    assert_eq!(indices, (0..POSTS.len()).collect::<Vec<_>>());
}

#[test]
fn tagged_listing_is_flat() {
    let listing = blog_listing(Some("rust"));
    assert!(listing.featured.is_empty());
    assert_eq!(listing.rest, posts_tagged(Some("rust")));
    assert_eq!(listing.rest_index(0), 0);
    assert!(blog_listing(Some("cobol")).is_empty());
}

// =============================================================
// Reading time
// =============================================================

#[test]
fn reading_minutes_is_at_least_one() {
    let post = Post { body: "", ..POSTS[0] };
    assert_eq!(post.reading_minutes(), 1);
}

#[test]
fn reading_minutes_rounds_up() {
    let body: String = "word ".repeat(201);
    let leaked: &'static str = Box::leak(body.into_boxed_str());
    let post = Post { body: leaked, ..POSTS[0] };
    assert_eq!(post.reading_minutes(), 2);
}
