use super::*;

#[test]
fn project_slugs_are_unique() {
    let mut slugs: Vec<&str> = PROJECTS.iter().map(|p| p.slug).collect();
    let total = slugs.len();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), total);
}

#[test]
fn find_project_by_slug() {
    let project = find_project("kestrel-config").expect("project should exist");
    assert_eq!(project.title, "Kestrel");
    assert_eq!(project.href(), "/projects/kestrel-config");
    assert!(find_project("nope").is_none());
}

#[test]
fn featured_projects_only_contains_featured() {
    let featured = featured_projects();
    assert!(!featured.is_empty());
    assert!(featured.iter().all(|p| p.featured));
}

#[test]
fn filter_all_returns_every_project_newest_first() {
    let all = ProjectFilter::All.apply();
    assert_eq!(all.len(), PROJECTS.len());
    for pair in all.windows(2) {
        assert!(pair[0].year >= pair[1].year);
    }
}

#[test]
fn project_filter_default_is_all() {
    assert_eq!(ProjectFilter::default(), ProjectFilter::All);
    assert_eq!(ProjectFilter::All.label(), "All");
    assert_eq!(ProjectFilter::Featured.label(), "Featured");
}
