//! Static site content: profile, posts, projects, skills, contact entries.
//!
//! DESIGN
//! ======
//! Everything here is `'static` data compiled into the binary. Pages only
//! read from these tables; nothing mutates them at runtime, so lookups hand
//! out `&'static` references instead of clones.

pub mod contact;
pub mod posts;
pub mod projects;
pub mod skills;

pub use contact::{CONTACT_ENTRIES, ContactEntry, SOCIAL_LINKS, SocialLink};
pub use posts::{
    BlogListing, POSTS, Post, blog_listing, featured_posts, find_post, post_tags, posts_newest_first, posts_tagged,
    recent_posts,
};
pub use projects::{PROJECTS, Project, ProjectFilter, featured_projects, find_project};
pub use skills::{SKILL_GROUPS, Skill, SkillGroup};

/// Site owner profile shown in the hero, about section and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub about: &'static [&'static str],
    pub copyright: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Mara Lindqvist",
    role: "Systems & Product Engineer",
    tagline: "I build fast, dependable software and the interfaces people actually enjoy using.",
    location: "Gothenburg, Sweden",
    avatar: "/images/avatar.svg",
    about: &[
        "I have spent the last nine years shipping backend services, developer tooling and \
         the occasional design system. Most of my work sits where performance budgets meet \
         product deadlines.",
        "Lately I write a lot of Rust: network services, small compilers for configuration \
         languages, and WASM front ends like the one you are reading right now.",
        "Outside of work I climb, restore old film cameras and keep a slowly growing \
         collection of mechanical keyboards.",
    ],
    copyright: "© 2026 Mara Lindqvist",
};
