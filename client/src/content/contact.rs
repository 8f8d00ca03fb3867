//! Contact details and social links.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static CONTACT_ENTRIES: &[ContactEntry] = &[
    ContactEntry {
        id: "email",
        label: "Email",
        value: "hello@maralindqvist.dev",
        href: Some("mailto:hello@maralindqvist.dev"),
    },
    ContactEntry {
        id: "location",
        label: "Based in",
        value: "Gothenburg, Sweden (CET)",
        href: None,
    },
    ContactEntry {
        id: "availability",
        label: "Availability",
        value: "Open to contract work from January",
        href: None,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/example" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/example" },
    SocialLink { label: "Mastodon", href: "https://hachyderm.io/@example" },
];
