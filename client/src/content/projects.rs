//! Project case studies.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub year: u16,
    pub role: &'static str,
    pub stack: &'static [&'static str],
    pub featured: bool,
    pub image: &'static str,
    pub repo_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    /// Markdown sections of the case study.
    pub problem: &'static str,
    pub solution: &'static str,
    pub outcome: &'static str,
}

impl Project {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

/// Listing filter on the projects page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 2] = [ProjectFilter::All, ProjectFilter::Featured];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Featured => "Featured",
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
        }
    }

    /// Projects passing the filter, newest first.
    #[must_use]
    pub fn apply(self) -> Vec<&'static Project> {
        let mut projects: Vec<&'static Project> = PROJECTS.iter().filter(|p| self.matches(p)).collect();
        projects.sort_by(|a, b| b.year.cmp(&a.year));
        projects
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "tidewater",
        title: "Tidewater",
        summary: "A streaming ingest service that replaced a nightly batch job for a logistics \
                  platform, cutting data freshness from 24 hours to under a minute.",
        year: 2026,
        role: "Lead engineer",
        stack: &["Rust", "Tokio", "Postgres", "Kafka"],
        featured: true,
        image: "/images/projects/tidewater.svg",
        repo_url: None,
        live_url: None,
        problem: "Shipment events were exported once a night. Dispatchers planned routes on data \
                  that was up to a day old, and the export itself took four hours.",
        solution: "A Tokio service consumes the event topic, batches writes per tenant, and \
                   applies **bounded backpressure** so a slow tenant never stalls the others.",
        outcome: "Median freshness dropped to 40 seconds. The batch job and its 3 a.m. pager \
                  alerts were retired.",
    },
    Project {
        slug: "kestrel-config",
        title: "Kestrel",
        summary: "A typed configuration language with a real compiler pipeline and editor \
                  diagnostics.",
        year: 2025,
        role: "Author",
        stack: &["Rust", "LSP", "WASM"],
        featured: true,
        image: "/images/projects/kestrel.svg",
        repo_url: Some("https://github.com/example/kestrel"),
        live_url: Some("https://kestrel.example.dev/playground"),
        problem: "Hundreds of YAML files with copy-pasted blocks and no validation until deploy.",
        solution: "A small language with imports, records and a type checker. Errors carry \
                   spans; the language server shows them inline.",
        outcome: "Deploy-time config failures went from weekly to rare. The playground runs the \
                  whole compiler in the browser.",
    },
    Project {
        slug: "lumen-design-system",
        title: "Lumen",
        summary: "A component library and token pipeline shared by four product teams.",
        year: 2024,
        role: "Front-end lead",
        stack: &["TypeScript", "CSS", "Figma tokens"],
        featured: false,
        image: "/images/projects/lumen.svg",
        repo_url: None,
        live_url: Some("https://lumen.example.dev"),
        problem: "Four teams, four button components, and a dark mode nobody trusted.",
        solution: "Role-named design tokens compiled to CSS custom properties, with light, dark \
                   and system themes resolved in one place.",
        outcome: "Theme bugs dropped to near zero and new screens ship with consistent spacing \
                  by default.",
    },
    Project {
        slug: "ferry-cli",
        title: "Ferry",
        summary: "A resumable file transfer CLI for flaky conference Wi-Fi.",
        year: 2023,
        role: "Author",
        stack: &["Rust", "QUIC"],
        featured: false,
        image: "/images/projects/ferry.svg",
        repo_url: Some("https://github.com/example/ferry"),
        live_url: None,
        problem: "Large uploads restarted from zero every time the connection dropped.",
        solution: "Content-addressed chunks with a manifest; the receiver reports what it already \
                   has and the sender skips it.",
        outcome: "Used by a handful of photographers to move shoots between venues.",
    },
];

#[must_use]
pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

#[must_use]
pub fn featured_projects() -> Vec<&'static Project> {
    ProjectFilter::Featured.apply()
}
