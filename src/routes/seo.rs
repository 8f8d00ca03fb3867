//! `robots.txt` and `sitemap.xml`, generated from the same content tables
//! the client renders.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use std::fmt::Write as _;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use folio_client::content::{POSTS, PROJECTS};
use folio_client::state::nav::NAV_ITEMS;

use crate::state::AppState;

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt(&state.config.site_url))
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], sitemap_xml(&state.config.site_url))
}

#[must_use]
pub fn robots_txt(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

/// One `<url>` per nav page, project and post. Posts carry `<lastmod>`.
#[must_use]
pub fn sitemap_xml(site_url: &str) -> String {
    let mut entries: Vec<(String, Option<&str>)> = NAV_ITEMS.iter().map(|item| (item.path.to_owned(), None)).collect();
    entries.extend(PROJECTS.iter().map(|project| (project.href(), None)));
    entries.extend(POSTS.iter().map(|post| (post.href(), Some(post.published))));

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for (path, lastmod) in entries {
        let loc = if path == "/" { format!("{site_url}/") } else { format!("{site_url}{path}") };
        let _ = write!(xml, "  <url><loc>{}</loc>", escape_xml(&loc));
        if let Some(date) = lastmod {
            let _ = write!(xml, "<lastmod>{date}</lastmod>");
        }
        xml.push_str("</url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
