//! Rendered markdown block.

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

#[component]
pub fn MarkdownBody(source: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let html = render_markdown_html(source);
    view! { <div class=format!("prose max-w-none {class}") inner_html=html></div> }
}
