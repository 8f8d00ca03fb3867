//! Row of small tag chips.

use leptos::prelude::*;

#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2" aria-label="Tags">
            {tags
                .iter()
                .map(|tag| view! { <li class="chip">{*tag}</li> })
                .collect_view()}
        </ul>
    }
}
