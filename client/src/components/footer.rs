//! Site footer with social links.

use leptos::prelude::*;

use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::state::nav::NAV_ITEMS;
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn Footer() -> impl IntoView {
    let reveal = use_reveal("footer", 1);

    view! {
        <footer
            class=move || format!("mt-24 border-t border-subtle py-12 {}", reveal.class(0))
            data-reveal-scope=reveal.scope()
            data-reveal-index="0"
        >
            <div class="mx-auto flex max-w-6xl flex-col gap-8 px-6 md:flex-row md:items-center md:justify-between">
                <div>
                    <p class="font-display text-lg font-bold">{PROFILE.name}</p>
                    <p class="text-sm text-muted">{PROFILE.role}</p>
                </div>
                <ul class="flex gap-6 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <li><a href=item.path class="text-muted hover:text-accent">{item.label}</a></li> })
                        .collect_view()}
                </ul>
                <ul class="flex gap-4 text-sm">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href target="_blank" rel="noopener noreferrer" class="text-muted hover:text-accent">
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <p class="mt-8 text-center text-xs text-muted">{PROFILE.copyright}</p>
        </footer>
    }
}
