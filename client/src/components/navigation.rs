//! Top navigation bar with route highlighting, mobile menu and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` inside the router so it can read the current path.
//! The mobile menu closes whenever one of its links is activated. A window
//! scroll listener switches the header to its solid style once the page
//! leaves the top; it is removed when the header unmounts.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::PROFILE;
use crate::state::nav::{MobileMenu, NAV_ITEMS, header_class};
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu = RwSignal::new(MobileMenu::default());
    let reveal = use_reveal("nav", 1);
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    track_scroll(scrolled);

    view! {
        <header
            class=move || format!(
                "fixed inset-x-0 top-0 z-40 {} {}",
                header_class(scrolled.get()),
                reveal.class(0),
            )
            data-reveal-scope=reveal.scope()
            data-reveal-index="0"
        >
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4" aria-label="Primary">
                <a href="/" class="font-display text-lg font-bold tracking-tight">
                    {PROFILE.name}
                </a>

                <ul class="hidden items-center gap-8 md:flex">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=item.path
                                        class=move || item.link_class(&pathname.get())
                                        aria-current=move || item.is_active(&pathname.get()).then_some("page")
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="flex items-center gap-2">
                    <ThemeToggle/>
                    <button
                        type="button"
                        class="icon-btn md:hidden"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu.get().open.to_string()
                        aria-label=move || if menu.get().open { "Close menu" } else { "Open menu" }
                        on:click=move |_| menu.update(MobileMenu::toggle)
                    >
                        <Show
                            when=move || menu.get().open
                            fallback=|| view! {
                                <svg class="h-6 w-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                                    <path d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class="h-6 w-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                                <path d="M6 6l12 12M18 6L6 18"/>
                            </svg>
                        </Show>
                    </button>
                </div>
            </nav>

            <Show when=move || menu.get().open>
                <ul id="mobile-menu" class="flex flex-col gap-1 border-t border-subtle px-6 py-4 md:hidden">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=item.path
                                        class=move || format!("block rounded-md px-3 py-2 {}", item.link_class(&pathname.get()))
                                        on:click=move |_| menu.update(|m| m.on_navigate(item))
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </header>
    }
}

#[cfg(feature = "hydrate")]
fn track_scroll(scrolled: RwSignal<bool>) {
    use crate::state::nav::is_scrolled;

    let read = move || {
        let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let now = is_scrolled(offset);
        if scrolled.get_untracked() != now {
            scrolled.set(now);
        }
    };
    read();

    let handle = window_event_listener(leptos::ev::scroll, move |_| read());
    let handle = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        if let Some(Some(handle)) = handle.try_update_value(Option::take) {
            handle.remove();
        }
    });
}
