//! Contact page: direct details, social links and the enquiry form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;
use crate::content::{CONTACT_ENTRIES, SOCIAL_LINKS};
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn ContactPage() -> impl IntoView {
    // Entries first, then the form.
    let reveal = use_reveal("contact", CONTACT_ENTRIES.len() + 1);
    let form_index = CONTACT_ENTRIES.len();

    view! {
        <Title text="Contact"/>
        <section class="mx-auto grid max-w-6xl gap-12 px-6 py-16 md:grid-cols-[1fr_2fr]">
            <div class="flex flex-col gap-6">
                <h1 class="font-display text-4xl font-bold">"Let's talk"</h1>
                <p class="text-lg text-muted">
                    "Questions, project ideas or just a hello. Use the form or reach me directly."
                </p>
                <dl class="flex flex-col gap-4">
                    {CONTACT_ENTRIES
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <div
                                    class=move || reveal.class(index)
                                    style=reveal.style(index)
                                    data-reveal-scope=reveal.scope()
                                    data-reveal-index=index.to_string()
                                >
                                    <dt class="text-sm text-muted">{entry.label}</dt>
                                    <dd class="font-medium">
                                        {match entry.href {
                                            Some(href) => view! { <a href=href class="hover:text-accent">{entry.value}</a> }.into_any(),
                                            None => view! { <span>{entry.value}</span> }.into_any(),
                                        }}
                                    </dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                <ul class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! { <li><a href=link.href class="text-muted hover:text-accent" rel="me noopener" target="_blank">{link.label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
            <div
                class=move || reveal.class(form_index)
                style=reveal.style(form_index)
                data-reveal-scope=reveal.scope()
                data-reveal-index=form_index.to_string()
            >
                <ContactForm/>
            </div>
        </section>
    }
}
