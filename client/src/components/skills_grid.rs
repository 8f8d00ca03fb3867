//! Skill groups with proficiency bars.

use leptos::prelude::*;

use crate::content::SKILL_GROUPS;
use crate::util::reveal_observer::use_reveal;

#[component]
pub fn SkillsGrid() -> impl IntoView {
    let reveal = use_reveal("skills", SKILL_GROUPS.len());

    view! {
        <section id="skills" class="mx-auto max-w-6xl px-6 py-20">
            <h2 class="section-title">"Skills"</h2>
            <div class="mt-10 grid gap-8 md:grid-cols-3">
                {SKILL_GROUPS
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        view! {
                            <div
                                class=move || format!("card p-6 {}", reveal.class(index))
                                style=reveal.style(index)
                                data-reveal-scope=reveal.scope()
                                data-reveal-index=index.to_string()
                            >
                                <h3 class="font-display text-lg font-semibold">{group.title}</h3>
                                <ul class="mt-4 flex flex-col gap-3">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li>
                                                    <div class="flex justify-between text-sm">
                                                        <span>{skill.name}</span>
                                                        <span class="text-muted">{format!("{}%", skill.level)}</span>
                                                    </div>
                                                    <div class="skill-bar mt-1">
                                                        <div
                                                            class="skill-bar__fill transition-all duration-1000 ease-out"
                                                            style=move || if reveal.visible(index) { skill.bar_style() } else { "width: 0%".to_owned() }
                                                        ></div>
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
