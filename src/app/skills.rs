use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{SKILLS, SKILL_CATEGORIES};
use crate::controls::{CategoryFilter, SkillFilter};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (category, set_category) = signal(CategoryFilter::All);
    let (term, set_term) = signal(String::new());

    let filtered = move || {
        let filter = SkillFilter {
            category: category.get(),
            term: term.get(),
        };
        filter.apply(SKILLS)
    };

    view! {
        <section id="skills" class="py-20 px-4 bg-slate-50/50">
            <div class="container mx-auto">
                <SectionHeading
                    title="Skills & Technologies"
                    subtitle="Technologies I use to build exceptional web applications"
                />
                <div class="max-w-md mx-auto mb-8 animate-fade-in-up animation-delay-100">
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-slate-600">
                            "🔍"
                        </span>
                        <input
                            type="text"
                            placeholder="Search skills..."
                            prop:value=move || term.get()
                            on:input=move |ev| set_term.set(event_target_value(&ev))
                            class="w-full pl-10 pr-4 py-2 rounded-md border border-slate-300 bg-white/80 backdrop-blur-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                </div>
                <div class="flex flex-wrap justify-center gap-4 mb-12 animate-fade-in-up animation-delay-200">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|c| {
                            let name = c.name;
                            let style = c.style;
                            let is_active = move || category.with(|active| active.name() == name);
                            view! {
                                <button
                                    on:click=move |_| set_category.set(CategoryFilter::from(name))
                                    class=move || {
                                        if is_active() {
                                            format!("px-4 py-2 rounded-md text-white shadow-lg {style}")
                                        } else {
                                            "px-4 py-2 rounded-md border border-slate-300 hover:bg-slate-100"
                                                .to_string()
                                        }
                                    }
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-8">
                    {move || {
                        filtered()
                            .into_iter()
                            .enumerate()
                            .map(|(index, skill)| {
                                view! {
                                    <div
                                        class="rounded-lg bg-white/80 border border-slate-200 backdrop-blur-sm shadow-sm hover:shadow-xl transition-all duration-300 cursor-pointer group animate-fade-in-up"
                                        style=format!("animation-delay: {}ms", index * 50)
                                    >
                                        <div class="p-6 text-center">
                                            <h3 class="font-semibold group-hover:text-blue-600 transition-colors mb-2 text-lg">
                                                {skill.name}
                                            </h3>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
