use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{ACTIVITIES, EDUCATION, EXPERIENCES};

const CARD: &str = "rounded-lg bg-white/80 border border-slate-200 backdrop-blur-sm shadow-sm hover:shadow-2xl transition-all duration-500 animate-fade-in-up";

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4 bg-slate-50/50">
            <div class="container mx-auto">
                <SectionHeading
                    title="Experience"
                    subtitle="My professional experience and internships"
                />
                <div class="max-w-4xl mx-auto space-y-6">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            view! {
                                <div class=CARD style=format!("animation-delay: {}ms", index * 200)>
                                    <div class="p-8 flex items-start gap-4">
                                        <div class="w-12 h-12 bg-gradient-to-br from-blue-600 to-purple-600 rounded-full flex items-center justify-center flex-shrink-0 text-white">
                                            "💼"
                                        </div>
                                        <div class="flex-1">
                                            <div class="flex items-start justify-between mb-2">
                                                <h3 class="text-xl font-bold">{exp.title}</h3>
                                                <span class="rounded-full px-2.5 py-0.5 text-xs bg-emerald-100 text-emerald-800">
                                                    {exp.kind}
                                                </span>
                                            </div>
                                            <div class="flex items-center gap-2 mb-2">
                                                <p class="text-blue-600 font-medium">{exp.company}</p>
                                                {exp
                                                    .website
                                                    .map(|site| {
                                                        view! {
                                                            <a
                                                                href=site
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                                class="text-slate-400 hover:text-blue-600 transition-colors"
                                                            >
                                                                "↗"
                                                            </a>
                                                        }
                                                    })}
                                            </div>
                                            <p class="text-slate-600 text-sm mb-4">"📅 " {exp.period}</p>
                                            <p class="text-slate-600">{exp.description}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ActivitiesSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-slate-50/50">
            <div class="container mx-auto">
                <SectionHeading
                    title="Leadership & Activities"
                    subtitle="My involvement in various organizations and leadership roles"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {ACTIVITIES
                        .iter()
                        .enumerate()
                        .map(|(index, activity)| {
                            view! {
                                <div class=CARD style=format!("animation-delay: {}ms", index * 150)>
                                    <div class="p-6 flex items-start gap-4">
                                        <div class="w-12 h-12 bg-gradient-to-br from-yellow-500 to-orange-500 rounded-full flex items-center justify-center flex-shrink-0 text-white">
                                            "★"
                                        </div>
                                        <div>
                                            <h3 class="text-lg font-bold mb-2">{activity.title}</h3>
                                            <p class="text-blue-600 mb-2 font-medium">
                                                {activity.organization}
                                            </p>
                                            <p class="text-slate-600 text-sm mb-3">
                                                "📅 " {activity.period}
                                            </p>
                                            <p class="text-slate-600 text-sm">{activity.description}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeading
                    title="Education"
                    subtitle="My academic background and qualifications"
                />
                <div class="max-w-4xl mx-auto space-y-6">
                    {EDUCATION
                        .iter()
                        .map(|edu| {
                            let (gradient, score_color) = edu.accent;
                            view! {
                                <div class=CARD>
                                    <div class="p-8 flex items-start gap-4">
                                        <div class=format!(
                                            "w-12 h-12 bg-gradient-to-br {gradient} rounded-full flex items-center justify-center flex-shrink-0 text-white",
                                        )>"🎓"</div>
                                        <div class="flex-1">
                                            <h3 class="text-xl font-bold mb-2">{edu.qualification}</h3>
                                            <p class="text-slate-600">{edu.institution}</p>
                                            <div class="flex items-center gap-4 text-sm mt-2">
                                                <span class="text-slate-600">{edu.period}</span>
                                                <span>"•"</span>
                                                <span class=format!(
                                                    "{score_color} font-semibold",
                                                )>{edu.score}</span>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
