use leptos::prelude::*;

use super::SectionHeading;
use crate::content::ACHIEVEMENTS;

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <section id="achievements" class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeading
                    title="Achievements & Certifications"
                    subtitle="Recognition and certifications earned throughout my journey"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(index, achievement)| {
                            view! {
                                <div
                                    class="rounded-lg bg-white/80 border border-slate-200 backdrop-blur-sm shadow-sm hover:shadow-2xl transition-all duration-500 animate-fade-in-up p-6"
                                    style=format!("animation-delay: {}ms", index * 100)
                                >
                                    <div class="flex items-center gap-3 mb-3">
                                        <span class="text-2xl">{achievement.icon}</span>
                                        <span class=format!(
                                            "rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
                                            achievement.kind.badge_class(),
                                        )>{achievement.kind.label()}</span>
                                    </div>
                                    <h3 class="text-lg font-semibold mb-2">{achievement.title}</h3>
                                    <div class="text-slate-600 text-sm mb-2">
                                        "🏅 " {achievement.organization} " • " {achievement.date}
                                    </div>
                                    <p class="text-slate-600 text-sm">{achievement.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
