use leptos::{ev, prelude::*};

use super::SectionHeading;
use crate::content::{Project, PROJECTS};
use crate::controls::TechPreview;

const ICON_LINK: &str = "text-slate-600 hover:text-blue-600 transition-all duration-300 hover:scale-110";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of my recent work showcasing various technologies"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let open = RwSignal::new(false);
    let preview = TechPreview::of(project.technologies);

    view! {
        <div
            class="rounded-lg bg-white/80 border border-slate-200 backdrop-blur-sm shadow-sm hover:shadow-2xl transition-all duration-500 group animate-fade-in-up"
            style=format!("animation-delay: {}ms", index * 100)
        >
            <div class="p-6 flex items-start justify-between">
                <div>
                    <h3 class="text-xl font-semibold mb-2 group-hover:text-blue-600 transition-colors">
                        {project.title}
                    </h3>
                    <span class="inline-block rounded-full border border-slate-300 px-2 py-0.5 text-xs mb-3">
                        {project.role}
                    </span>
                </div>
                <div class="flex gap-2 text-xl">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class=ICON_LINK
                        aria-label="Source code"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    {project
                        .live_demo()
                        .map(|live| {
                            view! {
                                <a
                                    href=live
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=ICON_LINK
                                    aria-label="Live demo"
                                >
                                    "↗"
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class="px-6 pb-6">
                <p class="text-slate-600 mb-4 text-sm line-clamp-3">{project.description}</p>
                <div class="flex flex-wrap gap-1 mb-4">
                    {preview
                        .shown
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-full bg-slate-100 px-2 py-0.5 text-xs">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {preview
                        .overflow_label()
                        .map(|label| {
                            view! {
                                <span class="rounded-full bg-slate-100 px-2 py-0.5 text-xs">
                                    {label}
                                </span>
                            }
                        })}
                </div>
                <button
                    on:click=move |_| open.set(true)
                    class="w-full rounded-md border border-slate-300 py-1.5 text-sm hover:bg-slate-100"
                >
                    "View Details ›"
                </button>
            </div>
        </div>
        // sibling of the card: its backdrop-filter would contain a fixed child
        <Show when=move || open.get()>
            <ProjectDetails project open />
        </Show>
    }
}

/// Modal overlay for one project. Closed by the button, the backdrop, or Escape.
#[component]
fn ProjectDetails(project: Project, open: RwSignal<bool>) -> impl IntoView {
    let close = move || open.set(false);

    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
            on:click=move |_| close()
        >
            <div
                role="dialog"
                aria-modal="true"
                class="relative w-full max-w-4xl max-h-[80vh] overflow-y-auto rounded-lg bg-white border border-slate-200 p-6 shadow-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    on:click=move |_| close()
                    aria-label="Close"
                    class="absolute top-4 right-4 text-slate-400 hover:text-slate-700"
                >
                    "✕"
                </button>
                <h2 class="text-2xl font-semibold mb-4">{project.title}</h2>
                <div class="space-y-6">
                    <div>
                        <h4 class="font-semibold mb-2">"Overview"</h4>
                        <p class="text-slate-600">{project.full_description}</p>
                    </div>
                    <div class="grid md:grid-cols-2 gap-6">
                        <DetailList title="Key Features" bullet="text-emerald-500" items=project.features />
                        <DetailList
                            title="Challenges Overcome"
                            bullet="text-orange-500"
                            items=project.challenges
                        />
                    </div>
                    <div>
                        <h4 class="font-semibold mb-2">"Technologies Used"</h4>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-full border border-slate-300 px-2.5 py-0.5 text-xs">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex gap-4 pt-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="rounded-md px-4 py-2 text-white bg-gradient-to-r from-blue-600 to-purple-600"
                        >
                            <i class="devicon-github-plain mr-2"></i>
                            "View Code"
                        </a>
                        {project
                            .live_demo()
                            .map(|live| {
                                view! {
                                    <a
                                        href=live
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="rounded-md px-4 py-2 border border-slate-300 hover:bg-slate-100"
                                    >
                                        "↗ Live Demo"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailList(
    title: &'static str,
    bullet: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold mb-2">{title}</h4>
            <ul class="space-y-1">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="text-slate-600 text-sm flex items-start gap-2">
                                <span class=format!("{bullet} mt-1")>"•"</span>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
