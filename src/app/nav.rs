use leptos::prelude::*;

use super::scroll::scroll_to_section;
use crate::content::{PROFILE, SECTIONS};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full backdrop-blur-md border-b border-slate-200/50 z-40 bg-white/80 transition-all duration-300">
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href="#"
                        class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent"
                    >
                        {PROFILE.name}
                    </a>
                    <div class="hidden md:flex space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|section| {
                                let anchor = section.anchor;
                                view! {
                                    <button
                                        on:click=move |_| scroll_to_section(anchor)
                                        class="text-slate-600 hover:text-blue-600 transition-colors capitalize"
                                    >
                                        {section.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span class="text-yellow-500">"✨"</span>
                </div>
            </div>
        </nav>
    }
}
