use std::time::Duration;

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::controls::{Typewriter, TYPEWRITER_DELAY};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="pt-32 pb-20 px-4 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-blue-600/5 to-purple-600/5 rounded-full blur-3xl transform -translate-y-1/2"></div>
            <div class="container mx-auto relative">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="flex items-center justify-center gap-2 mb-6">
                        <span class="text-red-500 animate-pulse">"♥"</span>
                        <span class="text-slate-600 text-sm">
                            "Passionate about creating amazing experiences"
                        </span>
                    </div>
                    <h1 class="text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-slate-900 to-slate-600 bg-clip-text text-transparent">
                        {format!("Hi, I'm {}.", PROFILE.first_name)}
                    </h1>
                    <h2 class="text-3xl md:text-4xl font-bold mb-8 bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent min-h-[3rem] flex items-center justify-center">
                        <TypedText text=PROFILE.tagline.to_string() delay=TYPEWRITER_DELAY />
                        <span class="animate-pulse ml-1">"|"</span>
                    </h2>
                    <p class="text-xl text-slate-600 mb-8 max-w-3xl mx-auto leading-relaxed">
                        {PROFILE.intro}
                    </p>
                    <div class="flex gap-4 mb-8 justify-center">
                        <a
                            href=PROFILE.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-3 rounded-md bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white shadow-lg hover:shadow-xl transition-all duration-300"
                        >
                            "View My Work →"
                        </a>
                        <a
                            href=PROFILE.resume_path
                            download=PROFILE.resume_file
                            on:click=|_| log::debug!("resume download requested")
                            class="px-6 py-3 rounded-md border border-slate-300 hover:bg-slate-100 shadow-lg hover:shadow-xl transition-all duration-300"
                        >
                            "⬇ Resume"
                        </a>
                    </div>
                    <SocialLinks size="text-2xl" />
                </div>
            </div>
        </section>
    }
}

/// GitHub, LinkedIn and mail icons, shared by the hero and the footer.
#[component]
pub fn SocialLinks(size: &'static str) -> impl IntoView {
    let class = format!(
        "text-slate-600 hover:text-blue-600 transition-all duration-300 hover:scale-110 {size}"
    );
    view! {
        <div class="flex gap-6 justify-center">
            <a
                href=PROFILE.github
                target="_blank"
                rel="noopener noreferrer"
                class=class.clone()
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain"></i>
            </a>
            <a
                href=PROFILE.linkedin
                target="_blank"
                rel="noopener noreferrer"
                class=class.clone()
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a href=format!("mailto:{}", PROFILE.email) class=class aria-label="Email">
                "✉"
            </a>
        </div>
    }
}

/// Types `text` out one character per `delay`, restarting when `text` changes.
#[component]
fn TypedText(#[prop(into)] text: Signal<String>, delay: Duration) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(text.get_untracked(), delay));

    Effect::watch(
        move || text.get(),
        move |text, _, _| typewriter.update(|t| t.retarget(text, delay)),
        false,
    );

    // one pending tick at a time; the cleanup drops it on rerun or unmount
    Effect::new(move |_| {
        if typewriter.with(Typewriter::is_done) {
            return;
        }
        let tick = move || {
            typewriter.update(|t| {
                t.tick();
            })
        };
        match set_timeout_with_handle(tick, typewriter.with_untracked(Typewriter::delay)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't schedule typewriter tick: {e:?}"),
        }
    });

    view! { <span>{move || typewriter.with(|t| t.visible().to_string())}</span> }
}
