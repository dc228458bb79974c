mod achievements;
mod contact;
mod footer;
mod hero;
mod history;
mod nav;
mod projects;
mod scroll;
mod skills;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::PROFILE;
use crate::controls::{LoadingGate, ScrollMetrics};

use achievements::AchievementsSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use history::{ActivitiesSection, EducationSection, ExperienceSection};
use nav::NavBar;
use projects::ProjectsSection;
use scroll::{read_metrics, ScrollProgressBar, ScrollTopButton};
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PROFILE.name />
        <Meta name="description" content=format!("{} - {}", PROFILE.name, PROFILE.tagline) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Holds the loading placeholder up for a fixed delay, then shows the page for good.
#[component]
fn PortfolioPage() -> impl IntoView {
    let gate = RwSignal::new(LoadingGate::default());
    let delay = gate.get_untracked().delay();

    // cleared automatically if the page unmounts before it fires
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| gate.update(|g| g.observe(delay)),
        delay.as_millis() as f64,
    );
    start(());

    view! {
        <Show
            when=move || gate.with(LoadingGate::is_ready)
            fallback=|| view! { <LoadingPlaceholder /> }
        >
            <PortfolioView />
        </Show>
    }
}

#[component]
fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50 flex items-center justify-center">
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-blue-600 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-slate-600">"Loading Portfolio..."</p>
            </div>
        </div>
    }
}

#[component]
fn PortfolioView() -> impl IntoView {
    let (scroll, set_scroll) = signal(ScrollMetrics::default());

    let listener = window_event_listener(ev::scroll, move |_| {
        if let Some(metrics) = read_metrics() {
            set_scroll.set(metrics);
        }
    });
    on_cleanup(move || listener.remove());

    let progress = Signal::derive(move || scroll.with(ScrollMetrics::progress));
    let show_top = Signal::derive(move || scroll.with(ScrollMetrics::show_scroll_top));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-white to-blue-50 text-slate-900 transition-all duration-500">
            <ScrollProgressBar progress />
            <NavBar />
            <HeroSection />
            <SkillsSection />
            <ProjectsSection />
            <ExperienceSection />
            <AchievementsSection />
            <ActivitiesSection />
            <EducationSection />
            <ContactSection />
            <Footer />
            <ScrollTopButton visible=show_top />
        </div>
    }
}

/// Centered heading block shared by every content section.
#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16 animate-fade-in-up">
            <h2 class="text-4xl font-bold mb-4 bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                {title}
            </h2>
            <p class="text-slate-600 text-lg">{subtitle}</p>
        </div>
    }
}
