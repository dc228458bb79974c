use leptos::prelude::*;

use crate::controls::ScrollMetrics;

pub fn read_metrics() -> Option<ScrollMetrics> {
    let window = window();
    let scroll_top = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = document().document_element()?.scroll_height() as f64;
    Some(ScrollMetrics::new(
        scroll_top,
        document_height,
        viewport_height,
    ))
}

/// Smooth scrolling comes from the `scroll-smooth` class on the root element.
pub fn scroll_to_section(anchor: &str) {
    if let Some(el) = document().get_element_by_id(anchor) {
        el.scroll_into_view();
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
pub fn ScrollProgressBar(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="fixed top-0 left-0 w-full h-1 bg-slate-200/50 z-50">
            <div
                class="h-full bg-gradient-to-r from-blue-600 to-purple-600 transition-all duration-300"
                style:width=move || format!("{}%", progress.get())
            ></div>
        </div>
    }
}

#[component]
pub fn ScrollTopButton(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| scroll_to_top()
                aria-label="Scroll to top"
                class="fixed bottom-8 right-8 w-12 h-12 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white text-xl shadow-lg hover:shadow-xl transition-all duration-300 z-40"
            >
                "↑"
            </button>
        </Show>
    }
}
