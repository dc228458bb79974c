use leptos::{ev::SubmitEvent, prelude::*};

use super::SectionHeading;
use crate::content::PROFILE;
use crate::controls::{ContactDraft, ContactField};

const INFO_CARD: &str = "rounded-lg bg-white/80 border border-slate-200 backdrop-blur-sm shadow-sm hover:shadow-2xl transition-all duration-500 p-6 text-center";
const INFO_LINK: &str = "text-blue-600 hover:underline text-sm break-all";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4 bg-slate-50/50">
            <div class="container mx-auto">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind or want to collaborate? Feel free to reach out!"
                />
                <div class="max-w-2xl mx-auto space-y-12">
                    <div class="grid md:grid-cols-3 gap-8">
                        <div class=INFO_CARD>
                            <InfoIcon gradient="from-red-500 to-pink-500" glyph="✉" />
                            <h3 class="font-semibold mb-2">"Email"</h3>
                            <a href=format!("mailto:{}", PROFILE.email) class=INFO_LINK>
                                {PROFILE.email}
                            </a>
                        </div>
                        <div class=INFO_CARD>
                            <InfoIcon gradient="from-blue-500 to-cyan-500" glyph="in" />
                            <h3 class="font-semibold mb-1">"LinkedIn"</h3>
                            <a
                                href=PROFILE.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class=INFO_LINK
                            >
                                "Connect with me"
                            </a>
                        </div>
                        <div class=INFO_CARD>
                            <InfoIcon gradient="from-slate-700 to-slate-900" glyph="</>" />
                            <h3 class="font-semibold mb-1">"GitHub"</h3>
                            <a
                                href=PROFILE.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class=INFO_LINK
                            >
                                "View my repositories"
                            </a>
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoIcon(gradient: &'static str, glyph: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "w-12 h-12 bg-gradient-to-br {gradient} rounded-full flex items-center justify-center mx-auto mb-3 text-white font-bold",
        )>{glyph}</div>
    }
}

/// Hands the draft to the visitor's mail client as a `mailto:` link.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = draft.try_update(|d| d.submit(PROFILE.email)) else {
            return;
        };
        log::debug!("opening mail client for {}", request.recipient);
        if let Err(e) = window().location().set_href(&request.uri()) {
            log::warn!("couldn't open mail client: {e:?}");
        }
    };

    view! {
        <form
            on:submit=on_submit
            class="rounded-lg bg-white/80 border border-slate-200 backdrop-blur-sm shadow-sm p-6 space-y-4"
        >
            <div class="grid md:grid-cols-2 gap-4">
                <DraftInput draft field=ContactField::Name label="Name" kind="text" />
                <DraftInput draft field=ContactField::Email label="Email" kind="email" />
            </div>
            <DraftInput draft field=ContactField::Subject label="Subject" kind="text" />
            <label class="block text-sm font-medium text-slate-700">
                "Message"
                <textarea
                    rows="5"
                    prop:value=move || draft.with(|d| d.get(ContactField::Message).to_string())
                    on:input=move |ev| {
                        draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                    }
                    class="mt-1 w-full px-4 py-2 rounded-md border border-slate-300 bg-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                ></textarea>
            </label>
            <button
                type="submit"
                class="w-full rounded-md px-4 py-2 text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 shadow-lg transition-all duration-300"
            >
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn DraftInput(
    draft: RwSignal<ContactDraft>,
    field: ContactField,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-slate-700">
            {label}
            <input
                type=kind
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                class="mt-1 w-full px-4 py-2 rounded-md border border-slate-300 bg-white focus:outline-none focus:ring-2 focus:ring-blue-500"
            />
        </label>
    }
}
