use leptos::prelude::*;

use super::hero::SocialLinks;
use crate::content::{copyright_year, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-slate-200/50">
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-slate-600">
                        {format!("© {} {}. All rights reserved.", copyright_year(), PROFILE.name)}
                    </p>
                    <SocialLinks size="text-xl" />
                </div>
            </div>
        </footer>
    }
}
