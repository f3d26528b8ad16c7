use chrono::Datelike;
use leptos::prelude::*;

use crate::data::profile::{OWNER_NAME, PROFILE_IMAGE, SITE_TITLE};
use crate::frontend::hooks::scroll_window;
use crate::services::shell::{ShellState, NAV_ITEMS};

const FOOTER_TECH: [&str; 4] = ["Rust", "Leptos", "Tailwind CSS", "WebAssembly"];

pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer(shell: RwSignal<ShellState>) -> impl IntoView {
    let heading = "text-sm font-semibold uppercase tracking-wider mb-4 text-gray-800 dark:text-white";

    view! {
        <footer class="relative border-t border-blue-500/10 bg-gray-100/95 dark:bg-gray-900/95 backdrop-blur-lg">
            <div class="container mx-auto px-6 py-12">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-10">
                    <div class="col-span-2 md:col-span-1 flex flex-col items-center md:items-start">
                        <a href="/" class="flex items-center group mb-4">
                            <img src=PROFILE_IMAGE alt=OWNER_NAME class="w-10 h-10 rounded-md object-cover shadow-lg"/>
                            <span class="ml-3 text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                                {SITE_TITLE}
                            </span>
                        </a>
                        <p class="text-sm text-gray-600 dark:text-gray-400 max-w-xs text-center md:text-left">
                            "A showcase of my web development projects and skills."
                        </p>
                    </div>

                    <div class="flex flex-col items-center sm:items-start">
                        <h3 class=heading>"Navigation"</h3>
                        {NAV_ITEMS.iter().map(|item| view! {
                            <a href=item.path class="text-sm text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors">
                                {item.label}
                            </a>
                        }).collect_view()}
                    </div>

                    <div class="flex flex-col items-center sm:items-start">
                        <h3 class=heading>"Technologies"</h3>
                        {FOOTER_TECH.iter().map(|tech| view! {
                            <span class="text-sm text-gray-600 dark:text-gray-400">{*tech}</span>
                        }).collect_view()}
                    </div>

                    <div class="col-span-2 md:col-span-1 flex flex-col items-center sm:items-start">
                        <h3 class=heading>"Contact"</h3>
                        <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">"Looking for a developer? Let's connect!"</p>
                        <a href="/contact" class="px-5 py-2 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 text-white text-sm font-medium hover:shadow-lg transition-all">
                            "Get in Touch"
                        </a>
                    </div>
                </div>

                <div class="pt-6 border-t border-gray-300/20 dark:border-white/5 flex flex-col items-center">
                    <button
                        type="button"
                        class="px-5 py-2 mb-6 rounded-full bg-gray-800/5 dark:bg-white/5 text-sm text-gray-600 dark:text-gray-300 hover:bg-blue-500/20 flex items-center transition-all duration-300 hover:-translate-y-1"
                        on:click=move |_| scroll_window(shell.with_untracked(ShellState::back_to_top))
                    >
                        <span>"Back to top"</span>
                        <i class="fas fa-arrow-up text-xs ml-2"></i>
                    </button>
                    <p class="text-sm text-gray-500 text-center">
                        {format!("© {} {}. All rights reserved.", copyright_year(), OWNER_NAME)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
