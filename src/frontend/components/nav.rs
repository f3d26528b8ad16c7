use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::data::profile::{OWNER_NAME, PROFILE_IMAGE, SITE_TITLE};
use crate::frontend::hooks::use_theme;
use crate::services::shell::{is_active, NavItem, ShellState, NAV_ITEMS};

#[component]
fn NavLink(item: &'static NavItem, #[prop(optional)] mobile: bool) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| location.pathname.with(|path| is_active(item.path, path)));

    let layout = if mobile {
        "px-5 py-4 rounded-lg flex items-center bg-white/5 backdrop-blur-sm transition-all duration-300 hover:translate-x-2"
    } else {
        "px-5 py-2 rounded-lg flex items-center font-medium transition-colors duration-300"
    };

    view! {
        <a
            href=item.path
            class=move || {
                let state = if active.get() {
                    "bg-gradient-to-r from-blue-500 to-purple-600 text-white shadow-md"
                } else {
                    "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-white"
                };
                format!("{} {}", layout, state)
            }
            aria-current=move || active.get().then_some("page")
        >
            <i class=format!("{} mr-2", item.icon)></i>
            <span>{item.label}</span>
        </a>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="p-2.5 rounded-lg bg-white/5 hover:bg-blue-500/20 border border-white/5 shadow-sm transition-all duration-300"
            aria-label="Toggle dark mode"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() {
                view! { <i class="fas fa-sun text-yellow-400 animate-spin-slow"></i> }.into_any()
            } else {
                view! { <i class="fas fa-moon text-blue-400"></i> }.into_any()
            }}
        </button>
    }
}

#[component]
pub fn Nav(shell: RwSignal<ShellState>) -> impl IntoView {
    let menu_open = move || shell.with(|s| s.menu_open);

    view! {
        <header class=move || {
            if shell.with(|s| s.scrolled) {
                "sticky top-0 z-50 py-2 transition-all duration-300 bg-white/90 dark:bg-gray-900/90 backdrop-blur-lg shadow-lg border-b border-blue-500/10"
            } else {
                "sticky top-0 z-50 py-2 transition-all duration-300 bg-white/80 dark:bg-gray-900/80"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6 relative">
                <div class="flex justify-between items-center">
                    <a href="/" class="flex items-center group">
                        <div class="w-12 h-12 mr-4 rounded-md overflow-hidden bg-gradient-to-br from-blue-600 to-purple-600 p-[2px] transition-transform duration-300 group-hover:scale-105">
                            <img src=PROFILE_IMAGE alt=OWNER_NAME class="w-full h-full object-cover rounded-[3px]"/>
                        </div>
                        <span class="text-2xl sm:text-3xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            {SITE_TITLE}
                        </span>
                    </a>

                    <nav class="hidden lg:flex items-center gap-3">
                        {NAV_ITEMS.iter().map(|item| view! { <NavLink item=item/> }).collect_view()}
                        <ThemeToggle/>
                    </nav>

                    <div class="flex items-center gap-2 lg:hidden">
                        <ThemeToggle/>
                        <button
                            type="button"
                            class="p-2.5 rounded-lg bg-white/5 hover:bg-blue-500/20 border border-white/5 shadow-lg transition-all duration-300"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| shell.update(ShellState::toggle_menu)
                        >
                            <i class=move || if menu_open() { "fas fa-times" } else { "fas fa-bars" }></i>
                        </button>
                    </div>
                </div>

                <div class=move || {
                    if menu_open() {
                        "lg:hidden overflow-hidden transition-all duration-500 ease-in-out max-h-[400px] opacity-100"
                    } else {
                        "lg:hidden overflow-hidden transition-all duration-500 ease-in-out max-h-0 opacity-0"
                    }
                }>
                    <nav class="py-4 flex flex-col gap-3 border-t border-white/5 mt-4">
                        {NAV_ITEMS.iter().map(|item| view! { <NavLink item=item mobile=true/> }).collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
