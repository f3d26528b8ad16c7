use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{Footer, Nav};
use crate::frontend::hooks::scroll_window;
use crate::services::shell::{ShellState, SCROLL_DEBOUNCE};

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Header, routed content and footer. Owns the menu and "scrolled" flags.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let shell = RwSignal::new(ShellState::default());
    let location = use_location();

    // Every navigation closes the menu and jumps to the top.
    Effect::new(move |_| {
        location.pathname.track();
        if let Some(request) = shell.try_update(ShellState::on_route_change) {
            scroll_window(request);
        }
    });

    Effect::new(move |_| {
        let pending = StoredValue::new(None::<TimeoutHandle>);

        let sample = move || {
            let y = scroll_y();
            shell.try_update(|s| s.on_scroll(y));
        };
        let schedule = move || {
            if let Some(handle) = pending.try_get_value().flatten() {
                handle.clear();
            }
            match set_timeout_with_handle(sample, SCROLL_DEBOUNCE) {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(e) => log::warn!("Failed to schedule scroll sample: {:?}", e),
            }
        };

        schedule();
        let listener = window_event_listener(ev::scroll, move |_| schedule());
        on_cleanup(move || {
            listener.remove();
            if let Some(handle) = pending.try_get_value().flatten() {
                handle.clear();
            }
        });
    });

    view! {
        <div class="min-h-screen font-sans bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 flex flex-col">
            <Nav shell=shell/>
            <main class="container mx-auto px-4 py-8 pb-0 relative overflow-hidden flex-grow">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-blue-500/10 dark:bg-blue-500/20 rounded-full filter blur-3xl animate-pulse-slow pointer-events-none"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-purple-500/10 dark:bg-purple-500/20 rounded-full filter blur-3xl animate-pulse-slow animation-delay-2000 pointer-events-none"></div>
                <div class="relative z-10 animate-fadeInUp">{children()}</div>
            </main>
            <Footer shell=shell/>
        </div>
    }
}
