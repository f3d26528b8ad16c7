use std::time::Duration;

use leptos::prelude::*;

pub const SPLASH_DURATION: Duration = Duration::from_millis(1500);

/// Loading screen laid over the page until shortly after hydration.
#[component]
pub fn Splash() -> impl IntoView {
    let visible = RwSignal::new(true);

    Effect::new(move |_| {
        match set_timeout_with_handle(move || { visible.try_set(false); }, SPLASH_DURATION) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("Splash timer failed: {:?}", e);
                visible.set(false);
            }
        }
    });

    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 z-[200] flex items-center justify-center bg-white dark:bg-gray-900">
                <div class="text-center">
                    <div class="w-24 h-24 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 mx-auto mb-6 flex items-center justify-center text-white text-3xl font-bold animate-pulse">
                        "I"
                    </div>
                    <div class="relative h-1.5 w-48 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                        <div class="absolute top-0 left-0 h-full w-full bg-gradient-to-r from-blue-500 to-purple-600 animate-pulse"></div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
