use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold mb-2">"Page Not Found"</p>
                <p class="text-gray-600 dark:text-gray-400 mb-8 max-w-md">
                    "The page you are looking for doesn't exist or has been moved."
                </p>
                <a href="/" class="px-6 py-3 rounded-xl bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium shadow-lg">
                    <i class="fas fa-home mr-2"></i>
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
