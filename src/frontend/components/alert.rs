use leptos::prelude::*;

use crate::services::{ModalContent, ModalKind};

/// Body of the contact result dialog.
#[component]
pub fn Alert(content: ModalContent, on_close: Callback<()>) -> impl IntoView {
    let (icon, badge) = match content.kind {
        ModalKind::Success => ("fas fa-check", "bg-emerald-500/15 text-emerald-500"),
        ModalKind::Error => ("fas fa-exclamation-triangle", "bg-red-500/15 text-red-500"),
    };

    view! {
        <div class="text-center">
            <div class=format!("w-16 h-16 mx-auto mb-4 rounded-full flex items-center justify-center text-2xl {}", badge)>
                <i class=icon></i>
            </div>
            <h3 class="text-2xl font-bold mb-3 text-gray-900 dark:text-white">{content.title}</h3>
            <p class="text-gray-600 dark:text-gray-300 mb-4">{content.message}</p>
            {content.fallback_email.map(|email| view! {
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                    "You can also email me directly at "
                    <a href=format!("mailto:{}", email) class="text-blue-500 hover:underline">{email}</a>
                </p>
            })}
            <button
                type="button"
                class="px-6 py-2 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-700 hover:to-purple-700 transition-all"
                on:click=move |_| on_close.run(())
            >
                "Close"
            </button>
        </div>
    }
}
