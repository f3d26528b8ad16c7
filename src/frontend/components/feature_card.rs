use leptos::prelude::*;

/// Icon, heading and a short body; used for contact details and FAQ entries.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    #[prop(optional, into)] href: Option<&'static str>,
) -> impl IntoView {
    let body = match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="text-blue-500 hover:underline break-all">
                {desc}
            </a>
        }
        .into_any(),
        None => view! { <p class="text-gray-600 dark:text-gray-400 text-sm leading-relaxed">{desc}</p> }.into_any(),
    };

    view! {
        <div class="scroll-hidden group p-6 rounded-xl bg-white dark:bg-gray-800/50 border border-gray-200 dark:border-gray-700
                    hover:border-blue-500/50 shadow-md hover:shadow-xl
                    transition-all duration-300 hover:-translate-y-1">
            <div class="w-12 h-12 mb-4 rounded-lg bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-white text-xl group-hover:scale-110 transition-transform duration-300">
                <i class=icon></i>
            </div>
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">{title}</h3>
            {body}
        </div>
    }
}
