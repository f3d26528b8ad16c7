use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-700 hover:to-purple-700 hover:shadow-xl focus:ring-blue-500",
            Self::Ghost => "bg-gray-200/50 dark:bg-white/10 text-gray-800 dark:text-gray-100 border border-gray-300/20 dark:border-white/10 hover:bg-gray-300/70 dark:hover:bg-white/20 focus:ring-gray-400",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center px-6 py-3 font-medium rounded-xl shadow-lg transition-all duration-300 transform hover:-translate-y-1 focus:outline-none focus:ring-2";

/// Link styled as a button.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    let classes = format!("{} {}", BASE_CLASSES, variant.classes());

    if external {
        view! {
            <a href=href class=classes target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! { <a href=href class=classes>{children()}</a> }.into_any()
    }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, default = false.into())] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        BASE_CLASSES,
        variant.classes()
    );

    let loading_text = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    let idle = children();

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <span class="flex items-center justify-center gap-2" class:hidden=move || !loading.get()>
                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </span>
            <span class="flex items-center justify-center gap-2" class:hidden=move || loading.get()>
                {idle}
            </span>
        </button>
    }
}
