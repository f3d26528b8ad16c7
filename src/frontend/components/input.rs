use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-gray-50 dark:bg-gray-800 \
    border border-gray-300 dark:border-gray-700 text-gray-900 dark:text-white \
    placeholder-gray-400 dark:placeholder-gray-500 \
    focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all";

#[component]
fn FieldLabel(#[prop(into)] name: String, #[prop(into)] label: String, required: bool) -> impl IntoView {
    view! {
        <label for=name class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-1">"*"</span> })}
        </label>
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel name=name.clone() label=label required=required/>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASSES
            />
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(default = 5)] rows: u32,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel name=name.clone() label=label required=required/>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=format!("{} resize-none", FIELD_CLASSES)
            ></textarea>
        </div>
    }
}
