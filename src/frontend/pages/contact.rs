use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ServerRelay;
use crate::data::profile::{
    CONTACT_EMAIL, CONTACT_MAILTO, FAQS, GITHUB_HANDLE, GITHUB_URL, LINKEDIN_URL, LOCATION, OWNER_NAME,
};
use crate::frontend::components::{Alert, Button, FeatureCard, Modal, TextArea, TextInput};
use crate::frontend::hooks::use_scroll_reveal;
use crate::models::FormField;
use crate::services::contact::SENDING_MESSAGE;
use crate::services::reveal::{RevealClasses, RevealOptions};
use crate::services::{ContactFlow, Notifier};

#[component]
pub fn ContactPage() -> impl IntoView {
    use_scroll_reveal(Signal::stored(RevealClasses::default()), RevealOptions::default());

    let flow = RwSignal::new(ContactFlow::new());
    let sending = Signal::derive(move || flow.with(ContactFlow::is_sending));
    let modal = Memo::new(move |_| flow.with(|f| f.status().modal()));

    let value = move |field: FormField| Signal::derive(move || flow.with(|f| f.form().get(field).to_string()));
    let edit = move |field: FormField| Callback::new(move |input: String| flow.update(|f| f.edit(field, input)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Validation failures and duplicate submits are already reflected in
        // the flow state; only a started send needs the relay.
        let Some(Ok(notification)) = flow.try_update(ContactFlow::begin_submit) else {
            return;
        };

        spawn_local(async move {
            let outcome = ServerRelay.send(&notification).await;
            // The page may have been left while the request was out.
            if flow.try_update(|f| f.finish(outcome)).is_none() {
                log::debug!("Contact page gone before the relay answered");
            }
        });
    };

    let close = Callback::new(move |_: ()| flow.update(ContactFlow::dismiss));

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <h1 class="text-4xl md:text-5xl font-bold text-center mb-12 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                "Contact Me"
            </h1>

            <div class="grid lg:grid-cols-2 gap-10 mb-20">
                <section class="scroll-hidden">
                    <h2 class="text-2xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="text-gray-600 dark:text-gray-400 mb-8">
                        "I'm currently looking for new opportunities to apply my skills and learn from experienced professionals. \
                         Feel free to reach out if you have any questions or just want to say hello!"
                    </p>
                    <div class="grid sm:grid-cols-2 gap-4">
                        <FeatureCard icon="fas fa-envelope" title="Email" desc=CONTACT_EMAIL href=CONTACT_MAILTO/>
                        <FeatureCard icon="fab fa-linkedin-in" title="LinkedIn" desc=OWNER_NAME href=LINKEDIN_URL/>
                        <FeatureCard icon="fab fa-github" title="GitHub" desc=GITHUB_HANDLE href=GITHUB_URL/>
                        <FeatureCard icon="fas fa-map-marker-alt" title="Location" desc=LOCATION/>
                    </div>
                </section>

                <section class="scroll-hidden p-8 rounded-2xl bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700 shadow-lg">
                    <h2 class="text-2xl font-bold mb-2">"Send a Message"</h2>
                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-6">
                        "Your message will be sent directly to: "
                        <span class="font-medium text-blue-600 dark:text-blue-400">{CONTACT_EMAIL}</span>
                    </p>

                    <form class="space-y-5" on:submit=on_submit novalidate=true>
                        <TextInput
                            label="Name"
                            name="name"
                            placeholder="Your name"
                            input_type="text"
                            required=true
                            value=value(FormField::Name)
                            on_input=edit(FormField::Name)
                        />
                        <TextInput
                            label="Email (optional - so I can reply to you)"
                            name="email"
                            placeholder="your.email@example.com"
                            input_type="email"
                            value=value(FormField::Email)
                            on_input=edit(FormField::Email)
                        />
                        <TextInput
                            label="Subject"
                            name="subject"
                            placeholder="What's this about?"
                            input_type="text"
                            value=value(FormField::Subject)
                            on_input=edit(FormField::Subject)
                        />
                        <TextArea
                            label="Message"
                            name="message"
                            placeholder="Your message here..."
                            required=true
                            value=value(FormField::Message)
                            on_input=edit(FormField::Message)
                        />

                        <Show when=move || sending.get()>
                            <p class="text-sm text-blue-600 dark:text-blue-400">{SENDING_MESSAGE}</p>
                        </Show>

                        <Button loading=sending loading_text="Sending...">
                            <i class="fas fa-paper-plane"></i>
                            "Send Message"
                        </Button>
                    </form>
                </section>
            </div>

            <section class="mb-20">
                <h2 class="text-3xl font-bold text-center mb-10 scroll-hidden">"Frequently Asked Questions"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {FAQS.iter().map(|faq| view! {
                        <FeatureCard icon="fas fa-question" title=faq.question desc=faq.answer/>
                    }).collect_view()}
                </div>
            </section>

            <Modal open=Signal::derive(move || modal.with(Option::is_some)) on_close=close>
                {move || modal.get().map(|content| view! { <Alert content=content on_close=close/> })}
            </Modal>
        </div>
    }
}
