use leptos::prelude::*;

use crate::data::CERTIFICATES;
use crate::frontend::components::{use_category_filter, CertificateCard, FilterBar, FilterOption, NoResults};
use crate::frontend::hooks::use_scroll_reveal;
use crate::models::CertificateCategory;
use crate::services::reveal::{RevealClasses, RevealOptions};

const BASE: &str = "/certificates";

#[component]
pub fn CertificatesPage() -> impl IntoView {
    let selected = use_category_filter::<CertificateCategory>();
    let options = CertificateCategory::ALL
        .iter()
        .map(|category| FilterOption {
            filter: *category,
            label: category.label(),
            icon: category.icon(),
        })
        .collect::<Vec<_>>();

    let visible = Memo::new(move |_| selected.with(|filter| filter.apply(CERTIFICATES)));

    // Filtering swaps the cards, so the new ones need observing too.
    let reveal_classes = Signal::derive(move || {
        visible.track();
        RevealClasses::default()
    });
    use_scroll_reveal(reveal_classes, RevealOptions::default());

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <div class="text-center mb-10">
                <h1 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                    "Certificates & Seminars"
                </h1>
                <p class="text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                    "Courses I have completed and seminars I have attended."
                </p>
            </div>

            <FilterBar base=BASE options=options selected=selected/>

            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! { <NoResults base=BASE noun="certificates"/> }.into_any()
                } else {
                    view! {
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            {items.into_iter().map(|certificate| view! {
                                <CertificateCard certificate=certificate/>
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
