use leptos::prelude::*;

use crate::data::PROJECTS;
use crate::frontend::components::{use_category_filter, FilterBar, FilterOption, NoResults, ProjectCard};
use crate::frontend::hooks::use_scroll_reveal;
use crate::models::ProjectCategory;
use crate::services::reveal::{RevealClasses, RevealOptions};

const BASE: &str = "/projects";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let selected = use_category_filter::<ProjectCategory>();
    let options = ProjectCategory::ALL
        .iter()
        .map(|category| FilterOption {
            filter: *category,
            label: category.label(),
            icon: category.icon(),
        })
        .collect::<Vec<_>>();

    let visible = Memo::new(move |_| selected.with(|filter| filter.apply(PROJECTS)));

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
                    "My Projects"
                </h1>
                <p class="text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                    "A collection of things I have built while learning web development."
                </p>
            </div>

            <FilterBar base=BASE options=options selected=selected/>

            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! { <NoResults base=BASE noun="projects"/> }.into_any()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 gap-8">
                            {items.into_iter().map(|project| view! {
                                <ProjectCard project=project/>
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
