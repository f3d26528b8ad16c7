use std::fmt::Display;
use std::str::FromStr;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::models::CategoryFilter;

pub const FILTER_PARAM: &str = "filter";

/// Current `?filter=` selection for a listing page.
pub fn use_category_filter<C>() -> Memo<CategoryFilter<C>>
where
    C: Copy + PartialEq + FromStr + Send + Sync + 'static,
{
    let query = use_query_map();
    Memo::new(move |_| {
        query.with(|params| CategoryFilter::parse(&params.get(FILTER_PARAM).unwrap_or_default()))
    })
}

/// Link target that selects `filter` on `base`.
pub fn filter_href<C>(base: &str, filter: &CategoryFilter<C>) -> String
where
    C: Copy + PartialEq + FromStr + Display,
{
    if filter.is_all() {
        base.to_string()
    } else {
        format!("{}?{}={}", base, FILTER_PARAM, filter.key())
    }
}

#[derive(Clone, Copy)]
pub struct FilterOption<C: 'static> {
    pub filter: C,
    pub label: &'static str,
    pub icon: &'static str,
}

/// "All" plus one button per category. Selecting one rewrites the query.
#[component]
pub fn FilterBar<C>(
    base: &'static str,
    options: Vec<FilterOption<C>>,
    selected: Memo<CategoryFilter<C>>,
) -> impl IntoView
where
    C: Copy + PartialEq + FromStr + Display + Send + Sync + 'static,
{
    let navigate = use_navigate();
    let select = move |filter: CategoryFilter<C>| {
        navigate(&filter_href(base, &filter), NavigateOptions {
            scroll: false,
            ..Default::default()
        });
    };

    let button = move |filter: CategoryFilter<C>, label: &'static str, icon: &'static str| {
        let select = select.clone();
        let target = filter.clone();
        view! {
            <button
                type="button"
                class=move || {
                    let state = if selected.with(|current| *current == target) {
                        "bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg"
                    } else {
                        "bg-gray-200/60 dark:bg-white/10 text-gray-700 dark:text-gray-300 hover:bg-blue-500/20"
                    };
                    format!("px-5 py-2 rounded-full text-sm font-medium flex items-center gap-2 transition-all duration-300 {}", state)
                }
                on:click=move |_| select(filter.clone())
            >
                <i class=icon></i>
                {label}
            </button>
        }
    };

    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-10">
            {button(CategoryFilter::All, "All", "fas fa-th-large")}
            {options
                .into_iter()
                .map(|option| button(CategoryFilter::Only(option.filter), option.label, option.icon))
                .collect_view()}
        </div>
    }
}

/// Shown when a filter matches nothing.
#[component]
pub fn NoResults(base: &'static str, #[prop(into)] noun: String) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="text-5xl mb-4 text-gray-400"><i class="fas fa-search"></i></div>
            <h3 class="text-xl font-semibold mb-2">{format!("No {} found", noun)}</h3>
            <p class="text-gray-600 dark:text-gray-400 mb-6">"Nothing matches this filter yet."</p>
            <a href=base class="px-6 py-2 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 text-white">
                {format!("Show all {}", noun)}
            </a>
        </div>
    }
}
