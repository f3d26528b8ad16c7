use leptos::html;
use leptos::prelude::*;

use crate::data::tech_icon;
use crate::models::{Certificate, ImageSource, Project, ProjectVisual, Skill, SkillGroup};

/// Certificate artwork. Swaps to the stock image once if the primary one
/// fails to load and never retries after that. A failure that happened
/// before hydration is picked up from the element state.
#[component]
pub fn CertificateImage(certificate: &'static Certificate) -> impl IntoView {
    let source = RwSignal::new(ImageSource::for_certificate(certificate));
    let img_ref = NodeRef::<html::Img>::new();

    let log_fallback = move || {
        log::debug!("Using fallback image for {}", certificate.title);
    };

    Effect::new(move |_| {
        let Some(img) = img_ref.get() else {
            return;
        };
        let (complete, width) = (img.complete(), img.natural_width());
        if source.try_update(|s| s.settle(complete, width)) == Some(true) {
            log_fallback();
        }
    });

    view! {
        <img
            node_ref=img_ref
            src=move || source.with(|s| s.current().to_string())
            alt=certificate.title
            loading="lazy"
            class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
            on:error=move |_| {
                if source.try_update(ImageSource::on_error) == Some(true) {
                    log_fallback();
                }
            }
        />
    }
}

#[component]
pub fn CertificateCard(certificate: &'static Certificate) -> impl IntoView {
    let category = certificate.category;

    view! {
        <article class="scroll-hidden group rounded-2xl overflow-hidden bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700 shadow-md hover:shadow-2xl transition-all duration-300 hover:-translate-y-1 flex flex-col">
            <div class="relative h-48 overflow-hidden">
                <CertificateImage certificate=certificate/>
                <span class="absolute top-3 left-3 px-3 py-1 rounded-full text-xs font-medium bg-black/60 text-white backdrop-blur-sm">
                    <i class=format!("{} mr-1", category.icon())></i>
                    {category.label()}
                </span>
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-lg font-bold mb-1 text-gray-900 dark:text-white">{certificate.title}</h3>
                <p class="text-sm text-blue-600 dark:text-blue-400 mb-1">{certificate.issuer}</p>
                <p class="text-xs text-gray-500 mb-3">
                    <i class="far fa-calendar-alt mr-1"></i>
                    {certificate.date}
                </p>
                <p class="text-sm text-gray-600 dark:text-gray-400 flex-grow">{certificate.description}</p>
                {certificate.link().map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="mt-4 text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline">
                        "View Certificate "
                        <i class="fas fa-external-link-alt text-xs"></i>
                    </a>
                })}
            </div>
        </article>
    }
}

#[component]
pub fn TechTag(name: &'static str) -> impl IntoView {
    view! {
        <span class="px-3 py-1 rounded-full text-xs font-medium bg-blue-500/10 text-blue-600 dark:text-blue-300 flex items-center gap-1">
            <i class=tech_icon(name)></i>
            {name}
        </span>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let visual = match &project.visual {
        ProjectVisual::Image { src, emoji } => view! {
            <div class="relative h-56 overflow-hidden">
                <img src=*src alt=project.title class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"/>
                <span class="absolute bottom-3 right-3 text-3xl">{*emoji}</span>
            </div>
        }
        .into_any(),
        ProjectVisual::Emoji(emoji) => view! {
            <div class="h-56 flex items-center justify-center bg-gradient-to-br from-blue-500/20 to-purple-600/20 text-6xl">
                {*emoji}
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="scroll-hidden group rounded-2xl overflow-hidden bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700 shadow-md hover:shadow-2xl transition-all duration-300 flex flex-col">
            {visual}
            <div class="p-6 flex flex-col flex-grow">
                <div class="flex items-center gap-2 mb-2">
                    <span class="px-2 py-0.5 rounded text-xs bg-purple-500/10 text-purple-600 dark:text-purple-300">
                        <i class=format!("{} mr-1", project.category.icon())></i>
                        {project.category.label()}
                    </span>
                    {project.featured.then(|| view! {
                        <span class="px-2 py-0.5 rounded text-xs bg-yellow-500/10 text-yellow-600 dark:text-yellow-400">"Featured"</span>
                    })}
                </div>
                <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">{project.title}</h3>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-4 flex-grow">{project.summary()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project.technologies.iter().map(|tech| view! { <TechTag name=*tech/> }).collect_view()}
                </div>
                {project.demo_url.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="inline-flex items-center text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline">
                        "Live Demo "
                        <i class="fas fa-external-link-alt text-xs ml-1"></i>
                    </a>
                })}
            </div>
        </article>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between items-center mb-1">
                <span class="flex items-center gap-2 text-sm font-medium">
                    <i class=skill.icon></i>
                    {skill.name}
                </span>
                <span class="text-xs text-gray-500">{format!("{} · {}%", skill.label(), skill.level())}</span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                <div class="h-full rounded-full bg-gradient-to-r from-blue-500 to-purple-600" style:width=skill.bar_width()></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="scroll-hidden p-6 rounded-2xl bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700 shadow-md">
            <h3 class="text-lg font-bold mb-5 flex items-center gap-3">
                <span class="w-10 h-10 rounded-lg bg-gradient-to-br from-blue-500 to-purple-600 text-white flex items-center justify-center">
                    <i class=group.icon></i>
                </span>
                {group.title}
            </h3>
            {group.skills.iter().map(|skill| view! { <SkillBar skill=skill/> }).collect_view()}
        </div>
    }
}
