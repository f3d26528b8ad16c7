use leptos::prelude::*;

use crate::data::profile::{BIO, COURSEWORK, DEGREE, OWNER_NAME, PROFILE_IMAGE, ROLE, STUDY_PERIOD, UNIVERSITY};
use crate::data::SKILL_GROUPS;
use crate::frontend::components::SkillCard;
use crate::frontend::hooks::use_scroll_reveal;
use crate::services::reveal::{RevealClasses, RevealOptions};

#[component]
pub fn AboutPage() -> impl IntoView {
    use_scroll_reveal(Signal::stored(RevealClasses::default()), RevealOptions::default());

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <h1 class="text-4xl md:text-5xl font-bold text-center mb-12 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                "About Me"
            </h1>

            <section class="grid md:grid-cols-3 gap-10 items-center mb-20">
                <div class="flex justify-center scroll-hidden">
                    <img src=PROFILE_IMAGE alt=OWNER_NAME class="w-56 h-56 rounded-2xl object-cover shadow-2xl border-4 border-blue-500/20"/>
                </div>
                <div class="md:col-span-2 scroll-hidden">
                    <h2 class="text-3xl font-bold mb-1">{OWNER_NAME}</h2>
                    <p class="text-blue-600 dark:text-blue-400 mb-6">{ROLE}</p>
                    {BIO.iter().map(|paragraph| view! {
                        <p class="text-gray-700 dark:text-gray-300 mb-4 leading-relaxed">{*paragraph}</p>
                    }).collect_view()}
                </div>
            </section>

            <section class="mb-20">
                <h2 class="text-3xl font-bold text-center mb-10 scroll-hidden">"Education"</h2>
                <div class="scroll-hidden p-8 rounded-2xl bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700 shadow-md">
                    <div class="flex items-start gap-4 mb-6">
                        <span class="w-12 h-12 shrink-0 rounded-lg bg-gradient-to-br from-blue-500 to-purple-600 text-white flex items-center justify-center text-xl">
                            <i class="fas fa-graduation-cap"></i>
                        </span>
                        <div>
                            <h3 class="text-xl font-bold">{UNIVERSITY}</h3>
                            <p class="text-gray-600 dark:text-gray-400">{DEGREE}</p>
                            <p class="text-sm text-gray-500">{STUDY_PERIOD}</p>
                        </div>
                    </div>
                    <h4 class="font-semibold mb-3">"Relevant Coursework"</h4>
                    <ul class="grid sm:grid-cols-2 gap-2">
                        {COURSEWORK.iter().map(|course| view! {
                            <li class="flex items-center gap-2 text-gray-700 dark:text-gray-300">
                                <i class="fas fa-check-circle text-blue-500"></i>
                                {*course}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </section>

            <section class="mb-20">
                <h2 class="text-3xl font-bold text-center mb-10 scroll-hidden">"Skills"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group=group/> }).collect_view()}
                </div>
            </section>

            <div class="text-center mb-16 scroll-hidden">
                <a href="/certificates" class="inline-flex items-center px-6 py-3 rounded-xl bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium shadow-lg hover:-translate-y-1 transition-all">
                    <i class="fas fa-certificate mr-2"></i>
                    "View My Certificates"
                </a>
            </div>
        </div>
    }
}
