use leptos::prelude::*;

use crate::data::profile::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, OWNER_NAME, PROFILE_IMAGE, TAGLINE};
use crate::data::projects::featured;
use crate::data::skills::HOME_TECH;
use crate::data::tech_icon;
use crate::frontend::components::{ButtonVariant, LinkButton, ProjectCard};
use crate::frontend::hooks::{use_scroll_reveal, use_typewriter};
use crate::services::reveal::{RevealClasses, RevealOptions};

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12 scroll-hidden">
            <h2 class="text-3xl md:text-4xl font-bold mb-4 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                {title}
            </h2>
            <p class="text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let typed = use_typewriter(TAGLINE);
    use_scroll_reveal(Signal::stored(RevealClasses::default()), RevealOptions::default());

    let socials = [
        (GITHUB_URL.to_string(), "fab fa-github", "GitHub"),
        (LINKEDIN_URL.to_string(), "fab fa-linkedin-in", "LinkedIn"),
        (format!("mailto:{}", CONTACT_EMAIL), "fas fa-envelope", "Email"),
    ];

    view! {
        <div class="flex flex-col items-center">
            <section class="w-full min-h-[90vh] flex items-center justify-center py-12 mb-16 relative">
                <div class="w-full max-w-7xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-12">
                    <div class="w-full md:w-5/12 flex justify-center md:justify-start animate-fadeIn">
                        <div class="relative">
                            <div class="w-56 h-56 md:w-72 md:h-72 rounded-full overflow-hidden border-4 border-blue-500/30 shadow-[0_0_30px_rgba(59,130,246,0.3)]">
                                <img src=PROFILE_IMAGE alt=OWNER_NAME class="w-full h-full object-cover"/>
                            </div>
                            <div class="absolute -inset-2 rounded-full border-2 border-blue-500/20 animate-spin-slow"></div>
                        </div>
                    </div>

                    <div class="w-full md:w-7/12 text-center md:text-left">
                        <h1 class="text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent animate-fadeInUp">
                            "Welcome to My Portfolio"
                        </h1>
                        <p class="h-16 mb-8 text-lg md:text-2xl text-gray-700 dark:text-gray-300">
                            {move || typed.get()}
                            <span class="animate-pulse">"|"</span>
                        </p>
                        <div class="flex flex-col sm:flex-row justify-center md:justify-start gap-4">
                            <LinkButton href="/projects">
                                <i class="fas fa-code-branch mr-2"></i>
                                "View Projects"
                            </LinkButton>
                            <LinkButton href="/contact" variant=ButtonVariant::Ghost>
                                <i class="fas fa-envelope mr-2"></i>
                                "Contact Me"
                            </LinkButton>
                        </div>
                        <div class="mt-8 flex justify-center md:justify-start gap-4">
                            {socials.into_iter().map(|(href, icon, label)| view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                    class="w-10 h-10 rounded-full bg-gray-200/50 dark:bg-white/10 flex items-center justify-center hover:bg-blue-500/30 hover:scale-110 transition-all duration-300"
                                >
                                    <i class=format!("{} text-lg", icon)></i>
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            <section class="w-full max-w-6xl mx-auto px-4 mb-20">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="Check out some of my recent work"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {featured().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
                <div class="text-center mt-10">
                    <a href="/projects" class="inline-flex items-center text-blue-600 dark:text-blue-400 font-medium hover:underline">
                        "View All Projects"
                        <i class="fas fa-arrow-right ml-2"></i>
                    </a>
                </div>
            </section>

            <section class="w-full max-w-6xl mx-auto px-4 mb-20">
                <SectionHeading
                    title="Skills & Technologies"
                    subtitle="Tools and technologies I work with"
                />
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">
                    {HOME_TECH.iter().map(|tech| view! {
                        <div class="scroll-hidden p-4 rounded-xl bg-white dark:bg-gray-800/60 border border-gray-200 dark:border-gray-700 text-center shadow-sm hover:shadow-lg hover:-translate-y-1 transition-all duration-300">
                            <i class=format!("{} text-3xl mb-2 text-blue-500", tech_icon(tech))></i>
                            <div class="text-sm font-medium">{*tech}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="w-full max-w-4xl mx-auto px-4 mb-20">
                <div class="scroll-hidden p-10 rounded-3xl bg-gradient-to-r from-blue-600 to-purple-600 text-center text-white shadow-2xl">
                    <h2 class="text-3xl font-bold mb-4">"Let's Work Together"</h2>
                    <p class="mb-8 text-white/80">
                        "I'm currently available for freelance work and open to new opportunities."
                    </p>
                    <a href="/contact" class="inline-flex items-center px-8 py-3 rounded-xl bg-white text-blue-600 font-semibold hover:shadow-xl transition-all">
                        <i class="fas fa-paper-plane mr-2"></i>
                        "Get in Touch"
                    </a>
                </div>
            </section>
        </div>
    }
}
