pub mod components;
pub mod hooks;
pub mod pages;

use components::{Layout, Splash};
use hooks::provide_theme;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use pages::{AboutPage, CertificatesPage, ContactPage, HomePage, NotFound, ProjectsPage};

use crate::data::profile::{OWNER_NAME, SITE_TITLE};
use crate::services::theme::BOOT_SCRIPT;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
/// Tailwind reads its config from this global before scanning the page.
const TAILWIND_CONFIG: &str = "tailwind.config = { darkMode: 'class' };";

/// HTML shell for SSR. The theme script runs before the body renders so the
/// first paint already uses the stored preference.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=BOOT_SCRIPT></script>
                <script src=TAILWIND_CDN></script>
                <script inner_html=TAILWIND_CONFIG></script>
                <link rel="stylesheet" href=FONT_AWESOME_CSS/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=format!("{} - student developer portfolio: projects, certificates and contact", OWNER_NAME)/>

        <Splash/>
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/certificates") view=CertificatesPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
