mod about;
mod background;
mod contact;
mod footer;
mod header;
mod homepage;
mod magic;
mod projects;
mod resume;
mod scroll;
mod theme;
mod typing;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use background::AnimatedBackground;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;
use projects::ProjectsPage;
use resume::ResumePage;
use scroll::{BackToTop, NeonProgressLine};
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/svg+xml" href="/avatar.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("John Doe - {title}") />
        <Html attr:data-theme=move || theme.get().as_str() />

        <Router>
            <Header />
            <NeonProgressLine />
            <AnimatedBackground />
            <main class="flex flex-col flex-grow w-full min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/resume") view=ResumePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
            <BackToTop />
        </Router>
    }
}
