mod about;
mod contact;
mod experience;
mod heading;
mod hero;
mod icon;
mod particles;
mod projects;
mod scroll_progress;
mod skills;
mod visibility;

pub use about::About;
pub use contact::{Contact, ContactFormView};
pub use experience::Experience;
pub use hero::Hero;
pub use icon::Icon;
pub use particles::ParticleBackground;
pub use projects::Projects;
pub use scroll_progress::ScrollProgress;
pub use skills::{SkillBar, Skills};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::motion::Entrance;
use visibility::use_mounted_reveal;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.summary />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let mounted = use_mounted_reveal();
    let fade_in = Entrance::fade().duration(0.8);

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) text="Portfolio" />

        <Router>
            <div class="relative min-h-screen bg-slate-950 text-slate-100 overflow-x-hidden">
                <ParticleBackground />
                <ScrollProgress />
                <div class="relative z-10" style=move || fade_in.style(mounted.get())>
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// Every section of the page, in display order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Experience />
        <Skills />
        <Projects />
        <Contact />
    }
}
