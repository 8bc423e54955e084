use leptos::prelude::*;

use super::icon::Icon;
use super::visibility::use_mounted_reveal;
use crate::content::{IconKind, Profile, PROFILE};
use crate::motion::{Entrance, Stagger};

#[component]
pub fn Hero(#[prop(default = &PROFILE)] profile: &'static Profile) -> impl IntoView {
    // the hero is above the fold, so it plays on mount rather than on scroll
    let visible = use_mounted_reveal();
    let items = Stagger::new(0.3, 0.2);
    let item = move |i: usize| Entrance::fade_up(30.0).duration(0.8).delay(items.at(i));
    let badge = Entrance::zoom(0.5).delay(0.1);
    let headline = Entrance::fade().duration(0.8).delay(0.8);
    let summary = Entrance::fade().duration(0.8).delay(1.0);

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-blue-500/10 rounded-full blur-3xl animate-blob-spin"></div>
                <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-purple-500/10 rounded-full blur-3xl animate-blob-spin-reverse"></div>
            </div>

            <div class="max-w-4xl mx-auto px-4 text-center relative z-10">
                <div class="mb-6" style=move || item(0).style(visible.get())>
                    <span
                        class="inline-block px-4 py-2 bg-blue-500/20 text-blue-400 rounded-full text-sm font-medium mb-4 border border-blue-500/30"
                        style=move || badge.style(visible.get())
                    >
                        {profile.greeting_badge}
                    </span>
                </div>

                <h1
                    class="text-5xl md:text-7xl font-bold mb-6 leading-tight"
                    style=move || item(1).style(visible.get())
                >
                    <span class="block">"Hi, I'm"</span>
                    <span class="block bg-gradient-to-r from-blue-400 via-purple-500 to-teal-400 bg-clip-text text-transparent bg-[length:200%_200%] animate-gradient-pan">
                        {profile.name}
                    </span>
                </h1>

                <div class="mb-8" style=move || item(2).style(visible.get())>
                    <p
                        class="text-xl md:text-2xl text-slate-300 mb-4"
                        style=move || headline.style(visible.get())
                    >
                        {profile.headline}
                    </p>
                    <p
                        class="text-lg text-slate-400 max-w-2xl mx-auto leading-relaxed"
                        style=move || summary.style(visible.get())
                    >
                        {profile.summary}
                    </p>
                </div>

                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16"
                    style=move || item(3).style(visible.get())
                >
                    <a
                        href="#contact"
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg font-semibold flex items-center gap-2 hover:from-blue-700 hover:to-purple-700 hover:scale-105 hover:shadow-[0_10px_30px_rgba(59,130,246,0.3)] active:scale-95 transition-all duration-300"
                    >
                        <Icon kind=IconKind::Mail size=20 />
                        "Get In Touch"
                    </a>
                    <button
                        type="button"
                        class="px-8 py-4 border border-slate-600 text-slate-300 rounded-lg font-semibold flex items-center gap-2 hover:border-blue-400 hover:text-blue-400 hover:scale-105 active:scale-95 transition-all duration-300"
                    >
                        <Icon kind=IconKind::Download size=20 />
                        "Download CV"
                    </button>
                </div>

                <div
                    class="absolute bottom-8 left-1/2 -translate-x-1/2"
                    style=move || item(4).style(visible.get())
                >
                    <a
                        href="#about"
                        aria-label="Scroll to about"
                        class="block text-slate-400 hover:text-blue-400 transition-colors duration-300 animate-nudge"
                    >
                        <Icon kind=IconKind::ChevronDown size=32 />
                    </a>
                </div>
            </div>
        </section>
    }
}
