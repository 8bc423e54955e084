use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::icon::Icon;
use super::visibility::use_reveal;
use crate::content::{IconKind, ProjectEntry, PROJECTS};
use crate::motion::{Entrance, Stagger};

#[component]
pub fn Projects(#[prop(default = PROJECTS)] projects: &'static [ProjectEntry]) -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(grid_ref, "projects");
    let cards = Stagger::new(0.0, 0.3);
    let badges = Stagger::new(0.5, 0.2);
    let features = Stagger::new(0.7, 0.2);
    let tags = Stagger::new(0.8, 0.2);

    view! {
        <section id="projects" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Featured"
                    highlight="Projects"
                    blurb="Showcasing my expertise in data analytics, financial modeling, and business intelligence"
                    visible
                />

                <div node_ref=grid_ref class="grid lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let c = project.accent.classes();
                            let rise = Entrance::fade_up(50.0).delay(cards.at(i));
                            let badge = Entrance::pop().delay(badges.at(i));
                            view! {
                                <article style=move || rise.style(visible.get())>
                                    <div class=format!(
                                        "group h-full {} rounded-xl overflow-hidden backdrop-blur-sm hover:shadow-2xl hover:-translate-y-2 hover:scale-[1.02] transition-all duration-300",
                                        c.card(),
                                    )>
                                        <div class="relative overflow-hidden">
                                            <img
                                                src=project.image_url
                                                alt=project.title
                                                loading="lazy"
                                                class="w-full h-48 object-cover hover:scale-110 transition-transform duration-300"
                                            />
                                            <div class="absolute inset-0 bg-gradient-to-t from-slate-900/80 to-transparent pointer-events-none"></div>
                                            <div
                                                class=format!(
                                                    "absolute top-4 right-4 p-2 {} rounded-lg border {}",
                                                    c.bg,
                                                    c.border,
                                                )
                                                style=move || badge.style(visible.get())
                                            >
                                                <Icon kind=project.icon class=format!("w-5 h-5 {}", c.text) />
                                            </div>
                                        </div>

                                        <div class="p-6">
                                            <div class=format!(
                                                "inline-block px-3 py-1 {} {} text-xs font-medium rounded-full mb-3 border {}",
                                                c.bg,
                                                c.text,
                                                c.border,
                                            )>{project.category}</div>

                                            <h3 class="text-xl font-semibold text-white mb-3 group-hover:text-blue-400 transition-colors">
                                                {project.title}
                                            </h3>

                                            <p class="text-slate-300 mb-4 leading-relaxed">
                                                {project.description}
                                            </p>

                                            <div class="mb-4">
                                                <h4 class="text-sm font-medium text-slate-400 mb-2">
                                                    "Key Features:"
                                                </h4>
                                                <ul class="space-y-1">
                                                    {project
                                                        .highlights
                                                        .iter()
                                                        .enumerate()
                                                        .map(|(j, feature)| {
                                                            let fade = Entrance::slide_in(-10.0)
                                                                .delay(features.nested(i, 0.1, j));
                                                            view! {
                                                                <li
                                                                    class="flex items-center gap-2 text-slate-400 text-sm"
                                                                    style=move || fade.style(visible.get())
                                                                >
                                                                    <div class=format!(
                                                                        "w-1 h-1 {} rounded-full",
                                                                        c.dot,
                                                                    )></div>
                                                                    {*feature}
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>

                                            <div class="flex flex-wrap gap-2 mb-6">
                                                {project
                                                    .technologies
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(j, tech)| {
                                                        let grow = Entrance::zoom(0.8)
                                                            .delay(tags.nested(i, 0.05, j));
                                                        view! {
                                                            <span
                                                                class="px-2 py-1 bg-slate-700/50 text-slate-300 text-xs rounded border border-slate-600/50"
                                                                style=move || grow.style(visible.get())
                                                            >
                                                                {*tech}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>

                                            <div class="flex gap-3">
                                                <button
                                                    type="button"
                                                    class=format!(
                                                        "flex items-center gap-2 px-4 py-2 {} border {} rounded-lg hover:bg-slate-700/50 hover:scale-105 active:scale-95 transition-all duration-200 text-sm",
                                                        c.text,
                                                        c.border,
                                                    )
                                                >
                                                    <Icon kind=IconKind::ExternalLink size=14 />
                                                    "View Project"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="flex items-center gap-2 px-4 py-2 text-slate-400 border border-slate-600/50 rounded-lg hover:bg-slate-700/50 hover:scale-105 active:scale-95 transition-all duration-200 text-sm"
                                                >
                                                    <Icon kind=IconKind::Github size=14 />
                                                    "Code"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
