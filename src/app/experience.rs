use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::icon::Icon;
use super::visibility::use_reveal;
use crate::content::{ExperienceEntry, IconKind, EXPERIENCE};
use crate::motion::{Entrance, Stagger};

/// Vertical timeline, one `<article>` per entry in the order given.
#[component]
pub fn Experience(
    #[prop(default = EXPERIENCE)] entries: &'static [ExperienceEntry],
) -> impl IntoView {
    let list_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(list_ref, "experience");
    let cards = Stagger::new(0.0, 0.3);
    let dots = Stagger::new(0.3, 0.2);
    let highlights = Stagger::new(0.5, 0.2);

    view! {
        <section id="experience" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Professional"
                    highlight="Experience"
                    blurb="My journey through data analytics, research, and business intelligence"
                    visible
                />

                <div node_ref=list_ref class="relative">
                    <div class="absolute left-2 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-400 via-purple-400 to-teal-400"></div>

                    <div class="space-y-12">
                        {entries
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                let c = entry.accent.classes();
                                let slide = Entrance::slide_in(-50.0).delay(cards.at(i));
                                let dot = Entrance::pop().delay(dots.at(i)).duration(0.4);
                                view! {
                                    <article
                                        class="relative flex items-start gap-8"
                                        style=move || slide.style(visible.get())
                                    >
                                        <div
                                            class=format!(
                                                "relative z-10 w-4 h-4 {} rounded-full flex-shrink-0 mt-6",
                                                c.dot,
                                            )
                                            style=move || dot.style(visible.get())
                                        >
                                            <div class=format!(
                                                "absolute inset-0 {} rounded-full opacity-30 animate-ping-slow",
                                                c.dot,
                                            )></div>
                                        </div>

                                        <div class=format!(
                                            "flex-1 {} p-6 rounded-xl border {} backdrop-blur-sm hover:shadow-lg hover:scale-[1.02] hover:-translate-y-1 transition-all duration-300",
                                            c.bg,
                                            c.border,
                                        )>
                                            <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between mb-4">
                                                <div>
                                                    <h3 class=format!(
                                                        "text-xl font-semibold {} mb-1",
                                                        c.text,
                                                    )>{entry.title}</h3>
                                                    <div class="flex items-center gap-4 text-slate-300 text-sm">
                                                        <div class="flex items-center gap-1">
                                                            <Icon kind=IconKind::Building size=14 />
                                                            {entry.organization}
                                                        </div>
                                                        <div class="flex items-center gap-1">
                                                            <Icon kind=IconKind::MapPin size=14 />
                                                            {entry.location}
                                                        </div>
                                                    </div>
                                                </div>
                                                <div class=format!(
                                                    "flex items-center gap-1 {} text-sm mt-2 lg:mt-0",
                                                    c.text,
                                                )>
                                                    <Icon kind=IconKind::Calendar size=14 />
                                                    {entry.period}
                                                </div>
                                            </div>

                                            <p class="text-slate-300 mb-4 leading-relaxed">
                                                {entry.description}
                                            </p>

                                            <ul class="grid md:grid-cols-2 gap-2">
                                                {entry
                                                    .highlights
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(j, highlight)| {
                                                        let fade = Entrance::slide_in(-20.0)
                                                            .delay(highlights.nested(i, 0.1, j));
                                                        view! {
                                                            <li
                                                                class="flex items-center gap-2 text-slate-400 text-sm"
                                                                style=move || fade.style(visible.get())
                                                            >
                                                                <div class=format!(
                                                                    "w-1.5 h-1.5 {} rounded-full",
                                                                    c.dot,
                                                                )></div>
                                                                {*highlight}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
