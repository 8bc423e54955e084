use leptos::{html, prelude::*};

use super::icon::Icon;
use super::visibility::use_reveal;
use crate::content::{FocusArea, Stat, ABOUT_PARAGRAPHS, FOCUS_AREAS, STATS};
use crate::motion::{Entrance, Stagger};

#[component]
pub fn About(
    #[prop(default = ABOUT_PARAGRAPHS)] paragraphs: &'static [&'static str],
    #[prop(default = STATS)] stats: &'static [Stat],
    #[prop(default = FOCUS_AREAS)] focus: &'static [FocusArea],
) -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(grid_ref, "about");
    let columns = Stagger::new(0.0, 0.2);
    let column = move |i: usize| Entrance::fade_up(30.0).delay(columns.at(i));
    let icons = Stagger::new(0.5, 0.2);
    let figures = Stagger::new(0.7, 0.2);

    view! {
        <section id="about" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div node_ref=grid_ref class="grid lg:grid-cols-2 gap-16 items-center">
                    <div style=move || column(0).style(visible.get())>
                        <h2 class="text-4xl font-bold mb-6 hover:scale-[1.02] transition-transform origin-left">
                            "About " <span class="text-blue-400">"Me"</span>
                        </h2>
                        {paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-slate-300 mb-6 leading-relaxed">{*p}</p>
                                }
                            })
                            .collect_view()}
                        <div class="grid grid-cols-3 gap-6">
                            {stats
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    let pop = Entrance::pop().delay(icons.at(i)).duration(0.5);
                                    let count = Entrance::fade().delay(figures.at(i));
                                    view! {
                                        <div class="text-center p-4 bg-slate-800/30 rounded-lg border border-slate-700/50 hover:border-blue-500/30 hover:scale-105 hover:-translate-y-1 transition-all duration-300">
                                            <div
                                                class="flex justify-center mb-2"
                                                style=move || pop.style(visible.get())
                                            >
                                                <Icon kind=stat.icon class="w-6 h-6 text-blue-400" />
                                            </div>
                                            <div
                                                class="text-2xl font-bold text-blue-400 mb-1"
                                                style=move || count.style(visible.get())
                                            >
                                                {stat.figure}
                                            </div>
                                            <div class="text-sm text-slate-400">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative" style=move || column(1).style(visible.get())>
                        <div class="relative bg-gradient-to-br from-blue-950/30 via-slate-950 to-purple-950/30 p-8 rounded-2xl border border-slate-700/50 backdrop-blur-sm hover:scale-[1.02] hover:rotate-1 transition-transform duration-300">
                            <div class="absolute inset-0 bg-gradient-to-br from-blue-500/10 to-purple-500/10 rounded-2xl animate-glow"></div>
                            <div class="relative z-10">
                                <h3 class="text-2xl font-semibold mb-4 text-blue-400">
                                    "Current Focus"
                                </h3>
                                <ul class="space-y-3 text-slate-300">
                                    {focus
                                        .iter()
                                        .map(|area| {
                                            view! {
                                                <li class="flex items-center gap-3 hover:translate-x-1 transition-transform">
                                                    <div class=format!(
                                                        "w-2 h-2 {} rounded-full",
                                                        area.accent.classes().dot,
                                                    )></div>
                                                    {area.label}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
