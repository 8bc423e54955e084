use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::visibility::use_reveal;
use crate::content::{Skill, SkillCategory, SKILL_CATEGORIES};
use crate::motion::{fill_style, Easing, Entrance, Stagger, Timing};
use crate::theme::Accent;

#[component]
pub fn Skills(
    #[prop(default = SKILL_CATEGORIES)] categories: &'static [SkillCategory],
) -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(grid_ref, "skills");
    let cards = Stagger::new(0.0, 0.2);
    let rows = Stagger::new(0.3, 0.2);

    view! {
        <section id="skills" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Technical"
                    highlight="Skills"
                    blurb="Comprehensive expertise across data analytics, visualization, and business intelligence"
                    visible
                />

                <div node_ref=grid_ref class="grid lg:grid-cols-2 gap-8">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let c = category.accent.classes();
                            let rise = Entrance::fade_up(30.0).delay(cards.at(i));
                            view! {
                                <div style=move || rise.style(visible.get())>
                                    <div class=format!(
                                        "{} p-6 rounded-xl border {} backdrop-blur-sm hover:shadow-lg hover:scale-[1.02] hover:-translate-y-1 transition-all duration-300",
                                        c.bg,
                                        c.border,
                                    )>
                                        <h3 class=format!(
                                            "text-xl font-semibold {} mb-6",
                                            c.text,
                                        )>{category.title}</h3>
                                        <div class="space-y-4">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(j, skill)| {
                                                    view! {
                                                        <SkillBar
                                                            skill=*skill
                                                            accent=category.accent
                                                            visible
                                                            delay=rows.nested(i, 0.1, j)
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Name, percentage and a track whose fill is `level%` wide once visible.
/// The fill starts growing 0.2s after the row has begun sliding in.
#[component]
pub fn SkillBar(skill: Skill, accent: Accent, visible: Signal<bool>, delay: f32) -> impl IntoView {
    let c = accent.classes();
    let row = Entrance::slide_in(-20.0).delay(delay).duration(0.5);
    let fill = Timing {
        delay: delay + 0.2,
        duration: 1.0,
        easing: Easing::EaseOut,
    };
    let level = skill.level;

    view! {
        <div style=move || row.style(visible.get())>
            <div class="flex justify-between items-center mb-2">
                <span class="text-slate-300 font-medium">{skill.name}</span>
                <span class=format!("text-sm {}", c.text)>{format!("{}%", level.percent())}</span>
            </div>
            <div class="w-full bg-slate-700/50 rounded-full h-2">
                <div
                    class=format!("skill-fill h-2 {} rounded-full relative overflow-hidden", c.dot)
                    style=move || fill_style(level, visible.get(), fill)
                >
                    <div class="absolute inset-0 bg-white/20 w-full animate-shimmer"></div>
                </div>
            </div>
        </div>
    }
}
