use leptos::prelude::*;

use crate::motion::Entrance;

/// Centered section title: `lead` in the body color, `highlight` in blue.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    highlight: &'static str,
    blurb: &'static str,
    visible: Signal<bool>,
) -> impl IntoView {
    let rise = Entrance::fade_up(30.0);
    view! {
        <div class="text-center mb-16" style=move || rise.style(visible.get())>
            <h2 class="text-4xl font-bold mb-4">
                {lead} " " <span class="text-blue-400">{highlight}</span>
            </h2>
            <p class="text-lg text-slate-400 max-w-2xl mx-auto">{blurb}</p>
        </div>
    }
}
