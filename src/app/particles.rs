use leptos::prelude::*;

use crate::decor::{particle_field, PARTICLE_COUNT, PARTICLE_SEED};

/// Fixed layer of slowly drifting dots behind the page.
#[component]
pub fn ParticleBackground(
    #[prop(default = PARTICLE_COUNT)] count: usize,
    #[prop(default = PARTICLE_SEED)] seed: u64,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950"></div>
            {particle_field(count, seed)
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="absolute rounded-full bg-blue-300 animate-drift"
                            style=p.style()
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
