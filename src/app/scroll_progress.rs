use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::decor::scroll_progress;

/// Thin bar across the top of the viewport, filled by how far the page has
/// been scrolled.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    // a resize reflows the page, so the scrollable height has to be re-read
    let UseWindowSizeReturn { width, height } = use_window_size();
    let (progress, set_progress) = signal(0.0_f64);

    // effects only run in the browser, so the DOM is safe to touch here
    Effect::new(move |_| {
        let offset = scroll_y.get();
        width.track();
        let viewport_height = height.get();
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        set_progress(scroll_progress(offset, document_height, viewport_height));
    });

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 z-50 origin-left bg-gradient-to-r from-blue-500 via-purple-500 to-teal-400"
            style=move || format!("transform:scaleX({:.4})", progress.get())
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
        ></div>
    }
}
