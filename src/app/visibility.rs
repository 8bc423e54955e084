use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{Reveal, DEFAULT_THRESHOLD};

/// Visible once `target` has scrolled at least [`DEFAULT_THRESHOLD`] into view.
pub fn use_reveal(target: NodeRef<html::Div>, section: &'static str) -> Signal<bool> {
    use_reveal_with_threshold(target, section, DEFAULT_THRESHOLD)
}

/// The browser's intersection observer drives a [`Reveal`]; the observer is
/// disconnected as soon as it fires since the state is terminal. On the
/// server nothing is observed and the section renders hidden.
pub fn use_reveal_with_threshold(
    target: NodeRef<html::Div>,
    section: &'static str,
    threshold: f64,
) -> Signal<bool> {
    let (visible, set_visible) = signal(false);
    let reveal = StoredValue::new(Reveal::new(threshold));

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let fired = reveal
                    .try_update_value(|r| {
                        r.observe(entry.is_intersecting(), entry.intersection_ratio())
                    })
                    .unwrap_or(false);
                if fired {
                    log::debug!("revealing section {section}");
                    set_visible(true);
                    observer.disconnect();
                    break;
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![reveal.get_value().threshold()]),
    );

    visible.into()
}

/// Visible as soon as the component has mounted in the browser.
pub fn use_mounted_reveal() -> Signal<bool> {
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible(true));
    visible.into()
}
