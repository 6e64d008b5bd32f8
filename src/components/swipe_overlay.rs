//! Swipe Intent Overlay
//!
//! LIKE/NOPE affordance on the front card. Opacity follows the intent
//! magnitude, so it fades in toward the commit threshold and vanishes
//! the moment dragging stops.

use leptos::prelude::*;
use leptos_swipe::{intent_direction, intent_magnitude, SwipeDirection, SwipeSignals};

#[component]
pub fn SwipeOverlay() -> impl IntoView {
    let swipe = expect_context::<SwipeSignals>();

    let class = move || match intent_direction(swipe.dx_read.get()) {
        SwipeDirection::Like => "overlay like",
        SwipeDirection::Dislike => "overlay nope",
    };
    let label = move || match intent_direction(swipe.dx_read.get()) {
        SwipeDirection::Like => "LIKE",
        SwipeDirection::Dislike => "NOPE",
    };

    view! {
        <div
            class=class
            style:opacity=move || intent_magnitude(swipe.dx_read.get()).to_string()
        >
            {label}
        </div>
    }
}
