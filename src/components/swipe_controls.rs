//! Like/Nope Buttons
//!
//! Button-driven swipes share the commit path with drags and arrow
//! keys, so they act on whatever card is currently in front.

use leptos::prelude::*;
use leptos_swipe::SwipeDirection;

#[component]
pub fn SwipeControls(#[prop(into)] on_commit: Callback<SwipeDirection>) -> impl IntoView {
    view! {
        <div class="controls">
            <button
                class="btn btn-dislike"
                aria-label="dislike"
                on:click=move |_| on_commit.run(SwipeDirection::Dislike)
            >
                "Nope"
            </button>
            <button
                class="btn btn-like"
                aria-label="like"
                on:click=move |_| on_commit.run(SwipeDirection::Like)
            >
                "Like"
            </button>
        </div>
    }
}
