//! Leptos Swipe Utilities
//!
//! Pointer-drag swipe gestures for Leptos card stacks.
//! Tracks a single active drag and commits a like/dislike decision
//! when the horizontal offset crosses the threshold on release.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Committed swipe direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Like,
    Dislike,
}

impl SwipeDirection {
    /// Wire form used by the swipe endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Like => "like",
            SwipeDirection::Dislike => "dislike",
        }
    }

    /// Sign of the horizontal fling: +1 for like, -1 for dislike
    pub fn sign(&self) -> f64 {
        match self {
            SwipeDirection::Like => 1.0,
            SwipeDirection::Dislike => -1.0,
        }
    }
}

/// Horizontal offset in pixels needed to commit a decision
pub const SWIPE_THRESHOLD: f64 = 120.0;

/// The card tilts dx/20 degrees while dragged
const ROTATION_DIVISOR: f64 = 20.0;

/// Tilt of a flung card once committed
const FLING_ROTATION_DEG: f64 = 20.0;

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Pointer position at drag start
    pub origin_x_read: ReadSignal<f64>,
    pub origin_x_write: WriteSignal<f64>,
    pub origin_y_read: ReadSignal<f64>,
    pub origin_y_write: WriteSignal<f64>,
    /// Current offset relative to origin
    pub dx_read: ReadSignal<f64>,
    pub dx_write: WriteSignal<f64>,
    pub dy_read: ReadSignal<f64>,
    pub dy_write: WriteSignal<f64>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (dragging_read, dragging_write) = signal(false);
    let (origin_x_read, origin_x_write) = signal(0.0f64);
    let (origin_y_read, origin_y_write) = signal(0.0f64);
    let (dx_read, dx_write) = signal(0.0f64);
    let (dy_read, dy_write) = signal(0.0f64);
    SwipeSignals {
        dragging_read,
        dragging_write,
        origin_x_read,
        origin_x_write,
        origin_y_read,
        origin_y_write,
        dx_read,
        dx_write,
        dy_read,
        dy_write,
    }
}

/// Decision for a finished drag: past the threshold commits, anything
/// up to and including it cancels
pub fn decide(dx: f64) -> Option<SwipeDirection> {
    if dx > SWIPE_THRESHOLD {
        Some(SwipeDirection::Like)
    } else if dx < -SWIPE_THRESHOLD {
        Some(SwipeDirection::Dislike)
    } else {
        None
    }
}

/// Overlay intent strength: 0 at rest, saturating at the commit threshold
pub fn intent_magnitude(dx: f64) -> f64 {
    (dx.abs() / SWIPE_THRESHOLD).min(1.0)
}

/// Overlay direction while dragging
pub fn intent_direction(dx: f64) -> SwipeDirection {
    if dx > 0.0 {
        SwipeDirection::Like
    } else {
        SwipeDirection::Dislike
    }
}

pub fn rotation_deg(dx: f64) -> f64 {
    dx / ROTATION_DIVISOR
}

/// Transform applied to the front card while it follows the pointer
pub fn drag_transform(dx: f64, dy: f64) -> String {
    format!("translate({dx}px, {dy}px) rotate({}deg)", rotation_deg(dx))
}

/// Off-screen transform for a committed card
pub fn fling_transform(direction: SwipeDirection, dy: f64, viewport_width: f64) -> String {
    format!(
        "translate({}px, {dy}px) rotate({}deg)",
        direction.sign() * viewport_width,
        direction.sign() * FLING_ROTATION_DEG
    )
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0)
}

/// Create pointerdown handler for the front card.
/// Only the front card gets one, which is what keeps a single drag active.
pub fn make_on_pointerdown(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        sw.dragging_write.set(true);
        sw.origin_x_write.set(ev.client_x() as f64);
        sw.origin_y_write.set(ev.client_y() as f64);
        sw.dx_write.set(0.0);
        sw.dy_write.set(0.0);
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    }
}

/// Bind global pointermove handler - updates the drag offset
fn bind_global_pointermove(sw: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        // Ignore moves with no matching pointerdown
        if !sw.dragging_read.get_untracked() {
            return;
        }
        sw.dx_write.set(ev.client_x() as f64 - sw.origin_x_read.get_untracked());
        sw.dy_write.set(ev.client_y() as f64 - sw.origin_y_read.get_untracked());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    }
    on_pointermove.forget();
}

/// Bind global pointerup handler for commit detection.
/// Also binds the global pointermove tracking.
///
/// On release past the threshold `on_commit` fires with the decision;
/// otherwise the offset resets so the card springs back to rest and the
/// overlay intent drops to zero.
pub fn bind_global_pointer<F>(sw: SwipeSignals, on_commit: F)
where
    F: Fn(SwipeDirection) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        if !sw.dragging_read.get_untracked() {
            return;
        }
        sw.dragging_write.set(false);
        let dx = sw.dx_read.get_untracked();
        sw.dx_write.set(0.0);
        sw.dy_write.set(0.0);

        if let Some(direction) = decide(dx) {
            on_commit(direction);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
    }
    on_pointerup.forget();

    bind_global_pointermove(sw);
}

/// Bind ArrowLeft/ArrowRight as keyboard swipes.
/// The commit callback is the same one the pointer path uses, so a key
/// press produces the identical decision for whatever card is in front.
pub fn bind_global_keys<F>(on_commit: F)
where
    F: Fn(SwipeDirection) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "ArrowRight" => on_commit(SwipeDirection::Like),
            "ArrowLeft" => on_commit(SwipeDirection::Dislike),
            _ => {}
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_past_threshold() {
        assert_eq!(decide(121.0), Some(SwipeDirection::Like));
        assert_eq!(decide(-121.0), Some(SwipeDirection::Dislike));
        assert_eq!(decide(500.0), Some(SwipeDirection::Like));
    }

    #[test]
    fn cancel_within_threshold() {
        assert_eq!(decide(0.0), None);
        assert_eq!(decide(120.0), None);
        assert_eq!(decide(-120.0), None);
    }

    #[test]
    fn intent_saturates_at_threshold() {
        assert_eq!(intent_magnitude(0.0), 0.0);
        assert_eq!(intent_magnitude(60.0), 0.5);
        assert_eq!(intent_magnitude(240.0), 1.0);
        assert_eq!(intent_magnitude(-240.0), 1.0);
    }

    #[test]
    fn rotation_follows_horizontal_offset() {
        assert_eq!(rotation_deg(100.0), 5.0);
        assert_eq!(rotation_deg(-40.0), -2.0);
    }

    #[test]
    fn drag_transform_format() {
        assert_eq!(drag_transform(100.0, 10.0), "translate(100px, 10px) rotate(5deg)");
    }

    #[test]
    fn fling_transform_is_signed() {
        assert_eq!(
            fling_transform(SwipeDirection::Like, 0.0, 800.0),
            "translate(800px, 0px) rotate(20deg)"
        );
        assert_eq!(
            fling_transform(SwipeDirection::Dislike, 12.0, 800.0),
            "translate(-800px, 12px) rotate(-20deg)"
        );
    }
}
