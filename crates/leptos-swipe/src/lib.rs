//! Leptos Swipe Utilities
//!
//! Swipe-to-reveal rows for Leptos using pointer events.
//! Uses a movement threshold to distinguish tap from drag, a pure
//! state machine for the gesture and a spring to settle the row.

pub mod config;
pub mod machine;
pub mod spring;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

pub use config::SwipeConfig;
pub use machine::{settle, RestState, RowAction, SwipeEvent, SwipeMachine, SwipePhase, Transition};
pub use spring::{Spring, SpringConfig};

/// Animation frame length in milliseconds
const FRAME_MS: u32 = 16;

/// How long the click following a drag is suppressed
const DRAG_END_GRACE_MS: u32 = 100;

/// Swipe state signals for one row
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub machine: RwSignal<SwipeMachine>,
    /// Rendered horizontal offset (live drag or animated)
    pub offset_read: ReadSignal<f64>,
    pub offset_write: WriteSignal<f64>,
    /// Pointer id that is down but not yet dragging
    pub pending_read: ReadSignal<Option<i32>>,
    pub pending_write: WriteSignal<Option<i32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Bumped whenever a running animation must stop
    animation: StoredValue<u64>,
    /// Rendered offset when the current drag started
    drag_origin: StoredValue<f64>,
}

pub fn create_swipe_signals(config: SwipeConfig) -> SwipeSignals {
    let (offset_read, offset_write) = signal(0.0f64);
    let (pending_read, pending_write) = signal(None::<i32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    SwipeSignals {
        machine: RwSignal::new(SwipeMachine::new(config)),
        offset_read,
        offset_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        drag_just_ended_read,
        drag_just_ended_write,
        animation: StoredValue::new(0),
        drag_origin: StoredValue::new(0.0),
    }
}

/// Provide a swipe configuration to all rows below this owner
pub fn provide_swipe_config(config: SwipeConfig) {
    provide_context(config);
}

/// Swipe configuration from context, or the defaults
pub fn use_swipe_config() -> SwipeConfig {
    use_context::<SwipeConfig>().unwrap_or_default()
}

/// Feed one event to the row's state machine.
///
/// Live drag moves update the offset directly; settle targets start a
/// spring animation. Returns the callback the host should run.
///
/// A drag that interrupts a settle animation continues from where the
/// row was drawn, not from its rest position.
pub fn dispatch(swipe: SwipeSignals, event: SwipeEvent) -> Option<RowAction> {
    let was_dragging = swipe.machine.with_untracked(|m| m.is_dragging());
    let transition = swipe
        .machine
        .try_update(|m| m.handle(event))
        .unwrap_or_default();

    match event {
        SwipeEvent::DragStart if !was_dragging => {
            stop_animation(swipe);
            swipe.drag_origin.set_value(swipe.offset_read.get_untracked());
        }
        SwipeEvent::DragMove(translation) if was_dragging => {
            swipe.offset_write.set(swipe.drag_origin.get_value() + translation);
        }
        _ => {}
    }

    if let Some(rest) = transition.settle {
        let target = swipe.machine.with_untracked(|m| rest.offset(m.config()));
        log::debug!("[SWIPE] settle {:?} at {}", rest, target);
        animate_to(swipe, target);
    }
    transition.action
}

/// Stop any running settle animation
pub fn stop_animation(swipe: SwipeSignals) {
    swipe.animation.update_value(|g| *g += 1);
}

/// Spring the rendered offset to `target`
pub fn animate_to(swipe: SwipeSignals, target: f64) {
    stop_animation(swipe);
    let generation = swipe.animation.get_value();
    let config = swipe.machine.with_untracked(|m| m.config().spring);
    let mut spring = Spring::new(swipe.offset_read.get_untracked(), target, config);

    if spring.is_done() {
        swipe.offset_write.set(spring.position());
        return;
    }

    spawn_local(async move {
        while !spring.is_done() {
            TimeoutFuture::new(FRAME_MS).await;
            // Superseded, or the row was unmounted
            if swipe.animation.try_get_value() != Some(generation) {
                return;
            }
            swipe.offset_write.set(spring.step(f64::from(FRAME_MS) / 1000.0));
        }
    });
}

/// Flag the end of a drag so the click that follows it is ignored
pub fn end_drag(swipe: SwipeSignals) {
    swipe.pending_write.set(None);
    swipe.drag_just_ended_write.set(true);

    let clear = swipe.drag_just_ended_write;
    Timeout::new(DRAG_END_GRACE_MS, move || {
        clear.try_set(false);
    })
    .forget();
}

/// Create pointerdown handler for the row body.
/// Records a pending drag with its start position.
pub fn make_on_pointerdown(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        // Ignore if target is a button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        swipe.pending_write.set(Some(ev.pointer_id()));
        swipe.start_x_write.set(ev.client_x());
    }
}

/// Create pointermove handler - starts the drag once moved enough, then tracks it
pub fn make_on_pointermove(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let pointer_id = ev.pointer_id();
        if swipe.pending_read.get_untracked() != Some(pointer_id) {
            return;
        }
        let dx = ev.client_x() - swipe.start_x_read.get_untracked();

        if !swipe.machine.with_untracked(|m| m.is_dragging()) {
            let threshold = swipe.machine.with_untracked(|m| m.config().drag_threshold_px);
            if dx.abs() <= threshold {
                return;
            }
            // Keep receiving moves when the pointer leaves the row
            if let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = el.set_pointer_capture(pointer_id);
            }
            dispatch(swipe, SwipeEvent::DragStart);
        }

        dispatch(swipe, SwipeEvent::DragMove(f64::from(dx)));
    }
}

/// Create pointerup handler - releases the drag
pub fn make_on_pointerup(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let pending = swipe.pending_read.get_untracked();
        swipe.pending_write.set(None);
        if pending != Some(ev.pointer_id()) {
            return;
        }

        if swipe.machine.with_untracked(|m| m.is_dragging()) {
            let dx = ev.client_x() - swipe.start_x_read.get_untracked();
            dispatch(swipe, SwipeEvent::DragEnd(f64::from(dx)));
            end_drag(swipe);
        }
        // Not dragging - the click event will fire naturally on the element
    }
}

/// Create pointercancel handler (e.g. the browser took over for scrolling)
pub fn make_on_pointercancel(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        swipe.pending_write.set(None);
        if swipe.machine.with_untracked(|m| m.is_dragging()) {
            dispatch(swipe, SwipeEvent::DragCancel);
            end_drag(swipe);
        }
    }
}

/// Handle a click on the row body.
///
/// Runs `on_select` with `item` when the row is closed and the click is
/// not the tail of a drag. Returns whether it ran.
pub fn tap_body<T: 'static>(swipe: SwipeSignals, item: T, on_select: Option<Callback<T>>) -> bool {
    if swipe.drag_just_ended_read.get_untracked() {
        return false;
    }
    if dispatch(swipe, SwipeEvent::TapBody) != Some(RowAction::Select) {
        return false;
    }
    if let Some(on_select) = on_select {
        on_select.run(item);
    }
    true
}

/// Handle a click on the revealed delete action.
///
/// Shows the blocking confirmation with `message`, then finishes the
/// prompt with `finish_delete`. Ignored unless the row is open.
pub fn tap_delete<T: 'static>(swipe: SwipeSignals, message: &str, id: T, on_delete: Option<Callback<T>>) {
    if dispatch(swipe, SwipeEvent::TapDelete) != Some(RowAction::PromptDelete) {
        return;
    }
    finish_delete(swipe, confirm(message), id, on_delete);
}

/// Close the row after a delete prompt and, when `confirmed`, run
/// `on_delete` once with `id`. Returns whether the delete ran.
pub fn finish_delete<T: 'static>(
    swipe: SwipeSignals,
    confirmed: bool,
    id: T,
    on_delete: Option<Callback<T>>,
) -> bool {
    let event = if confirmed {
        SwipeEvent::DeleteConfirmed
    } else {
        SwipeEvent::DeleteCancelled
    };
    if dispatch(swipe, event) != Some(RowAction::Delete) {
        return false;
    }
    if let Some(on_delete) = on_delete {
        on_delete.run(id);
    }
    true
}

/// Blocking browser confirmation; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    /// Put the machine at rest `Open` without animating the drawn offset
    fn open_without_animation(swipe: SwipeSignals) {
        swipe.machine.update(|m| {
            m.handle(SwipeEvent::DragStart);
            m.handle(SwipeEvent::DragEnd(-120.0));
        });
    }

    fn recorder<T: Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let callback = Callback::new(move |value: T| sink.lock().unwrap().push(value));
        (callback, calls)
    }

    #[test]
    fn test_drag_move_writes_offset_live() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            dispatch(swipe, SwipeEvent::DragStart);
            dispatch(swipe, SwipeEvent::DragMove(-30.0));
            assert_eq!(swipe.offset_read.get_untracked(), -30.0);
            dispatch(swipe, SwipeEvent::DragMove(-140.0));
            assert_eq!(swipe.offset_read.get_untracked(), -140.0);
        });
    }

    #[test]
    fn test_move_without_drag_leaves_offset() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            dispatch(swipe, SwipeEvent::DragMove(-30.0));
            assert_eq!(swipe.offset_read.get_untracked(), 0.0);
        });
    }

    #[test]
    fn test_drag_continues_from_drawn_offset() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            // Mid-way through a settle toward Closed
            swipe.offset_write.set(-50.0);
            dispatch(swipe, SwipeEvent::DragStart);
            dispatch(swipe, SwipeEvent::DragMove(-10.0));
            assert_eq!(swipe.offset_read.get_untracked(), -60.0);
        });
    }

    #[test]
    fn test_drag_start_stops_animation() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            let before = swipe.animation.get_value();
            stop_animation(swipe);
            assert_eq!(swipe.animation.get_value(), before + 1);
            dispatch(swipe, SwipeEvent::DragStart);
            assert_eq!(swipe.animation.get_value(), before + 2);
            // A repeated start mid-drag changes nothing
            dispatch(swipe, SwipeEvent::DragStart);
            assert_eq!(swipe.animation.get_value(), before + 2);
        });
    }

    #[test]
    fn test_tap_closed_runs_select_with_item() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            let (on_select, calls) = recorder::<String>();
            assert!(tap_body(swipe, "row-7".to_string(), Some(on_select)));
            assert_eq!(*calls.lock().unwrap(), vec!["row-7".to_string()]);
            assert_eq!(swipe.offset_read.get_untracked(), 0.0);
        });
    }

    #[test]
    fn test_click_after_drag_is_suppressed() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            let (on_select, calls) = recorder::<String>();
            swipe.drag_just_ended_write.set(true);
            assert!(!tap_body(swipe, "row-7".to_string(), Some(on_select)));
            assert!(calls.lock().unwrap().is_empty());

            swipe.drag_just_ended_write.set(false);
            assert!(tap_body(swipe, "row-7".to_string(), Some(on_select)));
            assert_eq!(calls.lock().unwrap().len(), 1);
        });
    }

    #[test]
    fn test_tap_without_callback_is_noop() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            assert!(tap_body::<String>(swipe, "row-7".to_string(), None));
        });
    }

    #[test]
    fn test_confirmed_delete_runs_once_with_row_id() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            open_without_animation(swipe);
            let (on_delete, calls) = recorder::<String>();

            assert!(finish_delete(swipe, true, "row-3".to_string(), Some(on_delete)));
            assert_eq!(*calls.lock().unwrap(), vec!["row-3".to_string()]);
            assert_eq!(swipe.machine.with_untracked(|m| m.phase()), SwipePhase::Closed);
        });
    }

    #[test]
    fn test_cancelled_delete_closes_without_callback() {
        with_owner(|| {
            let swipe = create_swipe_signals(SwipeConfig::default());
            open_without_animation(swipe);
            let (on_delete, calls) = recorder::<String>();

            assert!(!finish_delete(swipe, false, "row-3".to_string(), Some(on_delete)));
            assert!(calls.lock().unwrap().is_empty());
            assert_eq!(swipe.machine.with_untracked(|m| m.phase()), SwipePhase::Closed);
        });
    }
}
