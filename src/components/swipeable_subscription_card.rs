//! Swipeable Subscription Card Component
//!
//! Subscription row that reveals a delete action when dragged left.

use leptos::prelude::*;
use leptos_swipe::{
    create_swipe_signals, make_on_pointercancel, make_on_pointerdown, make_on_pointermove,
    make_on_pointerup, tap_body, tap_delete, use_swipe_config,
};

use super::SubscriptionCard;
use crate::models::Subscription;

/// Swipe-to-delete wrapper around `SubscriptionCard`
///
/// # Arguments
/// * `on_select` - Called with the subscription on a plain tap while closed
/// * `on_delete` - Called with the subscription id after the user confirms
#[component]
pub fn SwipeableSubscriptionCard(
    subscription: Subscription,
    #[prop(optional)] on_select: Option<Callback<Subscription>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let swipe = create_swipe_signals(use_swipe_config());
    let action_width = swipe.machine.with_untracked(|m| m.config().action_width);

    let id = subscription.id.clone();
    let prompt = format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        subscription.name
    );
    let selected = subscription.clone();

    let on_body_click = move |_: web_sys::MouseEvent| {
        tap_body(swipe, selected.clone(), on_select);
    };

    let on_delete_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        tap_delete(swipe, &prompt, id.clone(), on_delete);
    };

    view! {
        <div class="swipe-row">
            // Delete action, revealed under the card
            <div class="swipe-action" style=format!("width: {}px;", action_width)>
                <button class="swipe-delete-btn" on:click=on_delete_click>
                    <span class="swipe-delete-icon">"🗑"</span>
                    <span class="swipe-delete-text">"Delete"</span>
                </button>
            </div>

            <div
                class=move || {
                    if swipe.machine.with(|m| m.is_dragging()) { "swipe-body dragging" } else { "swipe-body" }
                }
                style=move || format!("transform: translateX({}px);", swipe.offset_read.get())
                on:pointerdown=make_on_pointerdown(swipe)
                on:pointermove=make_on_pointermove(swipe)
                on:pointerup=make_on_pointerup(swipe)
                on:pointercancel=make_on_pointercancel(swipe)
                on:click=on_body_click
            >
                <SubscriptionCard subscription=subscription />
            </div>
        </div>
    }
}
