//! Subscription Card Component
//!
//! Static row renderer for one subscription.

use leptos::prelude::*;

use crate::format::{countdown_label, cycle_suffix, format_amount, today};
use crate::models::Subscription;

/// Icon badge: image URL, or a letter/emoji on the brand color
#[component]
pub fn SubscriptionIcon(subscription: Subscription) -> impl IntoView {
    let style = format!("background-color: {};", subscription.color);
    if subscription.icon_is_image() {
        view! { <img class="sub-icon-image" src=subscription.icon.clone() style=style /> }.into_any()
    } else {
        view! { <div class="sub-icon" style=style>{subscription.icon.clone()}</div> }.into_any()
    }
}

/// A single subscription row
#[component]
pub fn SubscriptionCard(subscription: Subscription) -> impl IntoView {
    let amount = format_amount(subscription.amount, subscription.currency);
    let cycle = cycle_suffix(subscription.billing_cycle);
    let due = format!(
        "{} • {}",
        subscription.next_payment,
        countdown_label(&subscription.next_payment, today())
    );
    let name = subscription.name.clone();

    view! {
        <div class="sub-card">
            <SubscriptionIcon subscription=subscription />
            <div class="sub-card-content">
                <div class="sub-card-header">
                    <span class="sub-name">{name}</span>
                    <span class="sub-amount">
                        {amount}
                        <span class="sub-cycle">{cycle}</span>
                    </span>
                </div>
                <span class="sub-next-payment">{due}</span>
            </div>
        </div>
    }
}
