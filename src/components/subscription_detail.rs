//! Subscription Detail Screen
//!
//! Full record view with edit and delete.

use leptos::prelude::*;

use super::subscription_card::SubscriptionIcon;
use super::DeleteConfirmButton;
use crate::context::{use_app_context, Screen};
use crate::format::{countdown_label, cycle_suffix, format_amount, is_due_soon, payment_status, today};
use crate::models::Subscription;
use crate::queries::find_subscription;
use crate::store::{store_remove_subscription, use_app_store, AppStateStoreFields};

/// Label/value line in the details card
#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}

#[component]
fn SubscriptionDetailBody(subscription: Subscription) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = subscription.id.clone();
    let edit_id = subscription.id.clone();
    let amount = format_amount(subscription.amount, subscription.currency);
    let cycle = cycle_suffix(subscription.billing_cycle);
    let today = today();
    let countdown = countdown_label(&subscription.next_payment, today);
    let status = payment_status(&subscription.next_payment, today);
    let status_class = if is_due_soon(&subscription.next_payment, today) {
        "payment-status due-soon"
    } else {
        "payment-status scheduled"
    };
    let reminder = subscription
        .reminder_days
        .map(|d| format!("{} day(s) before", d))
        .unwrap_or_else(|| "Off".to_string());

    view! {
        <div class="detail-hero">
            <SubscriptionIcon subscription=subscription.clone() />
            <h2 class="detail-name">{subscription.name.clone()}</h2>
            <span class="detail-amount">{amount}<span class="sub-cycle">{cycle}</span></span>
        </div>

        <div class=status_class>
            <span class="payment-status-title">{status}</span>
            <span class="payment-status-countdown">{countdown.clone()}</span>
        </div>

        <div class="card">
            <DetailRow label="Next payment" value=format!("{} ({})", subscription.next_payment, countdown) />
            <DetailRow label="Billing cycle" value=subscription.billing_cycle.label().to_string() />
            <DetailRow label="Category" value=subscription.category.name().to_string() />
            <DetailRow
                label="Payment method"
                value=subscription.payment_method.clone().unwrap_or_else(|| "Not set".to_string())
            />
            <DetailRow label="Reminder" value=reminder />
        </div>

        {subscription.description.clone().map(|description| view! {
            <div class="card">
                <span class="detail-label">"Description"</span>
                <p class="detail-description">{description}</p>
            </div>
        })}

        <div class="detail-actions">
            <button class="primary-btn" on:click=move |_| ctx.navigate(Screen::Edit(edit_id.clone()))>
                "Edit"
            </button>
            <DeleteConfirmButton
                label="Delete"
                question=format!("Delete {}?", subscription.name)
                on_confirm=move |_: ()| {
                    store_remove_subscription(&store, &id);
                    ctx.back();
                }
            />
        </div>
    }
}

#[component]
pub fn SubscriptionDetail(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let subscription = Memo::new(move |_| find_subscription(&store.subscriptions().read(), &id).cloned());

    view! {
        <div class="screen-header">
            <button class="icon-btn" on:click=move |_| ctx.back()>"‹"</button>
            <h1 class="screen-title">"Details"</h1>
            <span class="icon-btn-placeholder"></span>
        </div>

        {move || match subscription.get() {
            Some(sub) => view! { <SubscriptionDetailBody subscription=sub /> }.into_any(),
            None => view! {
                <div class="error-container">
                    <p class="error-text">"Subscription not found"</p>
                    <button class="primary-btn" on:click=move |_| ctx.back()>"Go Back"</button>
                </div>
            }.into_any(),
        }}
    }
}
