//! Subscription Form Screen
//!
//! Add a new subscription or edit an existing one.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::{Field, FormErrors, SubscriptionDraft, COLORS};
use crate::models::{BillingCycle, Category, Currency};
use crate::queries::{find_subscription, next_id};
use crate::store::{store_add_subscription, store_update_subscription, use_app_store, AppStateStoreFields};

/// Labelled text input bound to one draft field
fn text_field(
    label: &'static str,
    placeholder: &'static str,
    draft: RwSignal<SubscriptionDraft>,
    errors: RwSignal<FormErrors>,
    get: fn(&SubscriptionDraft) -> String,
    set: fn(&mut SubscriptionDraft, String),
    field: Option<Field>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                    if let Some(field) = field {
                        errors.update(|e| e.clear(field));
                    }
                }
            />
            {move || {
                field
                    .and_then(|f| errors.with(|e| e.get(f).map(str::to_string)))
                    .map(|message| view! { <span class="form-error">{message}</span> })
            }}
        </label>
    }
}

/// Row of toggle buttons, one per option
fn choice_row<T>(
    label: &'static str,
    options: Vec<(T, String)>,
    draft: RwSignal<SubscriptionDraft>,
    get: fn(&SubscriptionDraft) -> T,
    set: fn(&mut SubscriptionDraft, T),
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="form-field">
            <span class="form-label">{label}</span>
            <div class="type-selector-row">
                {options.into_iter().map(|(value, text)| {
                    view! {
                        <button
                            type="button"
                            class=move || if draft.with(get) == value { "type-btn small active" } else { "type-btn small" }
                            on:click=move |_| draft.update(|d| set(d, value))
                        >
                            {text}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Color swatches from the palette
fn color_row(draft: RwSignal<SubscriptionDraft>) -> impl IntoView {
    view! {
        <div class="form-field">
            <span class="form-label">"Color"</span>
            <div class="color-row">
                {COLORS.iter().map(|color| {
                    let color = *color;
                    view! {
                        <button
                            type="button"
                            class=move || if draft.with(|d| d.color == color) { "color-swatch active" } else { "color-swatch" }
                            style=format!("background-color: {};", color)
                            on:click=move |_| draft.update(|d| d.color = color.to_string())
                        ></button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Add (no `edit_id`) or edit form
#[component]
pub fn SubscriptionForm(#[prop(optional)] edit_id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = match &edit_id {
        Some(id) => match find_subscription(&store.subscriptions().read_untracked(), id) {
            Some(sub) => SubscriptionDraft::from_subscription(sub),
            None => {
                log::warn!("[FORM] Subscription {} not found, starting empty", id);
                SubscriptionDraft::default()
            }
        },
        None => SubscriptionDraft::default(),
    };
    let title = if edit_id.is_some() { "Edit Subscription" } else { "Add Subscription" };

    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(FormErrors::default());
    let edit_id = StoredValue::new(edit_id);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let editing = edit_id.get_value();
        let id = editing
            .clone()
            .unwrap_or_else(|| next_id(&store.subscriptions().read_untracked()));

        match draft.with_untracked(|d| d.validate(id)) {
            Ok(sub) => {
                if editing.is_some() {
                    store_update_subscription(&store, sub);
                } else {
                    store_add_subscription(&store, sub);
                }
                ctx.back();
            }
            Err(e) => {
                log::debug!("[FORM] Validation failed: {:?}", e);
                errors.set(e);
            }
        }
    };

    let currencies: Vec<_> = Currency::ALL.into_iter().map(|c| (c, c.symbol().to_string())).collect();
    let cycles: Vec<_> = BillingCycle::ALL.into_iter().map(|c| (c, c.label().to_string())).collect();
    let categories: Vec<_> = Category::ALL.into_iter().map(|c| (c, c.name().to_string())).collect();

    view! {
        <div class="screen-header">
            <button class="icon-btn" on:click=move |_| ctx.back()>"‹"</button>
            <h1 class="screen-title">{title}</h1>
            <span class="icon-btn-placeholder"></span>
        </div>

        <form class="subscription-form" on:submit=on_save>
            {text_field("Service name", "e.g. Netflix", draft, errors,
                |d| d.name.clone(), |d, v| d.name = v, Some(Field::Name))}
            {text_field("Icon", "A letter, emoji or image URL", draft, errors,
                |d| d.icon.clone(), |d, v| d.icon = v, Some(Field::Icon))}
            {color_row(draft)}
            {text_field("Amount", "0.00", draft, errors,
                |d| d.amount.clone(), |d, v| d.amount = v, Some(Field::Amount))}
            {choice_row("Currency", currencies, draft, |d| d.currency, |d, v| d.currency = v)}
            {choice_row("Billing cycle", cycles, draft, |d| d.billing_cycle, |d, v| d.billing_cycle = v)}
            {text_field("Next payment", "YYYY-MM-DD", draft, errors,
                |d| d.next_payment.clone(), |d, v| d.next_payment = v, Some(Field::NextPayment))}
            {choice_row("Category", categories, draft, |d| d.category, |d, v| d.category = v)}
            {text_field("Description", "Optional", draft, errors,
                |d| d.description.clone(), |d, v| d.description = v, None)}
            {text_field("Payment method", "e.g. Visa •••• 4242", draft, errors,
                |d| d.payment_method.clone(), |d, v| d.payment_method = v, None)}
            {text_field("Reminder (days before)", "1", draft, errors,
                |d| d.reminder_days.clone(), |d, v| d.reminder_days = v, Some(Field::ReminderDays))}

            <Show when=move || !errors.with(|e| e.is_empty())>
                <p class="form-error">"Please fill in all required fields correctly."</p>
            </Show>

            <button type="submit" class="primary-btn">"Save"</button>
        </form>
    }
}
