//! Subscription List Screen
//!
//! Search, category filter, monthly summary and swipeable rows.

use leptos::prelude::*;

use super::SwipeableSubscriptionCard;
use crate::context::{use_app_context, Screen};
use crate::format::{format_naira, today};
use crate::insights::{total, Period};
use crate::models::{Category, Subscription};
use crate::queries::{due_soon_count, filter_subscriptions};
use crate::store::{store_remove_subscription, use_app_store, AppStateStoreFields};

/// Category filter chips ("All" plus each category)
#[component]
fn CategoryChips(
    selected: ReadSignal<Option<Category>>,
    set_selected: WriteSignal<Option<Category>>,
) -> impl IntoView {
    let chips = std::iter::once(None).chain(Category::ALL.into_iter().map(Some));

    view! {
        <div class="category-chips">
            {chips.map(|chip| {
                let label = chip.map_or("All", |c| c.name());
                view! {
                    <button
                        class=move || if selected.get() == chip { "chip active" } else { "chip" }
                        on:click=move |_| set_selected.set(chip)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn SubscriptionList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let usd_to_naira = ctx.config.usd_to_naira;

    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(None::<Category>);

    let filtered = Memo::new(move |_| {
        filter_subscriptions(&store.subscriptions().read(), &query.get(), category.get())
    });
    let monthly_total = Memo::new(move |_| {
        total(&store.subscriptions().read(), Period::Monthly, usd_to_naira)
    });
    let due_soon = Memo::new(move |_| filtered.with(|f| due_soon_count(f, today())));

    let on_select = Callback::new(move |sub: Subscription| {
        ctx.navigate(Screen::Detail(sub.id));
    });
    let on_delete = Callback::new(move |id: String| {
        store_remove_subscription(&store, &id);
    });

    view! {
        <div class="screen-header">
            <h1 class="screen-title">"All subscriptions"</h1>
            <button class="icon-btn" on:click=move |_| ctx.navigate(Screen::Add)>"+"</button>
        </div>

        <input
            class="search-input"
            type="search"
            placeholder="Search subscriptions"
            prop:value=move || query.get()
            on:input=move |ev| set_query.set(event_target_value(&ev))
        />

        <CategoryChips selected=category set_selected=set_category />

        <div class="summary-card">
            <span class="summary-label">"Monthly Total"</span>
            <span class="summary-amount">{move || format_naira(monthly_total.get())}</span>
            <span class="summary-subtext">
                {move || format!("{} active subscriptions", filtered.with(|f| f.len()))}
            </span>
            <span class="summary-subtext due-soon">
                {move || format!("{} due soon", due_soon.get())}
            </span>
        </div>

        <div class="subscription-list">
            <For
                each=move || filtered.get()
                key=|sub| sub.id.clone()
                children=move |sub| {
                    view! {
                        <SwipeableSubscriptionCard
                            subscription=sub
                            on_select=on_select
                            on_delete=on_delete
                        />
                    }
                }
            />
            <Show when=move || filtered.with(|f| f.is_empty())>
                <p class="empty-state">"No subscriptions found"</p>
            </Show>
        </div>
    }
}
