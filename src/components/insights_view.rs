//! Insights Screen
//!
//! Period toggle, donut chart, category breakdown and top subscriptions.

use leptos::prelude::*;

use super::subscription_card::SubscriptionIcon;
use super::ExpenseChart;
use crate::context::use_app_context;
use crate::format::format_naira;
use crate::insights::{category_breakdown, top_subscriptions, total, Period};
use crate::store::{use_app_store, AppStateStoreFields};

const TOP_COUNT: usize = 3;

#[component]
pub fn InsightsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let usd_to_naira = ctx.config.usd_to_naira;

    let (period, set_period) = signal(Period::Monthly);

    let breakdown = Memo::new(move |_| {
        category_breakdown(&store.subscriptions().read(), period.get(), usd_to_naira)
    });
    let total_amount = Memo::new(move |_| {
        total(&store.subscriptions().read(), period.get(), usd_to_naira)
    });
    let top = Memo::new(move |_| {
        top_subscriptions(&store.subscriptions().read(), TOP_COUNT, period.get(), usd_to_naira)
    });

    view! {
        <div class="screen-header">
            <h1 class="screen-title">"Insights"</h1>
        </div>

        <div class="period-selector">
            {Period::ALL.into_iter().map(|p| view! {
                <button
                    class=move || if period.get() == p { "period-btn active" } else { "period-btn" }
                    on:click=move |_| set_period.set(p)
                >
                    {p.label()}
                </button>
            }).collect_view()}
        </div>

        <div class="card chart-card">
            <ExpenseChart categories=breakdown total_amount=total_amount />
        </div>

        <div class="card">
            <h3 class="card-title">"Categories"</h3>
            <Show
                when=move || breakdown.with(|b| !b.is_empty())
                fallback=|| view! { <p class="empty-state">"No spending yet"</p> }
            >
                <For
                    each=move || breakdown.get()
                    key=|c| c.row_key()
                    children=move |c| view! {
                        <div class="category-row">
                            <span class="category-swatch" style=format!("background-color: {};", c.color)></span>
                            <span class="category-name">{c.category.name()}</span>
                            <span class="category-amount">{format_naira(c.amount)}</span>
                            <span class="category-percentage">{format!("{:.1}%", c.percentage)}</span>
                        </div>
                    }
                />
            </Show>
        </div>

        <div class="card">
            <h3 class="card-title">"Top Subscriptions"</h3>
            {move || top.get().into_iter().enumerate().map(|(rank, (sub, amount))| view! {
                <div class="top-row">
                    <span class="rank-number">{rank + 1}</span>
                    <SubscriptionIcon subscription=sub.clone() />
                    <span class="top-name">{sub.name.clone()}</span>
                    <span class="top-amount">{format_naira(amount)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
