//! SubTrack Frontend App
//!
//! Mobile layout: one screen at a time above a bottom tab bar.

use leptos::prelude::*;
use leptos_swipe::provide_swipe_config;
use reactive_stores::Store;

use crate::components::{BottomNav, InsightsView, SubscriptionDetail, SubscriptionForm, SubscriptionList};
use crate::config::AppConfig;
use crate::context::{AppContext, Screen};
use crate::fixtures;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    let subscriptions = match fixtures::load_subscriptions() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("[APP] Failed to load subscriptions: {}", e);
            Vec::new()
        }
    };
    log::info!("[APP] Loaded {} subscriptions", subscriptions.len());

    // Provide state to all children
    provide_context(Store::new(AppState::new(subscriptions)));
    let ctx = AppContext::new(signal(Screen::Subscriptions), config);
    provide_context(ctx);
    provide_swipe_config(config.swipe);

    view! {
        <div class="mobile-app-container">
            // Main content area
            <main class="screen">
                {move || match ctx.screen.get() {
                    Screen::Subscriptions => view! { <SubscriptionList /> }.into_any(),
                    Screen::Insights => view! { <InsightsView /> }.into_any(),
                    Screen::Detail(id) => view! { <SubscriptionDetail id=id /> }.into_any(),
                    Screen::Add => view! { <SubscriptionForm /> }.into_any(),
                    Screen::Edit(id) => view! { <SubscriptionForm edit_id=id /> }.into_any(),
                }}
            </main>

            // Bottom navigation
            <BottomNav />
        </div>
    }
}
