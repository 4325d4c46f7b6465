//! Bottom Navigation Component
//!
//! Tab bar for the mobile layout.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

const TABS: &[(&str, &str)] = &[("📋", "Subscriptions"), ("📊", "Insights")];

#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="mobile-bottom-nav">
            {TABS.iter().map(|(icon, label)| {
                let tab = if *label == "Insights" { Screen::Insights } else { Screen::Subscriptions };
                let target = tab.clone();
                view! {
                    <button
                        class=move || if ctx.screen.get().tab() == tab { "mobile-nav-item active" } else { "mobile-nav-item" }
                        on:click=move |_| ctx.switch_tab(target.clone())
                    >
                        <div class="mobile-nav-icon">{*icon}</div>
                        <div class="mobile-nav-label">{*label}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
