//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Subscription;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All subscriptions, in display order
    pub subscriptions: Vec<Subscription>,
}

impl AppState {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self { subscriptions }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new subscription
pub fn store_add_subscription(store: &AppStore, subscription: Subscription) {
    log::info!("[STORE] Added subscription {}", subscription.id);
    store.subscriptions().write().push(subscription);
}

/// Replace a subscription by ID
pub fn store_update_subscription(store: &AppStore, updated: Subscription) {
    store.subscriptions().write().iter_mut()
        .find(|sub| sub.id == updated.id)
        .map(|sub| *sub = updated);
}

/// Remove a subscription by ID. Unknown ids are ignored.
pub fn store_remove_subscription(store: &AppStore, id: &str) {
    log::info!("[STORE] Removed subscription {}", id);
    store.subscriptions().write().retain(|sub| sub.id != id);
}
