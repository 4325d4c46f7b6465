//! Application Context
//!
//! Navigation and configuration shared via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Screens of the app
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Subscriptions,
    Insights,
    Detail(String),
    Add,
    Edit(String),
}

impl Screen {
    /// Bottom navigation tab this screen belongs to
    pub fn tab(&self) -> Screen {
        match self {
            Screen::Insights => Screen::Insights,
            _ => Screen::Subscriptions,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
    /// Screens to return to
    history: StoredValue<Vec<Screen>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>), config: AppConfig) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            history: StoredValue::new(Vec::new()),
            config,
        }
    }

    /// Push a screen
    pub fn navigate(&self, to: Screen) {
        let from = self.screen.get_untracked();
        if from == to {
            return;
        }
        log::debug!("[NAV] {:?} -> {:?}", from, to);
        self.history.update_value(|h| h.push(from));
        self.set_screen.set(to);
    }

    /// Switch tab, dropping history
    pub fn switch_tab(&self, tab: Screen) {
        self.history.update_value(|h| h.clear());
        self.set_screen.set(tab);
    }

    /// Pop back to the previous screen (the list when there is none)
    pub fn back(&self) {
        let mut previous = None;
        self.history.update_value(|h| previous = h.pop());
        self.set_screen.set(previous.unwrap_or(Screen::Subscriptions));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
