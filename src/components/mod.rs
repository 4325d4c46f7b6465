//! UI Components
//!
//! Screens and reusable Leptos components.

mod bottom_nav;
mod delete_confirm_button;
mod expense_chart;
mod insights_view;
mod subscription_card;
mod subscription_detail;
mod subscription_form;
mod subscription_list;
mod swipeable_subscription_card;

pub use bottom_nav::BottomNav;
pub use delete_confirm_button::DeleteConfirmButton;
pub use expense_chart::ExpenseChart;
pub use insights_view::InsightsView;
pub use subscription_card::SubscriptionCard;
pub use subscription_detail::SubscriptionDetail;
pub use subscription_form::SubscriptionForm;
pub use subscription_list::SubscriptionList;
pub use swipeable_subscription_card::SwipeableSubscriptionCard;
