//! Frontend Models
//!
//! Subscription records and the values derived from them.

use serde::{Deserialize, Serialize};

/// Currency a subscription is billed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "₦")]
    Naira,
    #[serde(rename = "$")]
    Dollar,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Naira, Currency::Dollar];

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Naira => "₦",
            Currency::Dollar => "$",
        }
    }
}

/// How often a subscription is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Yearly];

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Entertainment,
    Productivity,
    Health,
    Education,
    Social,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Entertainment,
        Category::Productivity,
        Category::Health,
        Category::Education,
        Category::Social,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::Productivity => "Productivity",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Social => "Social",
            Category::Other => "Other",
        }
    }

    /// Chart / chip color
    pub fn color(self) -> &'static str {
        match self {
            Category::Entertainment => "#E50914",
            Category::Productivity => "#8B5CF6",
            Category::Health => "#06B6D4",
            Category::Education => "#0056D3",
            Category::Social => "#FFCB0B",
            Category::Other => "#6B7280",
        }
    }
}

/// Subscription data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// A letter, an emoji or an image URL
    pub icon: String,
    pub color: String,
    pub amount: f64,
    pub currency: Currency,
    pub billing_cycle: BillingCycle,
    /// YYYY-MM-DD
    pub next_payment: String,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub reminder_days: Option<u32>,
}

impl Subscription {
    pub fn icon_is_image(&self) -> bool {
        self.icon.starts_with("http")
    }
}

/// Spending in one category over the selected period
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCategory {
    pub category: Category,
    /// In Naira
    pub amount: f64,
    pub color: &'static str,
    pub percentage: f64,
}

impl ExpenseCategory {
    /// List key for a rendered row; changes whenever the shown numbers do
    pub fn row_key(&self) -> (Category, u64, u64) {
        (self.category, self.amount.to_bits(), self.percentage.to_bits())
    }
}
