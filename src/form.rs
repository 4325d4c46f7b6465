//! Subscription Form
//!
//! Editable draft of a subscription and its validation.

use crate::format::parse_date;
use crate::models::{BillingCycle, Category, Currency, Subscription};

/// Palette offered by the form
pub const COLORS: &[&str] = &[
    "#8B5CF6", "#E50914", "#FFCB0B", "#0056D3", "#06B6D4", "#10B981", "#F59E0B", "#EF4444",
];

/// Form fields as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub amount: String,
    pub currency: Currency,
    pub billing_cycle: BillingCycle,
    pub next_payment: String,
    pub category: Category,
    pub description: String,
    pub payment_method: String,
    pub reminder_days: String,
}

impl Default for SubscriptionDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: String::new(),
            color: COLORS[0].to_string(),
            amount: String::new(),
            currency: Currency::Naira,
            billing_cycle: BillingCycle::Monthly,
            next_payment: String::new(),
            category: Category::Entertainment,
            description: String::new(),
            payment_method: String::new(),
            reminder_days: "1".to_string(),
        }
    }
}

/// Field names for targeted error clearing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Icon,
    Amount,
    NextPayment,
    ReminderDays,
}

/// One optional message per validated field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub amount: Option<String>,
    pub next_payment: Option<String>,
    pub reminder_days: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.icon.is_none()
            && self.amount.is_none()
            && self.next_payment.is_none()
            && self.reminder_days.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Icon => self.icon.as_deref(),
            Field::Amount => self.amount.as_deref(),
            Field::NextPayment => self.next_payment.as_deref(),
            Field::ReminderDays => self.reminder_days.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Icon => self.icon = None,
            Field::Amount => self.amount = None,
            Field::NextPayment => self.next_payment = None,
            Field::ReminderDays => self.reminder_days = None,
        }
    }
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SubscriptionDraft {
    /// Draft pre-filled from an existing subscription (edit mode)
    pub fn from_subscription(sub: &Subscription) -> Self {
        Self {
            name: sub.name.clone(),
            icon: sub.icon.clone(),
            color: sub.color.clone(),
            amount: sub.amount.to_string(),
            currency: sub.currency,
            billing_cycle: sub.billing_cycle,
            next_payment: sub.next_payment.clone(),
            category: sub.category,
            description: sub.description.clone().unwrap_or_default(),
            payment_method: sub.payment_method.clone().unwrap_or_default(),
            reminder_days: sub.reminder_days.map(|d| d.to_string()).unwrap_or_default(),
        }
    }

    /// Validate and build a subscription with the given id
    pub fn validate(&self, id: String) -> Result<Subscription, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Service name is required".to_string());
        }

        let icon = self.icon.trim();
        if icon.is_empty() {
            errors.icon = Some("Icon is required (enter a letter or emoji)".to_string());
        }

        let amount = self.amount.trim();
        let parsed_amount = amount.parse::<f64>().ok().filter(|a| a.is_finite() && *a > 0.0);
        if amount.is_empty() {
            errors.amount = Some("Amount is required".to_string());
        } else if parsed_amount.is_none() {
            errors.amount = Some("Please enter a valid amount".to_string());
        }

        let next_payment = self.next_payment.trim();
        if next_payment.is_empty() {
            errors.next_payment = Some("Next payment date is required".to_string());
        } else if parse_date(next_payment).is_none() {
            errors.next_payment = Some("Use the format YYYY-MM-DD".to_string());
        }

        let reminder_days = match optional(&self.reminder_days) {
            None => None,
            Some(days) => match days.parse::<u32>() {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.reminder_days = Some("Reminder must be a whole number of days".to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Subscription {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            color: self.color.clone(),
            amount: parsed_amount.unwrap_or_default(),
            currency: self.currency,
            billing_cycle: self.billing_cycle,
            next_payment: next_payment.to_string(),
            category: self.category,
            description: optional(&self.description),
            payment_method: optional(&self.payment_method),
            reminder_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubscriptionDraft {
        SubscriptionDraft {
            name: " Disney+ ".to_string(),
            icon: "D".to_string(),
            amount: "2500".to_string(),
            next_payment: "2026-12-01".to_string(),
            ..SubscriptionDraft::default()
        }
    }

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let errors = SubscriptionDraft::default().validate("1".to_string()).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Service name is required"));
        assert_eq!(errors.get(Field::Amount), Some("Amount is required"));
        assert_eq!(errors.get(Field::NextPayment), Some("Next payment date is required"));
        assert!(errors.icon.is_some());
        assert!(errors.reminder_days.is_none());
    }

    #[test]
    fn test_invalid_amounts() {
        for amount in ["abc", "0", "-5", "NaN", "inf"] {
            let draft = SubscriptionDraft { amount: amount.to_string(), ..filled() };
            let errors = draft.validate("1".to_string()).unwrap_err();
            assert_eq!(errors.get(Field::Amount), Some("Please enter a valid amount"), "amount {}", amount);
        }
    }

    #[test]
    fn test_invalid_date_and_reminder() {
        let draft = SubscriptionDraft {
            next_payment: "01/12/2026".to_string(),
            reminder_days: "soon".to_string(),
            ..filled()
        };
        let errors = draft.validate("1".to_string()).unwrap_err();
        assert!(errors.next_payment.is_some());
        assert!(errors.reminder_days.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_valid_draft_builds_trimmed_subscription() {
        let sub = filled().validate("9".to_string()).unwrap();
        assert_eq!(sub.id, "9");
        assert_eq!(sub.name, "Disney+");
        assert_eq!(sub.amount, 2500.0);
        assert_eq!(sub.reminder_days, Some(1));
        assert_eq!(sub.description, None);
        assert_eq!(sub.color, COLORS[0]);
    }

    #[test]
    fn test_edit_round_trip_keeps_record() {
        let original = filled().validate("4".to_string()).unwrap();
        let draft = SubscriptionDraft::from_subscription(&original);
        assert_eq!(draft.validate("4".to_string()).unwrap(), original);
    }

    #[test]
    fn test_clear_single_error() {
        let mut errors = SubscriptionDraft::default().validate("1".to_string()).unwrap_err();
        errors.clear(Field::Name);
        assert!(errors.name.is_none());
        assert!(errors.amount.is_some());
        assert!(!errors.is_empty());
    }
}
