//! Spending Insights
//!
//! Totals, category breakdown and chart geometry, all in Naira.

use std::collections::HashMap;

use crate::models::{BillingCycle, Category, Currency, ExpenseCategory, Subscription};

/// Period amounts are normalized to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Monthly, Period::Yearly];

    pub fn label(self) -> &'static str {
        match self {
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }
}

/// Raw charge converted to Naira
pub fn to_naira(sub: &Subscription, usd_to_naira: f64) -> f64 {
    match sub.currency {
        Currency::Naira => sub.amount,
        Currency::Dollar => sub.amount * usd_to_naira,
    }
}

/// Cost of `sub` over one `period`, in Naira
pub fn period_amount(sub: &Subscription, period: Period, usd_to_naira: f64) -> f64 {
    let charge = to_naira(sub, usd_to_naira);
    match (sub.billing_cycle, period) {
        (BillingCycle::Monthly, Period::Monthly) | (BillingCycle::Yearly, Period::Yearly) => charge,
        (BillingCycle::Yearly, Period::Monthly) => charge / 12.0,
        (BillingCycle::Monthly, Period::Yearly) => charge * 12.0,
    }
}

pub fn total(subs: &[Subscription], period: Period, usd_to_naira: f64) -> f64 {
    subs.iter().map(|s| period_amount(s, period, usd_to_naira)).sum()
}

/// Spending per category, largest first. Empty categories are left out.
pub fn category_breakdown(subs: &[Subscription], period: Period, usd_to_naira: f64) -> Vec<ExpenseCategory> {
    let mut sums: HashMap<Category, f64> = HashMap::new();
    for sub in subs {
        *sums.entry(sub.category).or_default() += period_amount(sub, period, usd_to_naira);
    }
    let grand_total: f64 = sums.values().sum();

    let mut breakdown: Vec<ExpenseCategory> = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let amount = *sums.get(&category)?;
            Some(ExpenseCategory {
                category,
                amount,
                color: category.color(),
                percentage: if grand_total > 0.0 { amount / grand_total * 100.0 } else { 0.0 },
            })
        })
        .collect();
    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown
}

/// The `n` most expensive subscriptions with their period cost
pub fn top_subscriptions(
    subs: &[Subscription],
    n: usize,
    period: Period,
    usd_to_naira: f64,
) -> Vec<(Subscription, f64)> {
    let mut ranked: Vec<(Subscription, f64)> = subs
        .iter()
        .map(|s| (s.clone(), period_amount(s, period, usd_to_naira)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// One donut arc drawn as a dashed circle stroke
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub color: &'static str,
    /// `stroke-dasharray` value
    pub dash_array: String,
    /// `stroke-dashoffset` value
    pub dash_offset: f64,
}

/// Donut segments for a circle of `radius`, starting at 12 o'clock
pub fn chart_segments(categories: &[ExpenseCategory], radius: f64) -> Vec<ChartSegment> {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let total: f64 = categories.iter().map(|c| c.amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut accumulated = 0.0;
    categories
        .iter()
        .map(|c| {
            let fraction = c.amount / total;
            let segment = ChartSegment {
                color: c.color,
                dash_array: format!("{:.2} {:.2}", fraction * circumference, circumference),
                dash_offset: -accumulated * circumference,
            };
            accumulated += fraction;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: &str, amount: f64, currency: Currency, cycle: BillingCycle, category: Category) -> Subscription {
        Subscription {
            id: id.to_string(),
            name: format!("Sub {}", id),
            icon: "S".to_string(),
            color: "#000000".to_string(),
            amount,
            currency,
            billing_cycle: cycle,
            next_payment: "2026-11-01".to_string(),
            category,
            description: None,
            payment_method: None,
            reminder_days: None,
        }
    }

    fn sample() -> Vec<Subscription> {
        vec![
            sub("1", 4400.0, Currency::Naira, BillingCycle::Monthly, Category::Entertainment),
            sub("2", 10.0, Currency::Dollar, BillingCycle::Monthly, Category::Productivity),
            sub("3", 120.0, Currency::Dollar, BillingCycle::Yearly, Category::Health),
            sub("4", 1600.0, Currency::Naira, BillingCycle::Monthly, Category::Entertainment),
        ]
    }

    #[test]
    fn test_period_amount() {
        let subs = sample();
        assert_eq!(period_amount(&subs[0], Period::Monthly, 415.0), 4400.0);
        assert_eq!(period_amount(&subs[0], Period::Yearly, 415.0), 52800.0);
        assert_eq!(period_amount(&subs[1], Period::Monthly, 415.0), 4150.0);
        assert_eq!(period_amount(&subs[2], Period::Monthly, 415.0), 4150.0);
        assert_eq!(period_amount(&subs[2], Period::Yearly, 415.0), 49800.0);
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&sample(), Period::Monthly, 415.0), 4400.0 + 4150.0 + 4150.0 + 1600.0);
        assert_eq!(total(&[], Period::Yearly, 415.0), 0.0);
    }

    #[test]
    fn test_category_breakdown() {
        let breakdown = category_breakdown(&sample(), Period::Monthly, 415.0);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].category, Category::Entertainment);
        assert_eq!(breakdown[0].amount, 6000.0);
        assert_eq!(breakdown[0].color, Category::Entertainment.color());

        let sum: f64 = breakdown.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_rows_rekey_on_period_change() {
        let monthly = category_breakdown(&sample(), Period::Monthly, 415.0);
        let yearly = category_breakdown(&sample(), Period::Yearly, 415.0);
        assert_eq!(monthly.len(), yearly.len());
        for (m, y) in monthly.iter().zip(&yearly) {
            assert_eq!(m.category, y.category);
            assert_eq!(y.amount, m.amount * 12.0);
            assert_ne!(m.row_key(), y.row_key());
        }
        // Same data keeps its rows
        let again = category_breakdown(&sample(), Period::Monthly, 415.0);
        assert!(monthly.iter().zip(&again).all(|(a, b)| a.row_key() == b.row_key()));
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert!(category_breakdown(&[], Period::Monthly, 415.0).is_empty());
    }

    #[test]
    fn test_top_subscriptions() {
        let top = top_subscriptions(&sample(), 3, Period::Monthly, 415.0);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0.id, "1");
        assert!(top.iter().all(|(s, _)| s.id != "4"));
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_chart_segments_cover_circle() {
        let breakdown = category_breakdown(&sample(), Period::Monthly, 415.0);
        let radius = 50.0;
        let circumference = 2.0 * std::f64::consts::PI * radius;
        let segments = chart_segments(&breakdown, radius);

        assert_eq!(segments.len(), breakdown.len());
        assert_eq!(segments[0].dash_offset, 0.0);
        // Each segment starts where the previous one ended
        let first_len = breakdown[0].amount / 14300.0 * circumference;
        assert!((segments[1].dash_offset + first_len).abs() < 1e-9);
    }

    #[test]
    fn test_chart_segments_empty_total() {
        assert!(chart_segments(&[], 50.0).is_empty());
    }
}
