//! Display Formatting
//!
//! Amounts, billing cycles and payment countdowns.

use chrono::NaiveDate;

use crate::models::{BillingCycle, Currency};

/// Date format used by `Subscription::next_payment`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A payment this many days away or closer (or overdue) is due soon
pub const DUE_SOON_DAYS: i64 = 7;

/// Up to two decimals, trailing zeros dropped
fn plain_number(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Insert thousands separators into the integer part
fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Symbol after any minus sign: `-₦1,500`
fn with_symbol(symbol: &str, number: String) -> String {
    match number.strip_prefix('-') {
        Some(digits) => format!("-{}{}", symbol, digits),
        None => format!("{}{}", symbol, number),
    }
}

/// `₦12,500` or `$9.99`
pub fn format_amount(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Naira => with_symbol("₦", group_thousands(&plain_number(amount))),
        Currency::Dollar => with_symbol("$", plain_number(amount)),
    }
}

/// Naira total with grouping, rounded to whole units
pub fn format_naira(amount: f64) -> String {
    let whole = amount.round();
    // No "-0" for small negatives
    let whole = if whole == 0.0 { 0.0 } else { whole };
    with_symbol("₦", group_thousands(&format!("{:.0}", whole)))
}

pub fn cycle_suffix(cycle: BillingCycle) -> &'static str {
    match cycle {
        BillingCycle::Monthly => "/month",
        BillingCycle::Yearly => "/year",
    }
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Whole days from `today` until `next_payment`; negative when overdue
pub fn days_until(next_payment: &str, today: NaiveDate) -> Option<i64> {
    parse_date(next_payment).map(|date| (date - today).num_days())
}

/// Payment within `DUE_SOON_DAYS` or already overdue; `false` on an unparsable date
pub fn is_due_soon(next_payment: &str, today: NaiveDate) -> bool {
    days_until(next_payment, today).is_some_and(|d| d <= DUE_SOON_DAYS)
}

/// Detail screen status line
pub fn payment_status(next_payment: &str, today: NaiveDate) -> &'static str {
    if is_due_soon(next_payment, today) {
        "Payment Due Soon"
    } else {
        "Payment Scheduled"
    }
}

/// "12 days left", "Due today", "3 days overdue"
pub fn countdown_label(next_payment: &str, today: NaiveDate) -> String {
    match days_until(next_payment, today) {
        Some(0) => "Due today".to_string(),
        Some(1) => "1 day left".to_string(),
        Some(-1) => "1 day overdue".to_string(),
        Some(d) if d > 0 => format!("{} days left", d),
        Some(d) => format!("{} days overdue", -d),
        None => "Unknown date".to_string(),
    }
}

/// Today's date from the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(4400.0, Currency::Naira), "₦4,400");
        assert_eq!(format_amount(1250000.0, Currency::Naira), "₦1,250,000");
        assert_eq!(format_amount(999.5, Currency::Naira), "₦999.5");
        assert_eq!(format_amount(9.99, Currency::Dollar), "$9.99");
        assert_eq!(format_amount(10.0, Currency::Dollar), "$10");
    }

    #[test]
    fn test_format_naira() {
        assert_eq!(format_naira(0.0), "₦0");
        assert_eq!(format_naira(12345.6), "₦12,346");
        assert_eq!(format_naira(-1500.0), "-₦1,500");
        assert_eq!(format_naira(-0.4), "₦0");
    }

    #[test]
    fn test_negative_amount_sign_before_symbol() {
        assert_eq!(format_amount(-2500.0, Currency::Naira), "-₦2,500");
        assert_eq!(format_amount(-9.99, Currency::Dollar), "-$9.99");
    }

    #[test]
    fn test_is_due_soon() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert!(is_due_soon("2026-10-23", today));
        assert!(!is_due_soon("2026-10-24", today));
        assert!(is_due_soon("2026-10-16", today));
        assert!(is_due_soon("2026-10-01", today));
        assert!(!is_due_soon("soon", today));
    }

    #[test]
    fn test_payment_status() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(payment_status("2026-10-20", today), "Payment Due Soon");
        assert_eq!(payment_status("2026-12-01", today), "Payment Scheduled");
    }

    #[test]
    fn test_cycle_suffix() {
        assert_eq!(cycle_suffix(BillingCycle::Monthly), "/month");
        assert_eq!(cycle_suffix(BillingCycle::Yearly), "/year");
    }

    #[test]
    fn test_days_until() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(days_until("2026-10-28", today), Some(12));
        assert_eq!(days_until("2026-10-16", today), Some(0));
        assert_eq!(days_until("2026-10-10", today), Some(-6));
        assert_eq!(days_until("2027-01-01", today), Some(77));
        assert_eq!(days_until("next week", today), None);
    }

    #[test]
    fn test_countdown_label() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(countdown_label("2026-10-17", today), "1 day left");
        assert_eq!(countdown_label("2026-10-16", today), "Due today");
        assert_eq!(countdown_label("2026-10-13", today), "3 days overdue");
        assert_eq!(countdown_label("", today), "Unknown date");
    }
}
