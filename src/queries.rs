//! Subscription Queries
//!
//! Search, filtering and id allocation over the in-memory collection.

use chrono::NaiveDate;

use crate::format::is_due_soon;
use crate::models::{Category, Subscription};

/// Case-insensitive name search plus optional category filter.
/// A blank query matches everything.
pub fn filter_subscriptions(subs: &[Subscription], query: &str, category: Option<Category>) -> Vec<Subscription> {
    let needle = query.trim().to_lowercase();
    subs.iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn find_subscription<'a>(subs: &'a [Subscription], id: &str) -> Option<&'a Subscription> {
    subs.iter().find(|s| s.id == id)
}

/// How many of `subs` are due within the due-soon window (overdue included)
pub fn due_soon_count(subs: &[Subscription], today: NaiveDate) -> usize {
    subs.iter().filter(|s| is_due_soon(&s.next_payment, today)).count()
}

/// Next free id: one past the largest numeric id
pub fn next_id(subs: &[Subscription]) -> String {
    let max = subs.iter().filter_map(|s| s.id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::load_subscriptions;

    #[test]
    fn test_search_is_case_insensitive() {
        let subs = load_subscriptions().unwrap();
        let found = filter_subscriptions(&subs, "  NETF ", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Netflix");
    }

    #[test]
    fn test_blank_query_returns_all_in_order() {
        let subs = load_subscriptions().unwrap();
        assert_eq!(filter_subscriptions(&subs, "", None), subs);
    }

    #[test]
    fn test_category_filter() {
        let subs = load_subscriptions().unwrap();
        let found = filter_subscriptions(&subs, "", Some(Category::Entertainment));
        assert!(!found.is_empty());
        assert!(found.iter().all(|s| s.category == Category::Entertainment));

        let none = filter_subscriptions(&subs, "netflix", Some(Category::Health));
        assert!(none.is_empty());
    }

    #[test]
    fn test_next_id() {
        let subs = load_subscriptions().unwrap();
        assert_eq!(next_id(&subs), "9");
        assert_eq!(next_id(&[]), "1");
    }

    #[test]
    fn test_due_soon_count() {
        let mut subs = load_subscriptions().unwrap();
        for (sub, date) in subs.iter_mut().zip(["2026-10-18", "2026-10-23", "2026-10-24", "2026-09-30"]) {
            sub.next_payment = date.to_string();
        }
        for sub in subs.iter_mut().skip(4) {
            sub.next_payment = "2027-01-01".to_string();
        }
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(due_soon_count(&subs, today), 3);
        assert_eq!(due_soon_count(&[], today), 0);
    }

    #[test]
    fn test_find_subscription() {
        let subs = load_subscriptions().unwrap();
        assert_eq!(find_subscription(&subs, "3").map(|s| s.name.as_str()), Some("Notion"));
        assert!(find_subscription(&subs, "missing").is_none());
    }
}
