//! Mock Dataset
//!
//! Subscriptions bundled with the app in place of a backend.

use crate::models::Subscription;

const SUBSCRIPTIONS_JSON: &str = include_str!("../assets/subscriptions.json");

pub fn parse_subscriptions(json: &str) -> Result<Vec<Subscription>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Load the bundled subscriptions
pub fn load_subscriptions() -> Result<Vec<Subscription>, String> {
    parse_subscriptions(SUBSCRIPTIONS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_fixtures_parse() {
        let subs = load_subscriptions().unwrap();
        assert_eq!(subs.len(), 8);
        let ids: HashSet<_> = subs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), subs.len(), "ids must be unique");
        assert!(subs.iter().all(|s| s.amount > 0.0));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_subscriptions(r#"[{"id": "1"}]"#).unwrap_err();
        assert!(err.contains("missing field"));
    }
}
