//! Local text filter for list commands.

use serde::Serialize;
use serde_json::Value;

/// Case-insensitive match against every string field of `item`, nested
/// references included.
pub fn matches_text<T: Serialize>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    serde_json::to_value(item).is_ok_and(|value| contains_text(&value, needle))
}

fn contains_text(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(text) => text.to_lowercase().contains(needle),
        Value::Array(items) => items.iter().any(|item| contains_text(item, needle)),
        Value::Object(map) => map.values().any(|item| contains_text(item, needle)),
        _ => false,
    }
}

/// Keep items matching `search`, then cut to `limit`.
pub fn narrow<T>(items: &mut Vec<T>, search: Option<&str>, limit: u32, matches: impl Fn(&T, &str) -> bool) {
    if let Some(needle) = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) {
        items.retain(|item| matches(item, &needle));
    }
    items.truncate(limit as usize);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_strings_match() {
        let hub = json!({"name": "Pune Central", "manager": {"name": "Asha Kulkarni"}});
        assert!(matches_text(&hub, "asha"));
        assert!(matches_text(&hub, "central"));
        assert!(!matches_text(&hub, "mumbai"));
    }

    #[test]
    fn narrow_filters_then_limits() {
        let mut names = vec!["Meena Stores", "Kumar Agencies", "Meena Wholesale", "Meena Traders"];
        narrow(&mut names, Some("  MEENA "), 2, |name, needle| {
            name.to_lowercase().contains(needle)
        });
        assert_eq!(names, vec!["Meena Stores", "Meena Wholesale"]);
    }

    #[test]
    fn blank_search_only_limits() {
        let mut ids = vec![1, 2, 3];
        narrow(&mut ids, Some("   "), 10, |_, _| false);
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
