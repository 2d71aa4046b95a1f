//! Query-string building for list endpoints.

use std::fmt::Display;

use lgx_core::enums::EmployeeRole;

/// Ordered list of query parameters; empty values are skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryString(Vec<(&'static str, String)>);

impl QueryString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when `value` is present and non-empty.
    pub fn push<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.0.push((key, value));
            }
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `?k=v&k2=v2`, or an empty string when there are no params.
    #[must_use]
    pub fn to_suffix(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

/// Filters shared by the master-data list endpoints (hubs, employees,
/// customers, loaders, routes).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub hub: Option<String>,
    pub role: Option<EmployeeRole>,
    pub active: Option<bool>,
}

impl ListQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.push("search", self.search.as_deref())
            .push("hub", self.hub.as_deref())
            .push("role", self.role)
            .push("isActive", self.active);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_renders_nothing() {
        assert_eq!(ListQuery::default().to_query().to_suffix(), "");
    }

    #[test]
    fn values_are_encoded_and_blank_skipped() {
        let query = ListQuery {
            search: Some("pune central".into()),
            hub: Some(String::new()),
            role: None,
            active: Some(true),
        };
        assert_eq!(query.to_query().to_suffix(), "?search=pune%20central&isActive=true");
    }
}
