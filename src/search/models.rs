//! Request and response shapes for the search flows

use crate::catalog;
use crate::provider::{CompanyRecord, EmployeeProfile};
use crate::MAX_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Client search request
///
/// Recognized filters are typed; any other body keys land in `extra` and are
/// forwarded upstream only when the provider's filter allow-list contains
/// them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub country: Option<String>,
    pub industry: Option<String>,
    pub employees_count_gte: Option<i64>,
    pub employees_count_lte: Option<i64>,
    pub page: usize,
    pub limit: Option<usize>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl SearchRequest {
    /// Page size actually used, capped at [`MAX_PAGE_SIZE`]
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE)
    }

    /// Build the upstream filter payload from recognized, non-empty fields
    ///
    /// Empty strings and zero-valued count bounds are treated as unset.
    pub fn filter_payload(&self) -> Value {
        let mut payload = Map::new();

        if let Some(country) = self.country.as_deref().filter(|s| !s.is_empty()) {
            payload.insert("country".to_string(), Value::from(country));
        }
        if let Some(industry) = self.industry.as_deref().filter(|s| !s.is_empty()) {
            payload.insert("industry".to_string(), Value::from(industry));
        }
        if let Some(gte) = self.employees_count_gte.filter(|bound| *bound != 0) {
            payload.insert("employees_count_gte".to_string(), Value::from(gte));
        }
        if let Some(lte) = self.employees_count_lte.filter(|bound| *bound != 0) {
            payload.insert("employees_count_lte".to_string(), Value::from(lte));
        }

        for (key, value) in &self.extra {
            if catalog::is_allowed_filter(key) && !value.is_null() {
                payload.insert(key.clone(), value.clone());
            }
        }

        Value::Object(payload)
    }
}

/// One page of company search results
#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub results: Vec<CompanyRecord>,
    pub total: usize,
    pub page: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Employee lookup response
///
/// `total` is the full length of the ID list returned by the employee-search
/// endpoint, not the number of records actually fetched.
#[derive(Debug, Serialize)]
pub struct EmployeePage {
    pub employees: Vec<EmployeeProfile>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limit_is_capped() {
        let request = SearchRequest {
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(request.effective_limit(), 3);

        let request = SearchRequest {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(request.effective_limit(), 2);

        assert_eq!(SearchRequest::default().effective_limit(), 3);
    }

    #[test]
    fn test_payload_contains_only_set_fields() {
        let request: SearchRequest =
            serde_json::from_value(json!({"industry": "Retail", "page": 0})).unwrap();
        assert_eq!(request.filter_payload(), json!({"industry": "Retail"}));
    }

    #[test]
    fn test_empty_strings_dropped() {
        let request: SearchRequest =
            serde_json::from_value(json!({"country": "", "industry": "Banking"})).unwrap();
        assert_eq!(request.filter_payload(), json!({"industry": "Banking"}));
    }

    #[test]
    fn test_employee_count_bounds() {
        let request: SearchRequest = serde_json::from_value(json!({
            "employees_count_gte": 10,
            "employees_count_lte": 500
        }))
        .unwrap();
        assert_eq!(
            request.filter_payload(),
            json!({"employees_count_gte": 10, "employees_count_lte": 500})
        );
    }

    #[test]
    fn test_zero_count_bounds_dropped() {
        let request: SearchRequest = serde_json::from_value(json!({
            "employees_count_gte": 0,
            "employees_count_lte": 0,
            "country": "Italy"
        }))
        .unwrap();
        assert_eq!(request.filter_payload(), json!({"country": "Italy"}));
    }

    #[test]
    fn test_allow_listed_extras_pass_through() {
        let request: SearchRequest = serde_json::from_value(json!({
            "industry": "Farming",
            "founded_year_gte": 1990,
            "bogus_key": "dropped",
            "source_id": null
        }))
        .unwrap();
        assert_eq!(
            request.filter_payload(),
            json!({"industry": "Farming", "founded_year_gte": 1990})
        );
    }

    #[test]
    fn test_has_more_serializes_camel_case() {
        let page = SearchPage {
            results: vec![],
            total: 5,
            page: 0,
            has_more: true,
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["hasMore"], json!(true));
        assert!(value.get("has_more").is_none());
    }
}
