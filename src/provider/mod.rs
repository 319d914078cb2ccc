//! Projections of the upstream provider's opaque records
//!
//! The provider returns large JSON documents; only a fixed subset of fields
//! is carried through to clients.

mod company;
mod employee;

pub use company::{project_company, CompanyRecord};
pub use employee::{extract_employee, EducationEntry, EmployeeProfile};

use serde_json::Value;

/// Render an opaque entity ID as a URL path segment
///
/// The filter-search endpoints return IDs as JSON numbers, but the contract
/// treats them as opaque, so strings are accepted too.
pub fn id_segment(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_segment() {
        assert_eq!(id_segment(&json!(42)).as_deref(), Some("42"));
        assert_eq!(id_segment(&json!("abc-7")).as_deref(), Some("abc-7"));
        assert_eq!(id_segment(&json!({"id": 1})), None);
        assert_eq!(id_segment(&json!(null)), None);
    }
}
