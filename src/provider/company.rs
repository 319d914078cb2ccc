//! Company record projection

use serde::Serialize;
use serde_json::Value;

/// Fixed field subset of an upstream company record
///
/// Field names are part of the client contract and match the keys the web
/// client renders.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyRecord {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Size")]
    pub size: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Employees Count")]
    pub employees_count: Option<i64>,
    #[serde(rename = "Founded")]
    pub founded: Option<Value>,
    #[serde(rename = "Type")]
    pub company_type: Option<String>,
}

/// Project an opaque upstream company document into the output record
///
/// `Country` prefers the parsed headquarters field over the restored one;
/// `Location` prefers the normalized headquarters address over the raw
/// location string.
pub fn project_company(raw: &Value) -> CompanyRecord {
    CompanyRecord {
        id: raw.get("id").and_then(Value::as_i64),
        name: str_field(raw, "name"),
        website: str_field(raw, "website"),
        size: str_field(raw, "size"),
        industry: str_field(raw, "industry"),
        country: str_field(raw, "headquarters_country_parsed")
            .or_else(|| str_field(raw, "headquarters_country_restored")),
        location: str_field(raw, "headquarters_new_address")
            .or_else(|| str_field(raw, "location")),
        employees_count: raw.get("employees_count").and_then(Value::as_i64),
        founded: raw.get("founded").filter(|v| !v.is_null()).cloned(),
        company_type: str_field(raw, "type"),
    }
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}
