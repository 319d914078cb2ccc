//! Employee record extraction
//!
//! Upstream employee documents carry nested collections of experience,
//! skills, and education entries, each independently soft-deletable via a
//! `deleted` flag.

use serde::Serialize;
use serde_json::Value;

/// Flattened employee profile returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub profile_url: Option<String>,
    pub experience: Option<String>,
    pub start_date: Option<String>,
    pub duration: Option<String>,
    pub industry: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub summary: Option<String>,
    pub connections: Option<i64>,
}

/// A non-deleted education entry
#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub program: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Extract the flattened profile for one employee
///
/// The current experience is the entry matching `company_id` (compared as
/// strings, since the provider mixes numeric and string ids) with no end
/// date. Returns `None` when the record has neither a name nor a title.
pub fn extract_employee(raw: &Value, company_id: i64) -> Option<EmployeeProfile> {
    let current = current_experience(raw, company_id);

    let name = str_field(raw, "name");
    let title = current
        .and_then(|exp| str_field(exp, "title"))
        .or_else(|| str_field(raw, "title"));

    // Skip records with nothing to display
    if !has_text(&name) && !has_text(&title) {
        return None;
    }

    Some(EmployeeProfile {
        name,
        title,
        location: str_field(raw, "location"),
        profile_url: str_field(raw, "url"),
        experience: current.and_then(|exp| str_field(exp, "description")),
        start_date: current.and_then(|exp| str_field(exp, "date_from")),
        duration: current.and_then(|exp| str_field(exp, "duration")),
        industry: str_field(raw, "industry"),
        skills: skills(raw),
        education: education(raw),
        summary: str_field(raw, "summary"),
        connections: raw.get("connections").and_then(Value::as_i64),
    })
}

/// Find the non-deleted experience entry at the target company with no end date
fn current_experience(raw: &Value, company_id: i64) -> Option<&Value> {
    let target = company_id.to_string();
    collection(raw, "member_experience_collection")
        .iter()
        .find(|exp| {
            !is_deleted(exp)
                && exp
                    .get("company_id")
                    .map(|id| id_text(id) == target)
                    .unwrap_or(false)
                && exp.get("date_to").map(Value::is_null).unwrap_or(true)
        })
        .copied()
}

fn skills(raw: &Value) -> Vec<String> {
    collection(raw, "member_skills_collection")
        .iter()
        .filter(|skill| !is_deleted(skill))
        .filter_map(|skill| skill.get("member_skill_list"))
        .filter_map(|list| list.get("skill"))
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn education(raw: &Value) -> Vec<EducationEntry> {
    collection(raw, "member_education_collection")
        .iter()
        .filter(|edu| !is_deleted(edu))
        .map(|edu| EducationEntry {
            institution: str_field(edu, "title"),
            program: str_field(edu, "subtitle"),
            date_from: str_field(edu, "date_from"),
            date_to: str_field(edu, "date_to"),
        })
        .collect()
}

fn collection<'a>(raw: &'a Value, key: &str) -> Vec<&'a Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().collect())
        .unwrap_or_default()
}

fn is_deleted(entry: &Value) -> bool {
    entry
        .get("deleted")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().map(|s| !s.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_employee() -> Value {
        json!({
            "name": "Dana Rossi",
            "title": "Engineer",
            "location": "Milan, Italy",
            "url": "https://example.com/in/dana",
            "industry": "Retail",
            "summary": "Builds things.",
            "connections": 412,
            "member_experience_collection": [
                {
                    "company_id": 42,
                    "title": "Senior Engineer",
                    "description": "Leads the platform team",
                    "date_from": "2021-03-01",
                    "date_to": null,
                    "duration": "3 years"
                },
                {
                    "company_id": 42,
                    "title": "Engineer",
                    "date_from": "2018-01-01",
                    "date_to": "2021-03-01"
                }
            ],
            "member_skills_collection": [
                {"member_skill_list": {"skill": "Rust"}},
                {"member_skill_list": {"skill": "SQL"}, "deleted": true},
                {"deleted": false}
            ],
            "member_education_collection": [
                {
                    "title": "Politecnico di Milano",
                    "subtitle": "BSc Computer Science",
                    "date_from": "2012",
                    "date_to": "2015"
                },
                {"title": "Dropped School", "deleted": true}
            ]
        })
    }

    #[test]
    fn test_extract_full_profile() {
        let profile = extract_employee(&sample_employee(), 42).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Dana Rossi"));
        // experience title wins over the profile title
        assert_eq!(profile.title.as_deref(), Some("Senior Engineer"));
        assert_eq!(profile.experience.as_deref(), Some("Leads the platform team"));
        assert_eq!(profile.start_date.as_deref(), Some("2021-03-01"));
        assert_eq!(profile.duration.as_deref(), Some("3 years"));
        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(
            profile.education[0].institution.as_deref(),
            Some("Politecnico di Milano")
        );
        assert_eq!(profile.connections, Some(412));
    }

    #[test]
    fn test_other_company_experience_ignored() {
        let mut raw = sample_employee();
        raw["member_experience_collection"][0]["company_id"] = json!(99);
        let profile = extract_employee(&raw, 42).unwrap();
        // falls back to the profile title; no current experience fields
        assert_eq!(profile.title.as_deref(), Some("Engineer"));
        assert!(profile.experience.is_none());
        assert!(profile.start_date.is_none());
    }

    #[test]
    fn test_string_company_id_matches() {
        let mut raw = sample_employee();
        raw["member_experience_collection"][0]["company_id"] = json!("42");
        let profile = extract_employee(&raw, 42).unwrap();
        assert_eq!(profile.title.as_deref(), Some("Senior Engineer"));
    }

    #[test]
    fn test_deleted_experience_ignored() {
        let mut raw = sample_employee();
        raw["member_experience_collection"][0]["deleted"] = json!(true);
        let profile = extract_employee(&raw, 42).unwrap();
        assert_eq!(profile.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_nameless_untitled_record_excluded() {
        let raw = json!({"location": "Nowhere"});
        assert!(extract_employee(&raw, 42).is_none());

        let raw = json!({"name": "", "title": ""});
        assert!(extract_employee(&raw, 42).is_none());
    }

    #[test]
    fn test_title_alone_is_enough() {
        let raw = json!({"title": "Consultant"});
        let profile = extract_employee(&raw, 42).unwrap();
        assert_eq!(profile.title.as_deref(), Some("Consultant"));
        assert!(profile.skills.is_empty());
        assert!(profile.education.is_empty());
    }
}
