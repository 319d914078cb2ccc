//! Free-text query translation
//!
//! Turns a natural-language query into structured filter parameters via a
//! language-model completion call, and maps those parameters onto the
//! provider's Elasticsearch-DSL search schema. Not wired into the server;
//! invoked through the `query-translate` binary.

use crate::config::TranslatorSettings;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

const SYSTEM_INSTRUCTION: &str =
    "Extract structured parameters from user queries in JSON format.";

/// Default lower bound when the model omits `employee_count.min`
const DEFAULT_EMPLOYEES_MIN: i64 = 1;
/// Default upper bound when the model omits `employee_count.max`
const DEFAULT_EMPLOYEES_MAX: i64 = 10000;

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Language-model backed query translator
pub struct QueryTranslator {
    client: reqwest::Client,
    settings: TranslatorSettings,
}

impl QueryTranslator {
    /// Create a translator; fails when no API key is configured
    pub fn new(settings: &TranslatorSettings) -> Result<Self> {
        if settings.api_key.is_empty() {
            return Err(anyhow!(
                "OPENAI_API_KEY environment variable not set"
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            settings: settings.clone(),
        })
    }

    /// Translate a free-text query into structured filter parameters
    ///
    /// Returns `None` on any request or parse failure; the error is logged,
    /// never propagated.
    pub async fn translate(&self, query: &str) -> Option<Value> {
        match self.complete(query).await {
            Ok(params) => Some(params),
            Err(e) => {
                error!("query translation failed: {}", e);
                None
            }
        }
    }

    async fn complete(&self, query: &str) -> Result<Value> {
        let request = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: query.to_string(),
                },
            ],
            temperature: self.settings.temperature,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(&self.settings.api_url)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("failed to send completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "completion request failed with status {}: {}",
                status,
                text
            ));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .context("failed to parse completion response")?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| anyhow!("no choices in completion response"))?;

        serde_json::from_str(content).context("completion content is not a JSON object")
    }
}

/// Map extracted parameters onto a bool/must ES-DSL query
///
/// Recognized keys: `location`, `industry`, `employee_count.{min,max}`.
/// Everything else is ignored.
pub fn build_filter_query(params: &Value) -> Value {
    let mut must = Vec::new();

    if let Some(location) = params.get("location") {
        must.push(json!({"match": {"hq_country": location}}));
    }

    if let Some(industry) = params.get("industry") {
        must.push(json!({"match": {"industry.keyword": industry}}));
    }

    if let Some(range) = params.get("employee_count") {
        let min = range
            .get("min")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_EMPLOYEES_MIN);
        let max = range
            .get("max")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_EMPLOYEES_MAX);
        must.push(json!({
            "range": {
                "employees_count": {"gte": min, "lte": max}
            }
        }));
    }

    json!({
        "query": {
            "bool": {
                "must": must
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_query() {
        let params = json!({
            "location": "Italy",
            "industry": "Retail",
            "employee_count": {"min": 10, "max": 15}
        });
        let query = build_filter_query(&params);
        let must = query["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 3);
        assert_eq!(must[0], json!({"match": {"hq_country": "Italy"}}));
        assert_eq!(must[1], json!({"match": {"industry.keyword": "Retail"}}));
        assert_eq!(
            must[2],
            json!({"range": {"employees_count": {"gte": 10, "lte": 15}}})
        );
    }

    #[test]
    fn test_missing_bounds_default() {
        let params = json!({"employee_count": {}});
        let query = build_filter_query(&params);
        assert_eq!(
            query["query"]["bool"]["must"][0],
            json!({"range": {"employees_count": {"gte": 1, "lte": 10000}}})
        );
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let params = json!({"revenue": "high", "founded": 1999});
        let query = build_filter_query(&params);
        assert!(query["query"]["bool"]["must"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_translator_requires_api_key() {
        let settings = TranslatorSettings::default();
        assert!(QueryTranslator::new(&settings).is_err());

        let settings = TranslatorSettings {
            api_key: "test-key".to_string(),
            ..Default::default()
        };
        assert!(QueryTranslator::new(&settings).is_ok());
    }
}
