//! HTTP request handlers

use super::state::AppState;
use crate::catalog;
use crate::search::{SearchError, SearchRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use tera::Context;

/// Home page handler: renders the search form with the dropdown catalogs
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("industries", catalog::INDUSTRIES);
    ctx.insert("countries", catalog::COUNTRIES);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Company search handler
///
/// A body that is missing, not a JSON object, or an empty object is rejected
/// before anything goes upstream.
pub async fn search(
    State(state): State<AppState>,
    body: Option<Json<serde_json::Value>>,
) -> Response {
    let raw = match body {
        Some(Json(raw)) if raw.as_object().map(|o| !o.is_empty()).unwrap_or(false) => raw,
        _ => return error_response(StatusCode::BAD_REQUEST, "No request data provided"),
    };

    let request: SearchRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.search.search(&request).await {
        Ok(page) => Json(page).into_response(),
        Err(e @ SearchError::UnexpectedFormat) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(SearchError::Upstream(e)) => {
            tracing::error!("Search error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Employee lookup handler
pub async fn employees(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Response {
    let company_id: i64 = match company_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid company id: {}", company_id),
            )
        }
    };

    match state.search.employees(company_id).await {
        Ok(page) => Json(page).into_response(),
        // A malformed employee-search response comes back as 200 with an
        // embedded error field, unlike the company search path.
        Err(SearchError::UnexpectedFormat) => Json(json!({
            "error": "Unexpected response format from employee search",
            "employees": [],
            "total": 0
        }))
        .into_response(),
        Err(SearchError::Upstream(e)) => {
            tracing::error!("Employee search error: {}", e);
            let message = e.to_string();
            let message = if message.contains("422") {
                "Unable to fetch employee data. Please try again.".to_string()
            } else {
                message
            };
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &message)
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"error": message}))).into_response()
}
