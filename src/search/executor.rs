//! Sequential search execution against the upstream provider
//!
//! All per-entity collect calls within a request run one after another with
//! a fixed delay in between, to stay inside the provider's rate limits. A
//! failed collect is logged and skipped; it never aborts the page.

use super::models::{EmployeePage, SearchPage, SearchRequest};
use super::{pagination, SearchError};
use crate::config::{Settings, UpstreamSettings};
use crate::network::HttpClient;
use crate::provider::{self, extract_employee, project_company};
use crate::MAX_EMPLOYEE_FETCH;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Executor for the company search and employee lookup flows
pub struct CompanySearch {
    client: HttpClient,
    upstream: UpstreamSettings,
    collect_delay: Duration,
}

impl CompanySearch {
    /// Create a new executor from application settings
    pub fn new(client: HttpClient, settings: &Settings) -> Self {
        Self {
            client,
            upstream: settings.upstream.clone(),
            collect_delay: Duration::from_secs_f64(settings.outgoing.collect_delay),
        }
    }

    /// Run a filtered company search and collect one page of records
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        let limit = request.effective_limit();
        let page = request.page;
        let payload = request.filter_payload();

        debug!("filter payload: {}", payload);

        let response = self
            .client
            .post_json(&self.upstream.company_search_url(), &payload)
            .await?;

        let ids = match response.as_array() {
            Some(ids) => ids.as_slice(),
            None => {
                warn!("unexpected filter-search response: {}", response);
                return Err(SearchError::UnexpectedFormat);
            }
        };

        let total = ids.len();
        let (start, end) = pagination::page_bounds(page, limit);
        let page_ids = pagination::slice_page(ids, page, limit);
        let has_more = end < total;

        info!(
            "found {} total results, processing page {} ({}-{})",
            total,
            page + 1,
            start,
            end
        );

        let mut results = Vec::with_capacity(page_ids.len());
        for id in page_ids {
            match self.collect_company(id).await {
                Ok(Some(raw)) => results.push(project_company(&raw)),
                Ok(None) => {}
                Err(e) => warn!("failed to collect company {}: {}", id, e),
            }
            self.pause().await;
        }

        Ok(SearchPage {
            results,
            total,
            page,
            has_more,
        })
    }

    /// Look up current employees of a company
    ///
    /// At most [`MAX_EMPLOYEE_FETCH`] records are collected, but `total`
    /// reports the full length of the ID list the provider returned.
    pub async fn employees(&self, company_id: i64) -> Result<EmployeePage, SearchError> {
        let payload = json!({
            "experience_company_id": company_id,
            "active_experience": true
        });

        debug!("employee filter payload: {}", payload);

        let response = self
            .client
            .post_json(&self.upstream.employee_search_url(), &payload)
            .await?;

        let ids = match response.as_array() {
            Some(ids) => ids.as_slice(),
            None => {
                warn!("unexpected employee-search response: {}", response);
                return Err(SearchError::UnexpectedFormat);
            }
        };

        let total = ids.len();
        let mut employees = Vec::new();

        for id in ids.iter().take(MAX_EMPLOYEE_FETCH) {
            match self.collect_employee(id).await {
                Ok(Some(raw)) => {
                    if let Some(profile) = extract_employee(&raw, company_id) {
                        employees.push(profile);
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("error fetching employee {}: {}", id, e),
            }
            self.pause().await;
        }

        Ok(EmployeePage { employees, total })
    }

    async fn collect_company(&self, id: &Value) -> anyhow::Result<Option<Value>> {
        let Some(segment) = provider::id_segment(id) else {
            warn!("skipping malformed company id: {}", id);
            return Ok(None);
        };
        let raw = self
            .client
            .get_json(&self.upstream.company_collect_url(&segment))
            .await?;
        Ok(Some(raw))
    }

    async fn collect_employee(&self, id: &Value) -> anyhow::Result<Option<Value>> {
        let Some(segment) = provider::id_segment(id) else {
            warn!("skipping malformed employee id: {}", id);
            return Ok(None);
        };
        let raw = self
            .client
            .get_json(&self.upstream.employee_collect_url(&segment))
            .await?;
        Ok(Some(raw))
    }

    async fn pause(&self) {
        if !self.collect_delay.is_zero() {
            tokio::time::sleep(self.collect_delay).await;
        }
    }
}
