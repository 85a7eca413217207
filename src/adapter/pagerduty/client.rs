//! PagerDuty REST API v2 client
//!
//! Implements `PagerDutyRepository` over HTTP. Every request is issued
//! sequentially; list endpoints are exposed as `Paginated` sequences that
//! fetch the next page only when the caller asks for more items.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::marker::PhantomData;
use std::time::Duration;

use crate::domain::entities::filter::IncidentFilter;
use crate::domain::entities::incident::{Incident, Note};
use crate::domain::entities::user::{OnCallEntry, Team, User};
use crate::domain::errors::ApiError;
use crate::domain::repositories::paginated::{Page, PageFetcher, Paginated};
use crate::domain::repositories::pagerduty_repository::PagerDutyRepository;

use super::models::{IncidentResource, NoteResource, OnCallResource, UserEnvelope};

/// REST API v2 media type
pub const API_ACCEPT: &str = "application/vnd.pagerduty+json;version=2";

/// Items requested per page
pub const PAGE_LIMIT: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// PagerDuty API client
#[derive(Debug, Clone)]
pub struct PagerDutyClient {
    http: reqwest::Client,
    base_url: String,
}

/// List response: `{"<collection>": [...], "more": bool, ...}`
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    more: bool,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl PagerDutyClient {
    /// Create a client for `base_url`.
    ///
    /// A missing token is not validated here; the API rejects the first
    /// request instead.
    ///
    /// # Errors
    /// Returns error if the token cannot be used as a header value or the
    /// HTTP client cannot be built.
    pub fn new(token: Option<&str>, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(API_ACCEPT));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Token token={token}"))
                .context("Invalid API token")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("PagerDuty API request failed: {} {} {}", url, status, body);
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ApiError::Malformed(e.to_string())
            } else {
                ApiError::Transport(e.to_string())
            }
        })
    }

    fn list<W, T>(
        &self,
        path: String,
        collection: &'static str,
        query: Vec<(String, String)>,
        paginate: bool,
    ) -> Paginated<T>
    where
        W: DeserializeOwned + Into<T> + Send + 'static,
        T: Send + 'static,
    {
        Paginated::new(Box::new(ListFetcher::<W> {
            client: self.clone(),
            path,
            collection,
            query,
            paginate,
            _resource: PhantomData,
        }))
    }
}

/// Fetches one page of a list endpoint
struct ListFetcher<W> {
    client: PagerDutyClient,
    path: String,
    collection: &'static str,
    query: Vec<(String, String)>,
    paginate: bool,
    _resource: PhantomData<fn() -> W>,
}

#[async_trait]
impl<W, T> PageFetcher<T> for ListFetcher<W>
where
    W: DeserializeOwned + Into<T> + Send + 'static,
    T: Send + 'static,
{
    async fn fetch_page(&mut self, offset: usize) -> Result<Page<T>, ApiError> {
        let mut query = self.query.clone();
        if self.paginate {
            query.push(("limit".to_string(), PAGE_LIMIT.to_string()));
            query.push(("offset".to_string(), offset.to_string()));
        }

        let mut envelope: ListEnvelope = self.client.get_json(&self.path, &query).await?;
        let raw = envelope.rest.remove(self.collection).ok_or_else(|| {
            ApiError::Malformed(format!("missing '{}' in response", self.collection))
        })?;
        let resources: Vec<W> =
            serde_json::from_value(raw).map_err(|e| ApiError::Malformed(e.to_string()))?;

        debug!(
            "Fetched {} {} at offset {} (more: {})",
            resources.len(),
            self.collection,
            offset,
            envelope.more
        );

        Ok(Page {
            items: resources.into_iter().map(Into::into).collect(),
            more: self.paginate && envelope.more,
        })
    }
}

/// Query parameters for `GET /incidents`
pub fn incident_query(filter: &IncidentFilter) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if let Some(since) = &filter.since {
        query.push(("since".to_string(), since.clone()));
    }
    if let Some(until) = &filter.until {
        query.push(("until".to_string(), until.clone()));
    }
    for status in &filter.statuses {
        query.push(("statuses[]".to_string(), status.clone()));
    }
    for team_id in &filter.team_ids {
        query.push(("team_ids[]".to_string(), team_id.clone()));
    }
    for urgency in &filter.urgencies {
        query.push(("urgencies[]".to_string(), urgency.to_string()));
    }
    if let Some(time_zone) = &filter.time_zone {
        query.push(("time_zone".to_string(), time_zone.clone()));
    }

    query
}

#[async_trait]
impl PagerDutyRepository for PagerDutyClient {
    async fn current_user(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.get_json("/users/me", &[]).await?;
        Ok(envelope.user.into())
    }

    async fn on_call_entries(&self, user_ids: &[String]) -> Result<Paginated<OnCallEntry>, ApiError> {
        let query = user_ids
            .iter()
            .map(|id| ("user_ids[]".to_string(), id.clone()))
            .collect();
        Ok(self.list::<OnCallResource, OnCallEntry>("/oncalls".to_string(), "oncalls", query, true))
    }

    async fn teams_of_current_user(&self) -> Result<Paginated<Team>, ApiError> {
        let user = self.current_user().await?;
        Ok(Paginated::from_vec(user.teams))
    }

    async fn incidents(&self, filter: &IncidentFilter) -> Result<Paginated<Incident>, ApiError> {
        Ok(self.list::<IncidentResource, Incident>(
            "/incidents".to_string(),
            "incidents",
            incident_query(filter),
            true,
        ))
    }

    async fn incident_notes(&self, incident_id: &str) -> Result<Paginated<Note>, ApiError> {
        Ok(self.list::<NoteResource, Note>(
            format!("/incidents/{incident_id}/notes"),
            "notes",
            Vec::new(),
            false,
        ))
    }
}
