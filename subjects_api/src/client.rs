//! HTTP client for the subjects backend.

use std::time::Duration;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{PageQuery, Query},
    types::{NewSubject, PageResult, Subject, SubjectId},
    Error,
};

/// Request timeout for every backend call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the module-routed subjects backend.
///
/// Every request targets `{base_api_url}?module=subjects`; the HTTP method
/// selects the operation (GET list, POST create, PUT update, DELETE remove).
pub struct Client {
    /// Backend entry point. Defaults to `http://localhost/backend/server.php`.
    base_api_url: String,
    module: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the default local backend.
    pub fn new() -> Self {
        Self::with_base_url("http://localhost/backend/server.php")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            module: "subjects".to_string(),
        }
    }

    /// Returns the backend entry point this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        url.query_pairs_mut().append_pair("module", &self.module);
        Ok(query.add_to_url(&url))
    }

    /// Sends a request and returns the body of a successful response.
    async fn execute<Q, B>(&self, method: Method, query: &Q, body: Option<&B>) -> Result<String, Error>
    where
        Q: Query,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(query)?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        tracing::debug!("{} {}", method, url);
        let mut request = client
            .request(method.clone(), url)
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", method, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message: error_message(&body),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn send<T, Q, B>(&self, method: Method, query: &Q, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
        B: Serialize + ?Sized,
    {
        let body = self.execute(method, query, body).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    /// Fetches one page of subjects.
    pub async fn fetch_paginated(&self, query: &PageQuery) -> Result<PageResult, Error> {
        self.send::<PageResult, PageQuery, ()>(Method::GET, query, None)
            .await
    }

    /// Creates a subject and returns the stored record.
    pub async fn create(&self, subject: &NewSubject) -> Result<Subject, Error> {
        self.send(Method::POST, &(), Some(subject)).await
    }

    /// Renames an existing subject and returns the stored record.
    pub async fn update(&self, subject: &Subject) -> Result<Subject, Error> {
        self.send(Method::PUT, &(), Some(subject)).await
    }

    /// Deletes a subject by id. The response body is ignored.
    pub async fn remove(&self, id: &SubjectId) -> Result<(), Error> {
        let body = serde_json::json!({ "id": id });
        self.execute(Method::DELETE, &(), Some(&body)).await?;
        Ok(())
    }
}

/// Extracts the `error` (or `message`) string from a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
