//! HTTP implementation of the roster fetcher.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use selection_core::EmployeeFetcher;
use serde_json::Value;
use url::Url;

/// Fetches the employee roster from `<base>/employees`. No pagination and no
/// auth; the endpoint either answers with a JSON body or the request fails.
pub struct HttpEmployeeFetcher {
    http: Client,
    endpoint: Url,
}

impl HttpEmployeeFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid employees api url '{base_url}'"))?;
        let endpoint = base
            .join("employees")
            .with_context(|| format!("cannot derive employees endpoint from '{base_url}'"))?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl EmployeeFetcher for HttpEmployeeFetcher {
    async fn fetch_employees(&self) -> Result<Value> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .with_context(|| format!("employees request failed: {}", self.endpoint))?
            .error_for_status()
            .with_context(|| format!("employees request rejected: {}", self.endpoint))?;
        response
            .json()
            .await
            .context("employees response body was not json")
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
