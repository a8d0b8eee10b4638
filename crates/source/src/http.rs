//! HTTP record source.

use async_trait::async_trait;
use exn::ResultExt;
use folio_catalog::source::SourceRecord;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{SourceBackend, SourcePage};

/// Reads the upstream listing over HTTP(S).
///
/// Requests `GET {base_url}/users?per_page={n}` with the configured API key in
/// the `x-api-key` header.
#[derive(Clone)]
pub struct HttpSource {
    name: String,
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}
impl HttpSource {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { name: "http".to_string(), client, base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/users", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SourceBackend for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(source = %self.name))]
    async fn list(&self, per_page: usize) -> Result<Vec<SourceRecord>> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("per_page", per_page)])
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .or_raise(|| ErrorKind::Network)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Upstream listing request rejected");
            exn::bail!(ErrorKind::Status(status.as_u16()));
        }
        let page: SourcePage = response.json().await.or_raise(|| ErrorKind::InvalidData)?;
        tracing::debug!(records = page.data.len(), "Fetched upstream listing");
        Ok(page.data.into_iter().take(per_page).collect())
    }
}
