//! Headline client: company name to a bounded list of recent news titles.

use crate::config::Config;
use crate::log_debug;
use crate::outcome::{OperationError, Outcome};
use crate::providers::Provider;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Headlines returned per query unless the caller asks otherwise
pub const DEFAULT_MAX_RESULTS: u8 = 3;

/// One headline lookup, constructed per user action
#[derive(Debug, Clone)]
pub struct HeadlineQuery {
    pub company: String,
    pub max_results: u8,
}

impl HeadlineQuery {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Transport seam for the news-search provider
#[async_trait]
pub trait NewsSearchApi: Send + Sync {
    /// Issue one news-search request and return the provider's raw JSON body
    async fn search_news(&self, query: &str, limit: u8, api_key: &str)
    -> Result<serde_json::Value>;
}

/// News search over the `SerpAPI` Google News engine
pub struct SerpApiNews {
    client: Client,
    endpoint: String,
}

impl SerpApiNews {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint_for(Provider::SerpApi),
        })
    }
}

#[async_trait]
impl NewsSearchApi for SerpApiNews {
    async fn search_news(
        &self,
        query: &str,
        limit: u8,
        api_key: &str,
    ) -> Result<serde_json::Value> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("engine", "google_news"),
                ("q", query),
                ("num", limit.to_string().as_str()),
                ("api_key", api_key),
            ],
        )?;

        tracing::debug!(target: "company_scout::http", engine = "google_news", %query, limit, "news search request");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(anyhow::anyhow!(
                "news search request failed with status {}: {}",
                status,
                text
            ));
        }

        Ok(response.json().await?)
    }
}

/// Wraps the news-search call behind the credential gate and maps every fault
/// into an [`Outcome`]
pub struct HeadlineClient {
    api_key: Option<String>,
    backend: Box<dyn NewsSearchApi>,
}

impl HeadlineClient {
    /// Client backed by the real SerpAPI transport
    pub fn new(config: &Config, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            api_key,
            backend: Box::new(SerpApiNews::new(config)?),
        })
    }

    /// Client with an injected transport (used by tests and embedders)
    pub fn with_backend(api_key: Option<String>, backend: Box<dyn NewsSearchApi>) -> Self {
        Self { api_key, backend }
    }

    /// Fetch up to `query.max_results` headline titles for a company.
    ///
    /// Returns `Failure(Config, ..)` without any network I/O when the key is
    /// absent or blank. An empty result list is a valid success; the
    /// provider may legitimately have no news. At most one attempt is made;
    /// the call is safe to re-issue.
    pub async fn fetch_headlines(&self, query: &HeadlineQuery) -> Outcome<Vec<String>> {
        let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Err(OperationError::config(format!(
                "missing credential: set {}",
                Provider::SerpApi.api_key_env()
            )));
        };

        log_debug!(
            "Fetching up to {} headlines for '{}'",
            query.max_results,
            query.company
        );

        let body = self
            .backend
            .search_news(&query.company, query.max_results, key)
            .await
            .map_err(|e| OperationError::provider(e.to_string()))?;

        parse_headlines(&body, query.max_results)
    }
}

/// Pull titles out of the provider body, preserving positional rank. The
/// provider is asked to cap results but is not trusted to; the list is capped
/// again here and may come back shorter than requested.
fn parse_headlines(body: &serde_json::Value, max_results: u8) -> Outcome<Vec<String>> {
    let items = match body.get("news_results") {
        // The provider omits the section entirely when there is no news
        None => return Ok(Vec::new()),
        Some(value) => value.as_array().ok_or_else(|| {
            OperationError::provider("malformed news payload: news_results is not a list")
        })?,
    };

    let headlines = items
        .iter()
        .take(usize::from(max_results))
        .map(|item| {
            item.get("title")
                .and_then(|t| t.as_str())
                .unwrap_or("")
                .to_string()
        })
        .collect();

    Ok(headlines)
}
