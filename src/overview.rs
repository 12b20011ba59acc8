//! Overview client: company name to one generated prose block.

use crate::config::Config;
use crate::log_debug;
use crate::outcome::{OperationError, Outcome};
use crate::providers::Provider;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// One overview request, constructed per user action
#[derive(Debug, Clone)]
pub struct OverviewQuery {
    pub company: String,
}

impl OverviewQuery {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
        }
    }
}

/// Fixed prompt template, parameterized only by the company name
fn build_prompt(company: &str) -> String {
    format!(
        "Provide a brief overview of the company \"{company}\": \
         its industry, where it is headquartered, and highlights of its \
         recent news."
    )
}

/// Transport seam for the completion provider
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Issue one completion request and return the provider's raw JSON body
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        api_key: &str,
    ) -> Result<serde_json::Value>;
}

/// Text completion via the `OpenAI` API
pub struct OpenAiCompletions {
    client: Client,
    endpoint: String,
    model: String,
}

impl OpenAiCompletions {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint_for(Provider::OpenAi),
            model: config.model_for(Provider::OpenAi),
        })
    }
}

#[async_trait]
impl CompletionApi for OpenAiCompletions {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        api_key: &str,
    ) -> Result<serde_json::Value> {
        let request_body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "max_tokens": max_tokens,
        });

        tracing::debug!(target: "company_scout::http", model = %self.model, max_tokens, "completion request");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(anyhow::anyhow!(
                "completion request failed with status {}: {}",
                status,
                text
            ));
        }

        Ok(response.json().await?)
    }
}

/// Wraps the completion call behind the credential gate and maps every fault
/// into an [`Outcome`]
pub struct OverviewClient {
    api_key: Option<String>,
    max_tokens: u32,
    backend: Box<dyn CompletionApi>,
}

impl OverviewClient {
    /// Client backed by the real OpenAI transport
    pub fn new(config: &Config, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            api_key,
            max_tokens: config.overview_max_tokens,
            backend: Box::new(OpenAiCompletions::new(config)?),
        })
    }

    /// Client with an injected transport (used by tests and embedders)
    pub fn with_backend(
        api_key: Option<String>,
        max_tokens: u32,
        backend: Box<dyn CompletionApi>,
    ) -> Self {
        Self {
            api_key,
            max_tokens,
            backend,
        }
    }

    /// Generate a prose overview of a company.
    ///
    /// Returns `Failure(Config, ..)` without any network I/O when the key is
    /// absent or blank. An empty string is a valid success; the provider may
    /// return no content. At most one attempt is made; content varies between
    /// calls but no external state is mutated.
    pub async fn generate_overview(&self, query: &OverviewQuery) -> Outcome<String> {
        let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Err(OperationError::config(format!(
                "missing credential: set {}",
                Provider::OpenAi.api_key_env()
            )));
        };

        log_debug!("Generating overview for '{}'", query.company);

        let prompt = build_prompt(&query.company);
        let body = self
            .backend
            .complete(&prompt, self.max_tokens, key)
            .await
            .map_err(|e| OperationError::provider(e.to_string()))?;

        parse_overview(&body)
    }
}

/// First candidate's text, trimmed. Zero candidates or a missing text field
/// yield an empty overview rather than an error.
fn parse_overview(body: &serde_json::Value) -> Outcome<String> {
    let choices = match body.get("choices") {
        None => return Ok(String::new()),
        Some(value) => value.as_array().ok_or_else(|| {
            OperationError::provider("malformed completion payload: choices is not a list")
        })?,
    };

    let text = choices
        .first()
        .and_then(|choice| choice.get("text"))
        .and_then(|t| t.as_str())
        .unwrap_or("");

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_mentions_the_company_and_nothing_else_varies() {
        let a = build_prompt("Acme Corp");
        let b = build_prompt("Globex");
        assert!(a.contains("Acme Corp"));
        assert_eq!(a.replace("Acme Corp", "Globex"), b);
    }

    #[test]
    fn test_parse_trims_first_candidate() {
        let body = json!({"choices": [{"text": "  Acme makes widgets.  "}]});
        assert_eq!(parse_overview(&body).expect("valid payload"), "Acme makes widgets.");
    }

    #[test]
    fn test_parse_no_candidates_is_empty_success() {
        let body = json!({"choices": []});
        assert_eq!(parse_overview(&body).expect("valid payload"), "");
    }

    #[test]
    fn test_parse_non_list_choices_is_provider_error() {
        let body = json!({"choices": {"text": "nope"}});
        let err = parse_overview(&body).expect_err("malformed payload");
        assert_eq!(err.kind, crate::outcome::ErrorKind::Provider);
    }
}
