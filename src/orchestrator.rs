//! Research orchestrator.
//!
//! The only component aware of both clients and the credential gate. Each
//! operation is independently invokable and resolves to its own [`Outcome`];
//! one side failing never suppresses the other side's result.

use crate::config::Config;
use crate::credentials::Credentials;
use crate::headlines::{HeadlineClient, HeadlineQuery};
use crate::log_debug;
use crate::outcome::{OperationError, Outcome};
use crate::overview::{OverviewClient, OverviewQuery};

use anyhow::Result;

/// Both outcomes of a combined research run, held distinctly
#[derive(Debug)]
pub struct ResearchReport {
    pub headlines: Outcome<Vec<String>>,
    pub overview: Outcome<String>,
}

/// Validates credentials and dispatches to the two clients
pub struct ResearchOrchestrator {
    credentials: Credentials,
    max_headlines: u8,
    headlines: HeadlineClient,
    overview: OverviewClient,
}

impl ResearchOrchestrator {
    /// Orchestrator backed by the real provider transports
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self> {
        let headlines =
            HeadlineClient::new(config, credentials.news_api_key().map(str::to_string))?;
        let overview =
            OverviewClient::new(config, credentials.completion_api_key().map(str::to_string))?;
        Ok(Self {
            credentials,
            max_headlines: config.max_headlines,
            headlines,
            overview,
        })
    }

    /// Orchestrator with injected clients (used by tests and embedders)
    pub fn with_clients(
        credentials: Credentials,
        max_headlines: u8,
        headlines: HeadlineClient,
        overview: OverviewClient,
    ) -> Self {
        Self {
            credentials,
            max_headlines,
            headlines,
            overview,
        }
    }

    /// True iff both credentials are present; when false the boundary blocks
    /// every operation for the session and the user fixes configuration
    /// externally
    pub fn can_run(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Environment-variable names of the credentials blocking `can_run`
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        self.credentials.missing()
    }

    /// Incomplete credentials block both operations, not just the one whose
    /// key is absent; the session acts only once configuration is whole
    fn credential_gate(&self) -> Result<(), OperationError> {
        if self.credentials.is_complete() {
            return Ok(());
        }
        Err(OperationError::config(format!(
            "missing credential(s): {}",
            self.missing_credentials().join(", ")
        )))
    }

    /// Fetch recent headlines for a company
    pub async fn run_headlines(&self, company: &str) -> Outcome<Vec<String>> {
        self.credential_gate()?;
        let company = validated_company(company)?;
        let query = HeadlineQuery::new(company).with_max_results(self.max_headlines);
        self.headlines.fetch_headlines(&query).await
    }

    /// Generate a prose overview of a company
    pub async fn run_overview(&self, company: &str) -> Outcome<String> {
        self.credential_gate()?;
        let company = validated_company(company)?;
        self.overview.generate_overview(&OverviewQuery::new(company)).await
    }

    /// Run both operations concurrently and report both outcomes. The calls
    /// share nothing mutable, carry no ordering guarantee, and neither
    /// observes the other's result.
    pub async fn run_research(&self, company: &str) -> ResearchReport {
        log_debug!("Running research for '{}'", company.trim());
        let (headlines, overview) =
            tokio::join!(self.run_headlines(company), self.run_overview(company));
        ResearchReport {
            headlines,
            overview,
        }
    }
}

/// Company names must be non-empty after trimming. The CLI refuses blank
/// input before dispatching; this check keeps library callers on the same
/// outcome channel instead of panicking.
fn validated_company(company: &str) -> Result<&str, OperationError> {
    let trimmed = company.trim();
    if trimmed.is_empty() {
        return Err(OperationError::validation("company name is empty"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ErrorKind;

    #[test]
    fn test_blank_company_is_a_validation_failure() {
        let err = validated_company("   ").expect_err("blank input");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_company_is_trimmed() {
        assert_eq!(validated_company("  Acme Corp  ").expect("valid"), "Acme Corp");
    }
}
