use crate::config::Config;
use crate::providers::Provider;

use clap::Args;
use std::str::FromStr;

#[derive(Args, Clone, Default, Debug)]
pub struct CommonParams {
    /// Cap on the number of headlines fetched per run
    #[arg(
        short = 'n',
        long = "limit",
        help = "Maximum number of headlines to fetch"
    )]
    pub limit: Option<u8>,

    /// Per-request timeout in seconds
    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    /// Completion model used for the overview
    #[arg(long, help = "Completion model to use for the overview")]
    pub model: Option<String>,
}

impl CommonParams {
    /// Apply command-line overrides to the loaded configuration
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(limit) = self.limit {
            config.max_headlines = limit;
        }

        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }

        if let Some(model) = &self.model {
            config.update(Provider::OpenAi, None, Some(model.clone()), None);
        }
    }
}

/// Validates that a provider name is one this tool talks to
pub fn known_provider_parser(s: &str) -> Result<Provider, String> {
    Provider::from_str(s).map_err(|_| {
        format!(
            "Invalid provider '{}'. Available providers: {}",
            s,
            Provider::all_names().join(", ")
        )
    })
}
