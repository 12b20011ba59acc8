//! External provider configuration.
//!
//! Single source of truth for the two services this tool calls and their
//! defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External services the research flow depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// News search (Google News engine via `SerpAPI`)
    SerpApi,
    /// Text completion (`OpenAI`)
    OpenAi,
}

impl Provider {
    /// All providers this tool talks to
    pub const ALL: &'static [Provider] = &[Provider::SerpApi, Provider::OpenAi];

    /// Provider name as used in config files and CLI
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SerpApi => "serpapi",
            Self::OpenAi => "openai",
        }
    }

    /// Environment variable holding the provider's API key
    pub const fn api_key_env(&self) -> &'static str {
        match self {
            Self::SerpApi => "SERPAPI_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// Default endpoint for the provider's API
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::SerpApi => "https://serpapi.com/search",
            Self::OpenAi => "https://api.openai.com/v1/completions",
        }
    }

    /// Default model, for providers that take one
    pub const fn default_model(&self) -> &'static str {
        match self {
            Self::SerpApi => "",
            Self::OpenAi => "gpt-3.5-turbo-instruct",
        }
    }

    /// What the provider contributes to a research run
    pub const fn role(&self) -> &'static str {
        match self {
            Self::SerpApi => "news headlines",
            Self::OpenAi => "company overview",
        }
    }

    /// Get all provider names as strings
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        // Accept the aliases people actually type
        let normalized = match lower.as_str() {
            "serp" | "news" => "serpapi",
            other => other,
        };

        Self::ALL
            .iter()
            .find(|p| p.name() == normalized)
            .copied()
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unrecognized provider name
#[derive(Debug, thiserror::Error)]
#[error("Unknown provider: {0}. Supported: serpapi, openai")]
pub struct UnknownProvider(pub String);
