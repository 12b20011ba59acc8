//! Credential store.
//!
//! The two provider keys are resolved once at startup and never mutated
//! afterwards. An absent key (`None`) is a configuration problem the user
//! fixes externally; a present-but-rejected key surfaces later as a provider
//! failure. Loading never fails; absence only gates downstream actions.

use crate::config::Config;
use crate::providers::Provider;
use crate::{log_error, log_info};

/// Immutable snapshot of the two provider credentials for this session
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    news_api_key: Option<String>,
    completion_api_key: Option<String>,
}

impl Credentials {
    /// Resolve both keys from the environment, falling back to the config
    /// file. Emits one diagnostic record per key; missing keys do not abort
    /// the load.
    pub fn load(config: &Config) -> Self {
        let credentials = Self {
            news_api_key: resolve_key(Provider::SerpApi, config),
            completion_api_key: resolve_key(Provider::OpenAi, config),
        };

        for provider in Provider::ALL {
            if credentials.has_usable_key(*provider) {
                log_info!("{} loaded", provider.api_key_env());
            } else {
                log_error!("{} is missing", provider.api_key_env());
            }
        }

        credentials
    }

    /// Construct directly from parts (used by tests and embedders)
    pub fn new(news_api_key: Option<String>, completion_api_key: Option<String>) -> Self {
        Self {
            news_api_key,
            completion_api_key,
        }
    }

    /// The news-search key, if one was supplied
    pub fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }

    /// The completion key, if one was supplied
    pub fn completion_api_key(&self) -> Option<&str> {
        self.completion_api_key.as_deref()
    }

    fn key_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::SerpApi => self.news_api_key(),
            Provider::OpenAi => self.completion_api_key(),
        }
    }

    /// True when the provider's key is present and non-blank
    pub fn has_usable_key(&self, provider: Provider) -> bool {
        self.key_for(provider)
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// True when both keys are present and non-blank
    pub fn is_complete(&self) -> bool {
        Provider::ALL.iter().all(|p| self.has_usable_key(*p))
    }

    /// Environment-variable names of the keys that are absent or blank
    pub fn missing(&self) -> Vec<&'static str> {
        Provider::ALL
            .iter()
            .filter(|p| !self.has_usable_key(**p))
            .map(Provider::api_key_env)
            .collect()
    }
}

fn resolve_key(provider: Provider, config: &Config) -> Option<String> {
    pick_key(
        std::env::var(provider.api_key_env()).ok(),
        config.service(provider).map(|s| s.api_key.clone()),
    )
}

/// Environment takes precedence; a key stored in the config file counts only
/// when non-empty. An env var that is set but empty still yields `Some("")`,
/// keeping "present but blank" distinguishable from "absent".
fn pick_key(env_value: Option<String>, config_value: Option<String>) -> Option<String> {
    if let Some(value) = env_value {
        return Some(value);
    }

    config_value.filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_credentials() {
        let creds = Credentials::new(Some("news-key".to_string()), Some("ai-key".to_string()));
        assert!(creds.is_complete());
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_absent_key_reported_by_env_name() {
        let creds = Credentials::new(None, Some("ai-key".to_string()));
        assert!(!creds.is_complete());
        assert_eq!(creds.missing(), vec!["SERPAPI_KEY"]);
    }

    #[test]
    fn test_blank_key_gates_like_absent() {
        let creds = Credentials::new(Some("  ".to_string()), None);
        assert!(!creds.is_complete());
        assert_eq!(creds.missing(), vec!["SERPAPI_KEY", "OPENAI_API_KEY"]);
        // Present-but-blank is still observable as present
        assert_eq!(creds.news_api_key(), Some("  "));
    }

    #[test]
    fn test_env_takes_precedence_over_config() {
        let picked = pick_key(Some("env-key".to_string()), Some("file-key".to_string()));
        assert_eq!(picked.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_config_fallback_ignores_empty_values() {
        assert_eq!(
            pick_key(None, Some("file-key".to_string())).as_deref(),
            Some("file-key")
        );
        assert_eq!(pick_key(None, Some(String::new())), None);
        assert_eq!(pick_key(None, None), None);
    }

    #[test]
    fn test_empty_env_value_stays_present() {
        // Set-but-empty in the environment is not silently dropped
        assert_eq!(
            pick_key(Some(String::new()), Some("file-key".to_string())).as_deref(),
            Some("")
        );
    }
}
