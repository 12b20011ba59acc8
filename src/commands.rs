use crate::common::CommonParams;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::headlines::SerpApiNews;
use crate::log_debug;
use crate::messages;
use crate::orchestrator::ResearchOrchestrator;
use crate::outcome::{OperationError, Outcome};
use crate::overview::OpenAiCompletions;
use crate::providers::Provider;
use crate::strategy::{ResearchStrategy, StandardResearch};
use crate::ui;

use anyhow::Result;
use colored::Colorize;

/// Load config, apply overrides, and resolve credentials for this action
fn prepare(common: &CommonParams) -> Result<(Config, Credentials)> {
    let mut config = Config::load()?;
    common.apply_to_config(&mut config);
    let credentials = Credentials::load(&config);
    Ok((config, credentials))
}

/// Report the credential gate to the user. Returns true when research may
/// proceed; otherwise the missing keys are named and the action is blocked
/// for this session.
fn report_credential_gate(orchestrator: &ResearchOrchestrator) -> bool {
    if orchestrator.can_run() {
        return true;
    }

    for key in orchestrator.missing_credentials() {
        ui::print_error(&format!("Missing {key} in the environment or config file."));
    }
    ui::print_info(
        "Set the missing key(s), or store them with 'company-scout config --provider <name> --api-key <key>'.",
    );
    false
}

/// Handle the `research` command: both operations, each reported on its own
pub async fn handle_research_command(common: CommonParams, company: String) -> Result<()> {
    let company = company.trim().to_string();
    if company.is_empty() {
        // Blank input disables the action; it is not an error dialog
        ui::print_warning("Company name is empty; nothing to research.");
        return Ok(());
    }

    let (config, credentials) = prepare(&common)?;
    let orchestrator = ResearchOrchestrator::new(&config, credentials)?;
    if !report_credential_gate(&orchestrator) {
        return Ok(());
    }

    // The strategy is fixed at startup; alternative flows plug in here
    let strategy: Box<dyn ResearchStrategy> = Box::new(StandardResearch::new(orchestrator));

    let waiting = messages::get_waiting_message();
    let spinner = ui::create_spinner(&waiting.text.color(waiting.color).to_string());
    let report = strategy.research(&company).await;
    spinner.finish_and_clear();

    ui::print_heading("Top News Headlines");
    render_headlines(&report.headlines);
    ui::print_newline();
    ui::print_heading("Generated Overview");
    render_overview(&report.overview);

    Ok(())
}

/// Handle the `headlines` command: the news path alone
pub async fn handle_headlines_command(common: CommonParams, company: String) -> Result<()> {
    let company = company.trim().to_string();
    if company.is_empty() {
        ui::print_warning("Company name is empty; nothing to research.");
        return Ok(());
    }

    let (config, credentials) = prepare(&common)?;
    let orchestrator = ResearchOrchestrator::new(&config, credentials)?;
    if !report_credential_gate(&orchestrator) {
        return Ok(());
    }

    let spinner = ui::create_spinner("Scanning the newswires...");
    let outcome = orchestrator.run_headlines(&company).await;
    spinner.finish_and_clear();

    ui::print_heading("Top News Headlines");
    render_headlines(&outcome);

    Ok(())
}

/// Handle the `overview` command: the completion path alone
pub async fn handle_overview_command(common: CommonParams, company: String) -> Result<()> {
    let company = company.trim().to_string();
    if company.is_empty() {
        ui::print_warning("Company name is empty; nothing to research.");
        return Ok(());
    }

    let (config, credentials) = prepare(&common)?;
    let orchestrator = ResearchOrchestrator::new(&config, credentials)?;
    if !report_credential_gate(&orchestrator) {
        return Ok(());
    }

    let spinner = ui::create_spinner("Drafting the company dossier...");
    let outcome = orchestrator.run_overview(&company).await;
    spinner.finish_and_clear();

    ui::print_heading("Generated Overview");
    render_overview(&outcome);

    Ok(())
}

fn render_headlines(outcome: &Outcome<Vec<String>>) {
    match outcome {
        Ok(headlines) if headlines.is_empty() => ui::print_warning("No headlines returned."),
        Ok(headlines) => {
            for (i, headline) in headlines.iter().enumerate() {
                ui::print_message(&format!("{}. {}", i + 1, headline));
            }
        }
        Err(e) => ui::print_error(&format!("Headlines failed: {e}")),
    }
}

fn render_overview(outcome: &Outcome<String>) {
    match outcome {
        Ok(overview) if overview.is_empty() => ui::print_warning("No overview returned."),
        Ok(overview) => ui::print_message(overview),
        Err(e) => ui::print_error(&format!("Overview failed: {e}")),
    }
}

/// Handle the `config` command
pub fn handle_config_command(
    provider: Option<Provider>,
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    max_headlines: Option<u8>,
    timeout: Option<u64>,
) -> Result<()> {
    log_debug!(
        "Handling 'config' command for provider: {:?}, model: {:?}, endpoint: {:?}",
        provider,
        model,
        endpoint
    );

    let mut config = Config::load()?;
    let mut changes_made = false;

    if let Some(provider) = provider {
        config.update(provider, api_key, model, endpoint);
        changes_made = true;
    } else if api_key.is_some() || model.is_some() || endpoint.is_some() {
        ui::print_error("--api-key, --model and --endpoint require --provider.");
        return Ok(());
    }

    if let Some(limit) = max_headlines {
        config.max_headlines = limit;
        changes_made = true;
    }
    if let Some(secs) = timeout {
        config.request_timeout_secs = secs;
        changes_made = true;
    }

    if changes_made {
        config.save()?;
        ui::print_success("Configuration updated.");
    }

    print_config_summary(&config);
    Ok(())
}

/// Current configuration, with secrets elided
fn print_config_summary(config: &Config) {
    ui::print_info("Current configuration:");
    ui::print_message(&format!("  Max headlines: {}", config.max_headlines));
    ui::print_message(&format!(
        "  Request timeout: {}s",
        config.request_timeout_secs
    ));
    for provider in Provider::ALL {
        let key_state = config
            .service(*provider)
            .map_or("not set", |s| if s.api_key.is_empty() { "not set" } else { "set" });
        let model = config.model_for(*provider);
        let model = if model.is_empty() { "-".to_string() } else { model };
        ui::print_message(&format!(
            "  {} ({}): api_key {}, model {}, endpoint {}",
            provider,
            provider.role(),
            key_state,
            model,
            config.endpoint_for(*provider),
        ));
    }
}

/// Handle the `check` command: startup health check for both providers.
/// Constructs each transport and reports per-service status through the same
/// outcome channel the clients use.
pub fn handle_check_command() -> Result<()> {
    let config = Config::load()?;
    let credentials = Credentials::load(&config);

    let mut ready = true;
    for provider in Provider::ALL {
        let construction = match provider {
            Provider::SerpApi => SerpApiNews::new(&config).map(|_| ()),
            Provider::OpenAi => OpenAiCompletions::new(&config).map(|_| ()),
        };

        let status: Outcome<()> = match construction {
            Err(e) => Err(OperationError::config(format!(
                "client construction failed: {e}"
            ))),
            Ok(()) if !credentials.has_usable_key(*provider) => Err(OperationError::config(
                format!("missing credential: set {}", provider.api_key_env()),
            )),
            Ok(()) => Ok(()),
        };

        match status {
            Ok(()) => ui::print_success(&format!("{} ({}): ready", provider, provider.role())),
            Err(e) => {
                ready = false;
                ui::print_error(&format!("{} ({}): {}", provider, provider.role(), e));
            }
        }
    }

    if ready {
        ui::print_success("All providers ready.");
    } else {
        ui::print_info(
            "Fix the failing provider(s) above, then run 'company-scout check' again.",
        );
    }

    Ok(())
}
