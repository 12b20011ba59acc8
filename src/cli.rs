use crate::commands;
use crate::common::{CommonParams, known_provider_parser};
use crate::log_debug;
use crate::providers::Provider;
use crate::ui;

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use colored::Colorize;

const LOG_FILE: &str = "company-scout-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "company-scout: AI-assisted company research",
    long_about = "company-scout looks up a company's recent news headlines and generates a short prose overview, using two independent external services.",
    disable_version_flag = true,
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, headings, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch headlines and generate an overview in one run
    #[command(
        about = "Research a company: recent headlines plus a generated overview",
        long_about = "Run both research operations for a company. The two provider calls are independent; if one fails, the other's result is still shown."
    )]
    Research {
        #[command(flatten)]
        common: CommonParams,

        /// Company to research
        company: String,
    },

    /// Fetch recent news headlines only
    #[command(about = "Fetch recent news headlines for a company")]
    Headlines {
        #[command(flatten)]
        common: CommonParams,

        /// Company to look up
        company: String,
    },

    /// Generate a prose overview only
    #[command(about = "Generate a short overview of a company")]
    Overview {
        #[command(flatten)]
        common: CommonParams,

        /// Company to describe
        company: String,
    },

    /// Configure credentials and defaults
    #[command(about = "Configure company-scout settings and provider credentials")]
    Config {
        /// Provider the key/model/endpoint options apply to
        #[arg(long, help = "Provider to configure", value_parser = known_provider_parser)]
        provider: Option<Provider>,

        /// Set API key for the specified provider
        #[arg(long, help = "Set API key for the specified provider")]
        api_key: Option<String>,

        /// Set model for the specified provider
        #[arg(long, help = "Set model for the specified provider")]
        model: Option<String>,

        /// Set endpoint override for the specified provider
        #[arg(long, help = "Set endpoint override for the specified provider")]
        endpoint: Option<String>,

        /// Set the default headline cap
        #[arg(long, help = "Set the default maximum number of headlines")]
        max_headlines: Option<u8>,

        /// Set the per-request timeout in seconds
        #[arg(long, help = "Set the per-request timeout in seconds")]
        timeout: Option<u64>,
    },

    /// Verify that both providers are usable
    #[command(
        about = "Check provider credentials and client setup",
        long_about = "Construct each provider client and verify its credential is present, reporting per-provider status without making any network calls."
    )]
    Check,
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help including the external providers in use
fn get_dynamic_help() -> String {
    let providers_list = Provider::ALL
        .iter()
        .map(|p| format!("{} ({})", p.name().bold(), p.role()))
        .collect::<Vec<_>>()
        .join(" • ");

    format!("\nExternal Providers: {providers_list}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;

        // Honor the verbose-logging switch from the config file
        if let Ok(config) = crate::config::Config::load() {
            crate::logger::set_verbose_logging(config.verbose_logging);
        }
    } else {
        crate::logger::disable_logging();
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["company-scout", "--help"]);
        Ok(())
    }
}

/// Handle the command based on parsed arguments
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Research { common, company } => {
            log_debug!("Handling 'research' command with common: {:?}", common);
            commands::handle_research_command(common, company).await
        }
        Commands::Headlines { common, company } => {
            log_debug!("Handling 'headlines' command with common: {:?}", common);
            commands::handle_headlines_command(common, company).await
        }
        Commands::Overview { common, company } => {
            log_debug!("Handling 'overview' command with common: {:?}", common);
            commands::handle_overview_command(common, company).await
        }
        Commands::Config {
            provider,
            api_key,
            model,
            endpoint,
            max_headlines,
            timeout,
        } => commands::handle_config_command(
            provider,
            api_key,
            model,
            endpoint,
            max_headlines,
            timeout,
        ),
        Commands::Check => commands::handle_check_command(),
    }
}
