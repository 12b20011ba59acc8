//! company-scout - AI-assisted company research from the command line
//!
//! Given a company name, this crate fetches recent news headlines from a
//! news-search provider and generates a short prose overview from a
//! completion provider. The two calls are credential-gated and fully
//! independent: one provider failing never hides the other's result.

#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod credentials;
pub mod headlines;
pub mod logger;
pub mod messages;
pub mod orchestrator;
pub mod outcome;
pub mod overview;
pub mod providers;
pub mod strategy;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::{Config, ServiceConfig};
pub use credentials::Credentials;
pub use orchestrator::{ResearchOrchestrator, ResearchReport};
pub use outcome::{ErrorKind, OperationError, Outcome};
pub use providers::Provider;
