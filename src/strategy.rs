//! Pluggable research strategy.
//!
//! The strategy is chosen once at startup and injected into the boundary
//! layer, so alternative research flows can be swapped in without the core
//! knowing about them.

use crate::orchestrator::{ResearchOrchestrator, ResearchReport};

use async_trait::async_trait;

/// A capability mapping a company name to a combined research report
#[async_trait]
pub trait ResearchStrategy: Send + Sync {
    async fn research(&self, company: &str) -> ResearchReport;
}

/// The standard strategy: headlines and overview through the orchestrator
pub struct StandardResearch {
    orchestrator: ResearchOrchestrator,
}

impl StandardResearch {
    pub fn new(orchestrator: ResearchOrchestrator) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &ResearchOrchestrator {
        &self.orchestrator
    }
}

#[async_trait]
impl ResearchStrategy for StandardResearch {
    async fn research(&self, company: &str) -> ResearchReport {
        self.orchestrator.run_research(company).await
    }
}
