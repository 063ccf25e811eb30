//! Stock research personas

pub mod financial_analyst;
pub mod investment_advisor;
pub mod market_researcher;

pub use financial_analyst::financial_analyst;
pub use investment_advisor::investment_advisor;
pub use market_researcher::market_researcher;

use agent_core::Actor;
use std::sync::Arc;

/// The three fixed actors, in pipeline order
///
/// Built once per process and shared by every run through `Arc`.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    researcher: Arc<Actor>,
    analyst: Arc<Actor>,
    advisor: Arc<Actor>,
}

impl RoleRegistry {
    /// Create the registry with the built-in personas
    pub fn new() -> Self {
        Self {
            researcher: Arc::new(market_researcher()),
            analyst: Arc::new(financial_analyst()),
            advisor: Arc::new(investment_advisor()),
        }
    }

    pub fn researcher(&self) -> &Arc<Actor> {
        &self.researcher
    }

    pub fn analyst(&self) -> &Arc<Actor> {
        &self.analyst
    }

    pub fn advisor(&self) -> &Arc<Actor> {
        &self.advisor
    }

    /// Researcher, Analyst, Advisor
    pub fn actors(&self) -> [&Arc<Actor>; 3] {
        [&self.researcher, &self.analyst, &self.advisor]
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
