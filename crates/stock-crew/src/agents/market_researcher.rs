//! Market researcher persona

use agent_core::Actor;

pub const ROLE: &str = "Market Researcher";

const GOAL: &str = "Gather and analyze market trends and company information";

const BACKSTORY: &str = "You are a skilled market researcher with a keen eye for industry trends and company performance indicators.";

/// First stage: collects news, financial statements and market position
pub fn market_researcher() -> Actor {
    Actor::new(ROLE, GOAL, BACKSTORY)
}
