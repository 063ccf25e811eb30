//! Financial analyst persona

use agent_core::Actor;

pub const ROLE: &str = "Financial Analyst";

const GOAL: &str = "Provide accurate financial analysis and stock recommendations";

const BACKSTORY: &str =
    "You are an experienced financial analyst with a strong track record in stock market analysis.";

/// Second stage: turns the research into an assessment of health, risks and opportunities
pub fn financial_analyst() -> Actor {
    Actor::new(ROLE, GOAL, BACKSTORY)
}
