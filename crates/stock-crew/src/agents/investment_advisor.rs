//! Investment advisor persona

use agent_core::Actor;

pub const ROLE: &str = "Investment Advisor";

const GOAL: &str = "Provide actionable investment advice based on analysis and research";

const BACKSTORY: &str = "You are a seasoned investment advisor known for your balanced and insightful recommendations.";

/// Final stage: writes the recommendation that ends up in the report file
pub fn investment_advisor() -> Actor {
    Actor::new(ROLE, GOAL, BACKSTORY)
}
