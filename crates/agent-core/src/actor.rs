//! Actor persona records

use serde::{Deserialize, Serialize};

/// A named persona that conditions a language-model request
///
/// Actors are plain immutable records. Every actor shares the same shape, so
/// there is no trait or hierarchy here: the pipeline reads the three strings and
/// folds them into the system prompt of each request the actor is bound to.
///
/// # Example
///
/// ```
/// use agent_core::Actor;
///
/// let actor = Actor::new(
///     "Market Researcher",
///     "Gather and analyze market trends",
///     "You have a keen eye for industry trends.",
/// );
///
/// assert_eq!(actor.role(), "Market Researcher");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    role: String,
    goal: String,
    backstory: String,
}

impl Actor {
    /// Create a new actor
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// Role name, e.g. "Financial Analyst"
    pub fn role(&self) -> &str {
        &self.role
    }

    /// What the actor is trying to achieve
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Background used to condition the model's behavior
    pub fn backstory(&self) -> &str {
        &self.backstory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let actor = Actor::new("Advisor", "Advise", "Seasoned");
        assert_eq!(actor.role(), "Advisor");
        assert_eq!(actor.goal(), "Advise");
        assert_eq!(actor.backstory(), "Seasoned");
    }

    #[test]
    fn test_serialization() {
        let actor = Actor::new("Advisor", "Advise", "Seasoned");
        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(json["role"], "Advisor");

        let back: Actor = serde_json::from_value(json).unwrap();
        assert_eq!(back, actor);
    }
}
