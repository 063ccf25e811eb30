//! Prompt templating for stock-crew
//!
//! Two tools cover every prompt the pipeline sends:
//!
//! - [`JinjaTemplate`]: a named MiniJinja template, used for task descriptions
//!   interpolated with run inputs such as the ticker
//! - [`PromptBuilder`]: a fluent builder for assembling the persona, task and
//!   context sections of a request
//!
//! # Quick Start
//!
//! ```
//! use agent_prompt::{JinjaTemplate, PromptBuilder};
//! use serde_json::json;
//!
//! let template = JinjaTemplate::new("research", "Research {{ ticker }}.").unwrap();
//! let description = template.render(&json!({ "ticker": "AAPL" })).unwrap();
//! assert_eq!(description, "Research AAPL.");
//!
//! let prompt = PromptBuilder::new()
//!     .text(description)
//!     .section("Context")
//!     .text("Nothing yet.")
//!     .build();
//! assert!(prompt.contains("## Context"));
//! ```

mod builder;
mod error;
mod jinja;

pub use builder::PromptBuilder;
pub use error::{PromptError, Result};
pub use jinja::JinjaTemplate;
