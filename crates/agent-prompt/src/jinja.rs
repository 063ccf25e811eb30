//! MiniJinja-based template implementation
//!
//! This module provides [`JinjaTemplate`], a named template that uses the
//! MiniJinja engine for variable interpolation and conditional rendering.

use crate::{PromptError, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// A prompt template backed by MiniJinja
///
/// The template source is parsed once at construction so syntax errors surface
/// early. Rendering is strict: referencing a variable that was not supplied is
/// an error rather than an empty string.
///
/// # Template Syntax
///
/// The template uses standard Jinja2 syntax:
/// - Variables: `{{ variable }}`
/// - Filters: `{{ name | upper }}`
/// - Conditionals: `{% if condition %}...{% endif %}`
/// - Loops: `{% for item in items %}...{% endfor %}`
///
/// # Examples
///
/// ```
/// use agent_prompt::JinjaTemplate;
/// use serde_json::json;
///
/// let template = JinjaTemplate::new("greeting", "Hello, {{ name }}!").unwrap();
/// let result = template.render(&json!({ "name": "World" })).unwrap();
/// assert_eq!(result, "Hello, World!");
/// ```
#[derive(Debug, Clone)]
pub struct JinjaTemplate {
    name: String,
    source: String,
}

impl JinjaTemplate {
    /// Create a template, validating that it parses
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let source = source.into();

        let env = Environment::new();
        env.template_from_str(&source)
            .map_err(|e| PromptError::TemplateParseFailed {
                name: name.clone(),
                detail: e.to_string(),
            })?;

        Ok(Self { name, source })
    }

    /// Template name/identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw template source (for debugging/inspection)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template with the given variables
    pub fn render<S: Serialize>(&self, vars: &S) -> Result<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let value = minijinja::Value::from_serialize(vars);

        env.render_str(&self.source, value)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }
}
