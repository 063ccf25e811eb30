//! Task prompt templates
//!
//! Each stage's description is a MiniJinja template rendered with the run's
//! ticker; the expected-output hints are fixed text.

use agent_prompt::{JinjaTemplate, Result};
use serde_json::json;

// ============================================================================
// Research
// ============================================================================

pub const RESEARCH_EXPECTED: &str = "Detailed analysis of the stock's performance indicators.";

/// Create the research task description template
pub fn research_prompt() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "stock.task.research",
        "Research and gather key information about {{ ticker }}, including recent news, financial statements, and market position.",
    )
}

// ============================================================================
// Analysis
// ============================================================================

pub const ANALYSIS_EXPECTED: &str =
    "Expected analysis results including financial health, risks, and opportunities.";

/// Create the analysis task description template
pub fn analysis_prompt() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "stock.task.analysis",
        "Analyze the gathered information for {{ ticker }}, assess the stock's financial health, and identify potential risks and opportunities.",
    )
}

// ============================================================================
// Recommendation
// ============================================================================

pub const RECOMMENDATION_EXPECTED: &str =
    "A detailed report with investment recommendations and analysis.";

/// Create the recommendation task description template
pub fn recommendation_prompt() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "stock.task.recommendation",
        "Based on the research and analysis for {{ ticker }}, provide a comprehensive investment recommendation.",
    )
}

/// Render `template` for `ticker`
pub fn render_for(template: &JinjaTemplate, ticker: &str) -> Result<String> {
    template.render(&json!({ "ticker": ticker }))
}
