//! Stock research task list

use crate::agents::RoleRegistry;
use crate::error::{Result, StockError};
use crate::prompts;
use agent_workflow::TaskDescriptor;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Report file for `ticker` inside `output_dir`
pub fn output_path_for(output_dir: &Path, ticker: &str) -> PathBuf {
    output_dir.join(format!("{ticker}_analysis.md"))
}

fn is_plain_file_name(ticker: &str) -> bool {
    let mut components = Path::new(ticker).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Build the research, analysis and recommendation tasks for `ticker`
///
/// The ticker is used verbatim; it is not checked against real symbols, but it
/// must name a single file inside `output_dir`. Only the recommendation task
/// carries an output file.
pub fn build_tasks(
    registry: &RoleRegistry,
    ticker: &str,
    output_dir: &Path,
) -> Result<Vec<TaskDescriptor>> {
    if ticker.is_empty() {
        return Err(StockError::InvalidSymbol(
            "ticker must not be empty".to_string(),
        ));
    }
    if !is_plain_file_name(ticker) {
        return Err(StockError::InvalidSymbol(format!(
            "ticker {ticker:?} would place the report outside the output directory"
        )));
    }

    let research = TaskDescriptor::builder("research", Arc::clone(registry.researcher()))
        .description(prompts::render_for(&prompts::research_prompt()?, ticker)?)
        .expected_output(prompts::RESEARCH_EXPECTED)
        .build()?;

    let analysis = TaskDescriptor::builder("analysis", Arc::clone(registry.analyst()))
        .description(prompts::render_for(&prompts::analysis_prompt()?, ticker)?)
        .expected_output(prompts::ANALYSIS_EXPECTED)
        .build()?;

    let recommendation =
        TaskDescriptor::builder("recommendation", Arc::clone(registry.advisor()))
            .description(prompts::render_for(&prompts::recommendation_prompt()?, ticker)?)
            .expected_output(prompts::RECOMMENDATION_EXPECTED)
            .output_file(output_path_for(output_dir, ticker))
            .build()?;

    Ok(vec![research, analysis, recommendation])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tasks_in_order() {
        let registry = RoleRegistry::new();
        let tasks = build_tasks(&registry, "AAPL", Path::new(".")).unwrap();

        let names: Vec<&str> = tasks.iter().map(TaskDescriptor::name).collect();
        assert_eq!(names, vec!["research", "analysis", "recommendation"]);

        assert!(Arc::ptr_eq(tasks[0].actor(), registry.researcher()));
        assert!(Arc::ptr_eq(tasks[1].actor(), registry.analyst()));
        assert!(Arc::ptr_eq(tasks[2].actor(), registry.advisor()));
    }

    #[test]
    fn test_ticker_in_every_description() {
        let registry = RoleRegistry::new();
        for ticker in ["MSFT", "brk.b", "Not A Real Ticker", "7203.T"] {
            let tasks = build_tasks(&registry, ticker, Path::new("out")).unwrap();
            assert_eq!(tasks.len(), 3);
            for task in &tasks {
                assert!(task.description().contains(ticker), "{}", task.description());
            }
        }
    }

    #[test]
    fn test_only_last_task_has_output_file() {
        let registry = RoleRegistry::new();
        let tasks = build_tasks(&registry, "TSLA", Path::new("/reports")).unwrap();

        assert_eq!(tasks[0].output_file(), None);
        assert_eq!(tasks[1].output_file(), None);
        assert_eq!(
            tasks[2].output_file(),
            Some(Path::new("/reports/TSLA_analysis.md"))
        );
    }

    #[test]
    fn test_expected_outputs() {
        let registry = RoleRegistry::new();
        let tasks = build_tasks(&registry, "TSLA", Path::new(".")).unwrap();

        assert_eq!(
            tasks[0].expected_output(),
            "Detailed analysis of the stock's performance indicators."
        );
        assert_eq!(
            tasks[2].expected_output(),
            "A detailed report with investment recommendations and analysis."
        );
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let registry = RoleRegistry::new();
        let err = build_tasks(&registry, "", Path::new(".")).unwrap_err();
        assert!(matches!(err, StockError::InvalidSymbol(_)));
    }

    #[test]
    fn test_path_like_tickers_rejected() {
        let registry = RoleRegistry::new();
        for ticker in ["/tmp/x", "../x", "a/b", "..", ".", "x/.."] {
            let err = build_tasks(&registry, ticker, Path::new("/srv/reports")).unwrap_err();
            assert!(matches!(err, StockError::InvalidSymbol(_)), "{ticker}");
            assert_eq!(err.kind(), crate::ErrorKind::Validation);
        }
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("."), "NVDA"),
            PathBuf::from("./NVDA_analysis.md")
        );
    }
}
