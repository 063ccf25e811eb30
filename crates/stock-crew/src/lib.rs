//! Stock research crew
//!
//! Three fixed personas work one ticker in sequence:
//!
//! 1. **Market Researcher** gathers news, financial statements and market position
//! 2. **Financial Analyst** assesses financial health, risks and opportunities
//! 3. **Investment Advisor** writes the recommendation
//!
//! Each stage sees every earlier stage's output. The advisor's text is saved
//! as `{ticker}_analysis.md` in the configured output directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use stock_crew::{StockCrew, StockCrewConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     agent_utils::load_env_file(None)?;
//!     let config = StockCrewConfig::from_env()?;
//!
//!     let crew = StockCrew::from_config(&config)?;
//!     let report = crew.analyze("AAPL").await?;
//!     println!("Saved {}", report.output_path.display());
//!
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod config;
pub mod crew;
pub mod error;
pub mod prompts;
pub mod tasks;

// Re-export main types for convenience
pub use agents::RoleRegistry;
pub use config::{StockCrewConfig, StockCrewConfigBuilder};
pub use crew::{CrewReport, StockCrew};
pub use error::{ErrorKind, Result, StockError};
pub use tasks::{build_tasks, output_path_for};
