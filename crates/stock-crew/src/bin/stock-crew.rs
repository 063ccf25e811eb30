//! Stock research CLI
//!
//! Runs the researcher, analyst and advisor personas over one ticker and
//! saves the advisor's recommendation as `{ticker}_analysis.md`.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables (or put them in .env)
//! export OPENAI_API_KEY="sk-..."
//! export OPENAI_MODEL="gpt-4o"
//!
//! # Run the crew
//! cargo run --bin stock-crew -- AAPL --verbose
//! ```

use agent_utils::{init_tracing, load_env_file};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use stock_crew::{StockCrew, StockCrewConfig, StockError};

#[derive(Parser, Debug)]
#[command(name = "stock-crew", version)]
#[command(
    about = "Research a stock with three LLM personas and save the report",
    long_about = None
)]
struct Args {
    /// Ticker symbol to analyze (prompted for when omitted)
    ticker: Option<String>,

    /// Log per-stage progress
    #[arg(short, long)]
    verbose: bool,

    /// Environment file to load instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Model name (overrides OPENAI_MODEL)
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Directory for the report file (overrides STOCK_CREW_OUTPUT_DIR)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum number of model calls per run
    #[arg(long, value_name = "N")]
    max_iterations: Option<usize>,

    /// Wall-clock limit per run in seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u64>,
}

impl Args {
    fn apply(&self, config: &mut StockCrewConfig) {
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(max) = self.max_iterations {
            config.max_iterations = max;
        }
        if let Some(secs) = self.time_limit {
            config.time_limit = Duration::from_secs(secs);
        }
        config.verbose = self.verbose;
    }
}

fn prompt_ticker() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the stock ticker symbol to analyze: ")?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Before tracing, so RUST_LOG from the file applies
    load_env_file(args.env_file.as_deref()).map_err(StockError::from)?;
    init_tracing(args.verbose);

    let mut config = StockCrewConfig::from_env()?;
    args.apply(&mut config);
    let crew = StockCrew::from_config(&config)?;

    let ticker = match &args.ticker {
        Some(ticker) => ticker.clone(),
        None => prompt_ticker()?,
    };
    let ticker = ticker.trim();

    println!("Analyzing stock: {ticker}");

    let report = crew.analyze(ticker).await.map_err(|e| {
        let kind = e.kind();
        anyhow::Error::new(e).context(format!("{kind}: analysis of {ticker} failed"))
    })?;

    if config.verbose {
        println!(
            "{} model call(s), {} tokens",
            report.model_calls,
            report.usage.total()
        );
    }
    println!(
        "Analysis complete. Results saved in {}",
        report.output_path.display()
    );

    Ok(())
}
