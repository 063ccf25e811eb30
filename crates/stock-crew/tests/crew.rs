//! Stock crew behavior with substituted model providers

use agent_llm::{
    CompletionRequest, CompletionResponse, LLMError, LLMProvider, Message, StopReason, TokenUsage,
};
use async_trait::async_trait;
use mockall::mock;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use stock_crew::{ErrorKind, StockCrew, StockCrewConfig, StockError};
use tokio_test::{assert_err, assert_ok};

mock! {
    Provider {}

    #[async_trait]
    impl LLMProvider for Provider {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> agent_llm::Result<CompletionResponse>;
        fn name(&self) -> &str;
    }
}

/// Answers each call with `"{prefix} stage {n}"` and records the requests
struct RecordingProvider {
    prefix: String,
    fail_at: Option<usize>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingProvider {
    fn new(prefix: &str) -> Arc<Self> {
        Arc::new(Self {
            prefix: prefix.to_string(),
            fail_at: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing_at(stage: usize) -> Arc<Self> {
        Arc::new(Self {
            prefix: "ok".to_string(),
            fail_at: Some(stage),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for RecordingProvider {
    async fn complete(&self, request: CompletionRequest) -> agent_llm::Result<CompletionResponse> {
        let stage = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len() - 1
        };

        if self.fail_at == Some(stage) {
            return Err(LLMError::RequestFailed("upstream unavailable".to_string()));
        }

        Ok(CompletionResponse {
            message: Message::assistant(format!("{} stage {}", self.prefix, stage)),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage {
                input_tokens: 100,
                output_tokens: 20,
            },
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}

fn config(output_dir: &Path) -> StockCrewConfig {
    StockCrewConfig::builder()
        .api_key("sk-test")
        .output_dir(output_dir)
        .build()
        .unwrap()
}

fn crew(provider: Arc<RecordingProvider>, config: &StockCrewConfig) -> StockCrew {
    StockCrew::new(provider, config).unwrap()
}

fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[tokio::test]
async fn test_analyze_writes_advisor_output() {
    let dir = tempfile::tempdir().unwrap();
    let provider = RecordingProvider::new("report");
    let crew = crew(provider.clone(), &config(dir.path()));

    let report = assert_ok!(crew.analyze("AAPL").await);

    assert_eq!(report.ticker, "AAPL");
    assert_eq!(report.output_path, dir.path().join("AAPL_analysis.md"));
    assert_eq!(report.report, "report stage 2");
    assert_eq!(
        std::fs::read_to_string(&report.output_path).unwrap(),
        "report stage 2"
    );
    assert_eq!(report.model_calls, 3);
    assert_eq!(report.usage.total(), 360);
    assert_eq!(file_count(dir.path()), 1);
}

#[tokio::test]
async fn test_each_stage_sees_persona_ticker_and_prior_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let provider = RecordingProvider::new("out");
    let crew = crew(provider.clone(), &config(dir.path()));

    assert_ok!(crew.analyze("NVDA").await);

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);

    let roles = ["Market Researcher", "Financial Analyst", "Investment Advisor"];
    for (request, role) in requests.iter().zip(roles) {
        let system = request.system.as_deref().unwrap();
        assert!(system.starts_with(&format!("You are {role}.")), "{system}");
        assert!(request.last_user_text().unwrap().contains("NVDA"));
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, 4096);
    }

    assert!(!requests[0].last_user_text().unwrap().contains("out stage"));
    assert!(requests[1].last_user_text().unwrap().contains("out stage 0"));
    let last = requests[2].last_user_text().unwrap();
    assert!(last.contains("out stage 0"));
    assert!(last.contains("out stage 1"));
}

#[tokio::test]
async fn test_rerun_overwrites_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    assert_ok!(crew(RecordingProvider::new("first"), &config).analyze("MSFT").await);
    assert_ok!(crew(RecordingProvider::new("second"), &config).analyze("MSFT").await);

    let contents = std::fs::read_to_string(dir.path().join("MSFT_analysis.md")).unwrap();
    assert_eq!(contents, "second stage 2");
}

#[tokio::test]
async fn test_analyst_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let provider = RecordingProvider::failing_at(1);
    let crew = crew(provider.clone(), &config(dir.path()));

    let err = assert_err!(crew.analyze("GOOG").await);

    assert_eq!(err.kind(), ErrorKind::ModelCall);
    assert_eq!(err.stage(), Some(1));
    assert!(err.to_string().contains("Financial Analyst"));
    assert!(err.to_string().contains("upstream unavailable"));
    assert_eq!(provider.requests().len(), 2);
    assert_eq!(file_count(dir.path()), 0);
}

#[tokio::test]
async fn test_iteration_ceiling_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.max_iterations = 1;
    let provider = RecordingProvider::new("x");
    let crew = crew(provider.clone(), &config);

    let err = assert_err!(crew.analyze("AMD").await);

    assert_eq!(err.kind(), ErrorKind::LimitExceeded);
    assert_eq!(err.stage(), Some(1));
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(file_count(dir.path()), 0);
}

#[tokio::test]
async fn test_empty_ticker_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = RecordingProvider::new("x");
    let crew = crew(provider.clone(), &config(dir.path()));

    let err = assert_err!(crew.analyze("").await);

    assert!(matches!(err, StockError::InvalidSymbol(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_ticker_escaping_output_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let provider = RecordingProvider::new("x");
    let crew = crew(provider.clone(), &config(dir.path()));

    let err = assert_err!(crew.analyze("../escape").await);

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(provider.requests().is_empty());
    assert!(!dir.path().parent().unwrap().join("escape_analysis.md").exists());
}

#[tokio::test]
async fn test_unwritable_output_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let crew = crew(RecordingProvider::new("x"), &config(&missing));

    let err = assert_err!(crew.analyze("IBM").await);

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!missing.exists());
}

#[test]
fn test_missing_credential_never_reaches_provider() {
    let mut provider = MockProvider::new();
    provider.expect_complete().never();
    provider.expect_name().never();

    let config = StockCrewConfig {
        api_key: String::new(),
        ..StockCrewConfig::default()
    };
    let factory_called = AtomicBool::new(false);

    let result = StockCrew::from_config_with(&config, |_| {
        factory_called.store(true, Ordering::SeqCst);
        let provider: Arc<dyn LLMProvider> = Arc::new(provider);
        Ok(provider)
    });

    let err = match result {
        Ok(_) => panic!("expected a configuration error"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("OPENAI_API_KEY"));
    assert!(!factory_called.load(Ordering::SeqCst));
}

#[test]
fn test_missing_credential_in_environment() {
    let err = StockCrewConfig::from_lookup(|_| None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
