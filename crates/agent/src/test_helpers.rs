//! Shared test helpers for orchestrator tests.

use chrono::Utc;
use sandy_core::error::ProviderError;
use sandy_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use std::sync::Mutex;

/// A mock provider that replays scripted outcomes in order.
///
/// Each call to `complete` returns the next outcome and records the request.
/// Panics if more calls are made than outcomes provided.
pub struct ScriptedProvider {
    outcomes: Mutex<Vec<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: Vec<Result<ProviderResponse, ProviderError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Successful text replies, one per call.
    pub fn replies(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(text_response(t))).collect())
    }

    /// A provider whose only call fails.
    pub fn failing(err: ProviderError) -> Self {
        Self::new(vec![Err(err)])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let outcomes = self.outcomes.lock().unwrap();
        let call = requests.len();

        if call >= outcomes.len() {
            panic!(
                "ScriptedProvider: no more outcomes (call #{call}, have {})",
                outcomes.len()
            );
        }

        requests.push(request);
        outcomes[call].clone()
    }
}

/// A plain text response with fixed usage.
pub fn text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        content: text.into(),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
        created: Utc::now(),
    }
}
