//! Scripted advisor for handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::BaggageVerdict;
use crate::engine::advisor::{AdvisorError, BaggageAdvisor};

/// What the mock answers on every call.
#[derive(Debug, Clone)]
pub enum Scripted {
    Verdict(BaggageVerdict),
    NotConfigured,
    Timeout,
    Upstream,
    Malformed,
}

/// Advisor that replays one scripted outcome and counts its calls.
pub struct MockAdvisor {
    outcome: Scripted,
    calls: Arc<AtomicUsize>,
}

impl MockAdvisor {
    pub fn new(outcome: Scripted) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, readable after the mock moves into app state.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl BaggageAdvisor for MockAdvisor {
    async fn assess(&self, _item: &str) -> Result<BaggageVerdict, AdvisorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Scripted::Verdict(verdict) => Ok(verdict.clone()),
            Scripted::NotConfigured => Err(AdvisorError::NotConfigured),
            Scripted::Timeout => Err(AdvisorError::Timeout),
            Scripted::Upstream => Err(AdvisorError::Upstream("API error 502".to_string())),
            Scripted::Malformed => Err(AdvisorError::MalformedReply(
                "no JSON object found in reply".to_string(),
            )),
        }
    }

    fn is_configured(&self) -> bool {
        !matches!(self.outcome, Scripted::NotConfigured)
    }
}
