//! Advisor abstraction - turns an item name into a baggage verdict.
//!
//! The HTTP layer depends only on this trait, so the upstream provider can
//! be swapped (or mocked in tests) without touching the handlers.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{BaggageVerdict, ReplyParseError};

/// Errors raised while asking the upstream provider about an item.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("OpenRouter API key not configured")]
    NotConfigured,

    #[error("upstream call exceeded its time budget")]
    Timeout,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("unparseable model reply: {0}")]
    MalformedReply(String),
}

impl From<ReplyParseError> for AdvisorError {
    fn from(e: ReplyParseError) -> Self {
        AdvisorError::MalformedReply(e.to_string())
    }
}

/// Trait for anything that can judge whether an item may be packed.
#[async_trait]
pub trait BaggageAdvisor: Send + Sync {
    /// Assess a single, already-validated item name.
    ///
    /// Implementations make at most one upstream call per invocation.
    async fn assess(&self, item: &str) -> Result<BaggageVerdict, AdvisorError>;

    /// Whether the advisor has the credentials it needs.
    fn is_configured(&self) -> bool;
}
