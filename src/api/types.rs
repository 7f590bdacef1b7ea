//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::BaggageVerdict;

// ==================== Check Item ====================

/// Request to check a single item.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckItemRequest {
    /// Free-text item name, e.g. "nail scissors". Missing or null counts as empty.
    #[serde(default)]
    #[schema(example = "laptop")]
    pub item: Option<String>,
}

/// Baggage rules for the requested item.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckItemResponse {
    /// The item exactly as it was submitted.
    pub item: String,
    /// Allowed in the cabin.
    pub carry_on_allowed: bool,
    /// Allowed in the hold.
    pub checked_baggage_allowed: bool,
    /// Item category description.
    pub description: String,
    /// Specific restrictions or requirements.
    pub restrictions: String,
}

impl CheckItemResponse {
    pub fn new(item: String, verdict: BaggageVerdict) -> Self {
        Self {
            item,
            carry_on_allowed: verdict.carry_on_allowed,
            checked_baggage_allowed: verdict.checked_baggage_allowed,
            description: verdict.description,
            restrictions: verdict.restrictions,
        }
    }
}

// ==================== Health ====================

/// Root liveness response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Whether an OpenRouter API key is present.
    pub api_key_configured: bool,
    /// Service version.
    pub version: String,
    /// Timestamp.
    pub timestamp: String,
}
