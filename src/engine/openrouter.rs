//! OpenRouter-backed advisor.
//!
//! Sends one chat-completion request per item and parses the model's reply
//! into a [`BaggageVerdict`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::{LlmConfig, DEFAULT_BASE_URL};
use crate::domain::BaggageVerdict;
use crate::engine::advisor::{AdvisorError, BaggageAdvisor};

/// OpenRouter API configuration.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API key for OpenRouter. Empty means not configured.
    pub api_key: String,
    /// API root, without the trailing `/chat/completions`.
    pub base_url: String,
    /// Model to use (default: anthropic/claude-3.5-sonnet).
    pub model: String,
    /// Time budget for the whole request, body included.
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
    /// App attribution sent as `X-Title`.
    pub app_title: String,
    /// App attribution sent as `HTTP-Referer`, if any.
    pub app_url: Option<String>,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "anthropic/claude-3.5-sonnet".to_string(),
            timeout: Duration::from_secs(30),
            max_tokens: 500,
            temperature: 0.1,
            app_title: "TSA Item Checker".to_string(),
            app_url: None,
        }
    }
}

impl From<&LlmConfig> for OpenRouterConfig {
    fn from(llm: &LlmConfig) -> Self {
        Self {
            api_key: llm.openrouter_api_key.trim().to_string(),
            base_url: llm.base_url.trim_end_matches('/').to_string(),
            model: llm.model.clone(),
            timeout: Duration::from_secs(llm.timeout_secs),
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            app_title: llm.app_title.clone(),
            app_url: llm
                .app_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        }
    }
}

/// Request to OpenRouter API.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from OpenRouter API.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Build the instruction prompt for one item.
///
/// The item is embedded as a JSON string literal so stray quotes in user
/// input cannot break out of the template.
pub fn build_prompt(item: &str) -> String {
    let quoted = Value::String(item.to_string());
    format!(
        r#"You are a TSA (Transportation Security Administration) expert.

For the item {quoted}, please provide:
1. Whether it's allowed in carry-on baggage (true/false)
2. Whether it's allowed in checked baggage (true/false)
3. A brief description of the item category
4. Any specific restrictions or requirements

Please respond in JSON format with these exact keys:
{{
    "carry_on_allowed": boolean,
    "checked_baggage_allowed": boolean,
    "description": "brief description of the item and its category",
    "restrictions": "any specific restrictions, size limits, or special requirements"
}}

Base your response on official TSA guidelines. If unsure about an item, err on the side of caution and suggest checking with TSA directly."#
    )
}

/// Advisor that asks an OpenRouter-hosted model.
pub struct OpenRouterAdvisor {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterAdvisor {
    /// Create a new advisor with a pooled HTTP client.
    pub fn new(config: OpenRouterConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AdvisorError::Upstream(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Send the prompt and return the raw reply text.
    async fn complete(&self, prompt: String) -> Result<String, AdvisorError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut builder = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", &self.config.app_title);
        if let Some(url) = &self.config.app_url {
            builder = builder.header("HTTP-Referer", url);
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %body, "OpenRouter API error body");
            return Err(AdvisorError::Upstream(format!("API error {}", status)));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AdvisorError::Timeout
            } else {
                AdvisorError::Upstream(format!("Failed to parse response: {}", e))
            }
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AdvisorError::MalformedReply("reply had no content".to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> AdvisorError {
    if e.is_timeout() {
        AdvisorError::Timeout
    } else {
        AdvisorError::Upstream(format!("Request failed: {}", e))
    }
}

#[async_trait]
impl BaggageAdvisor for OpenRouterAdvisor {
    async fn assess(&self, item: &str) -> Result<BaggageVerdict, AdvisorError> {
        if !self.is_configured() {
            return Err(AdvisorError::NotConfigured);
        }

        tracing::debug!(item = %item, model = %self.config.model, "Sending item to OpenRouter");

        let reply = self.complete(build_prompt(item)).await?;

        BaggageVerdict::from_reply(&reply).map_err(|e| {
            tracing::debug!(error = %e, reply = %reply, "Unparseable AI response");
            AdvisorError::from(e)
        })
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
