/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Handlers depend on the `TextGenerator` trait, never on `GeminiClient`.
///
/// One prompt in, one text out. No retries, streaming or caching: a failed
/// call is surfaced to the caller exactly once.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// Google's status string for quota / rate-limit rejections.
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by provider (status 429): {message}")]
    RateLimited { message: String },

    #[error("Provider error: {0}")]
    Upstream(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// True when the provider rejected the call for quota reasons.
    ///
    /// A status code, when present, is authoritative. The `"429"` substring
    /// check applies only to `Upstream`, which carries a message and no status.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            LlmError::RateLimited { .. } => true,
            LlmError::Api { status, .. } => *status == 429,
            LlmError::Http(e) => e.status().map(|s| s.as_u16()) == Some(429),
            LlmError::Upstream(message) => message.contains("429"),
            LlmError::Parse(_) | LlmError::EmptyContent => false,
        }
    }
}

/// The model gateway seam. Implement this to swap the backend (or stub it in
/// tests) without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` unmodified and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client. Cheap to share; the inner
/// `reqwest::Client` pools connections across concurrent requests.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, api_base: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()?,
            api_key,
            model,
            api_base,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error");

            let (message, google_status) = match serde_json::from_str::<GoogleError>(&body) {
                Ok(e) => (e.error.message, e.error.status),
                Err(_) => (body, String::new()),
            };

            if status.as_u16() == 429 || google_status == RESOURCE_EXHAUSTED {
                return Err(LlmError::RateLimited { message });
            }

            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        // Some proxies answer 200 with Google's error envelope.
        if let Ok(e) = serde_json::from_str::<GoogleError>(&body) {
            warn!(status = %e.error.status, "Gemini API returned an error envelope");
            if e.error.status == RESOURCE_EXHAUSTED {
                return Err(LlmError::RateLimited {
                    message: e.error.message,
                });
            }
            return Err(LlmError::Upstream(e.error.message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        let usage = parsed.usage_metadata.as_ref();
        debug!(
            model = %self.model,
            input_tokens = usage.map(|u| u.prompt_token_count).unwrap_or_default(),
            output_tokens = usage.map(|u| u.candidates_token_count).unwrap_or_default(),
            finish_reason = ?parsed.candidates.first().and_then(|c| c.finish_reason.as_deref()),
            "Gemini call succeeded"
        );

        parsed.text().ok_or(LlmError::EmptyContent)
    }
}
