//! GeminiDraftingAgent - Direct REST API implementation for Gemini.
//!
//! Sends one `generateContent` request per draft and never retries. All
//! failures are flattened into fixed, human-readable messages because the
//! drafting contract returns text, not errors.

use async_trait::async_trait;
use nexbound_core::config::DraftingSettings;
use nexbound_core::draft::{DraftFormFields, DraftingService};
use nexbound_core::secret::SecretService;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::build_draft_prompt;

pub const MISSING_API_KEY_MESSAGE: &str =
    "Error: API Key is missing. Please configure the API_KEY environment variable.";
pub const GENERATION_FAILED_MESSAGE: &str =
    "An error occurred while generating the email. Please try again.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Failed to generate content.";

#[derive(Debug, Error)]
enum DraftingError {
    #[error("failed to build prompt: {0}")]
    Prompt(#[from] minijinja::Error),

    #[error("Gemini API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {message}")]
    Http { status: StatusCode, message: String },

    #[error("Gemini API returned no text in the response candidates")]
    Empty,
}

/// Drafting collaborator that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiDraftingAgent {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiDraftingAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiDraftingAgent")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiDraftingAgent {
    /// Creates an agent. Without an API key every draft returns
    /// [`MISSING_API_KEY_MESSAGE`] and no request is made.
    pub fn new(api_key: Option<String>, settings: &DraftingSettings) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|err| {
            tracing::warn!("[Drafting] Falling back to default HTTP client: {}", err);
            Client::new()
        });
        Self::with_client(client, api_key, settings)
    }

    /// Creates an agent around a preconfigured HTTP client. The settings'
    /// timeout is not applied; configure it on `client`.
    pub fn with_client(client: Client, api_key: Option<String>, settings: &DraftingSettings) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the API key through a [`SecretService`].
    ///
    /// A secret store that fails to load is treated as having no key; the
    /// writer then reports the missing key instead of failing startup.
    pub async fn from_secrets(secrets: &dyn SecretService, settings: &DraftingSettings) -> Self {
        let config = match secrets.load_secrets().await {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("[Drafting] Could not load secrets: {}", err);
                None
            }
        };

        let gemini = config.as_ref().and_then(|c| c.gemini.as_ref());
        let api_key = config
            .as_ref()
            .and_then(|c| c.gemini_api_key())
            .map(str::to_string);
        let mut settings = settings.clone();
        if let Some(model) = gemini.and_then(|g| g.model_name.clone()) {
            settings.model = model;
        }

        if api_key.is_none() {
            tracing::info!("[Drafting] No API key configured; AI writer will report it");
        }
        Self::new(api_key, &settings)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_request(&self, api_key: &str, prompt: String) -> Result<String, DraftingError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text_response(parsed)
    }
}

#[async_trait]
impl DraftingService for GeminiDraftingAgent {
    async fn generate_draft(&self, request: &DraftFormFields) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return MISSING_API_KEY_MESSAGE.to_string();
        };

        let prompt = match build_draft_prompt(request) {
            Ok(prompt) => prompt,
            Err(err) => {
                tracing::error!("[Drafting] {}", DraftingError::from(err));
                return GENERATION_FAILED_MESSAGE.to_string();
            }
        };

        tracing::debug!(model = %self.model, "[Drafting] Requesting draft");
        match self.send_request(api_key, prompt).await {
            Ok(text) => text,
            Err(DraftingError::Empty) => {
                tracing::warn!("[Drafting] Gemini returned an empty draft");
                EMPTY_RESPONSE_MESSAGE.to_string()
            }
            Err(err) => {
                tracing::error!("[Drafting] Gemini API error: {}", err);
                GENERATION_FAILED_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Result<String, DraftingError> {
    let text: String = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        Err(DraftingError::Empty)
    } else {
        Ok(text)
    }
}

fn map_http_error(status: StatusCode, body: String) -> DraftingError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    DraftingError::Http { status, message }
}
