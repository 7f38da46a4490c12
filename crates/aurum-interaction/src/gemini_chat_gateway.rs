//! GeminiChatGateway - multi-turn chat over the Gemini REST API.
//!
//! Every request carries the whole conversation so far plus the system
//! instruction; the session remembers turns only once the model has answered.

use async_trait::async_trait;
use aurum_core::concierge::ChatGateway;
use aurum_core::config::DEFAULT_GEMINI_BASE_URL;
use aurum_core::{AurumError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

const SERVICE: &str = "gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Chat session that talks to the Gemini HTTP API.
pub struct GeminiChatGateway {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: Option<f32>,
    system_instruction: Option<String>,
    /// Completed turns; locked for the whole request so turns never interleave.
    history: Mutex<Vec<Content>>,
}

impl GeminiChatGateway {
    /// Creates a session with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: None,
            system_instruction: None,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Adds a system instruction that will be sent alongside every request.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Number of turns remembered by the session.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    async fn send_request(&self, body: &GenerateContentRequest<'_>) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                AurumError::gateway(
                    SERVICE,
                    format!("Gemini API request failed: {err}"),
                    None,
                    err.is_connect() || err.is_timeout(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(AurumError::http_status(SERVICE, status.as_u16(), &body_text));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|err| AurumError::Serialization {
                format: "JSON".to_string(),
                message: format!("Failed to parse Gemini response: {err}"),
            })?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl ChatGateway for GeminiChatGateway {
    async fn send_message(&self, message: &str) -> Result<String> {
        let mut history = self.history.lock().await;
        history.push(Content::text("user", message));

        let system_instruction = self
            .system_instruction
            .as_deref()
            .map(|text| Content::text("system", text));
        let request = GenerateContentRequest {
            contents: history.as_slice(),
            system_instruction,
            generation_config: self
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        };

        let result = self.send_request(&request).await;
        match result {
            Ok(reply) if !reply.trim().is_empty() => {
                history.push(Content::text("model", &reply));
                Ok(reply)
            }
            Ok(reply) => {
                // A turn without a model answer would leave two user turns in a row
                history.pop();
                tracing::debug!("Gemini returned no text; turn discarded");
                Ok(reply)
            }
            Err(err) => {
                history.pop();
                tracing::warn!("Gemini request failed: {}", err);
                Err(err)
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    #[serde(rename = "system_instruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Clone)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize, Clone)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
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

/// Joined text of the first candidate; empty when the model produced none.
fn extract_text_response(response: GenerateContentResponse) -> String {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}
