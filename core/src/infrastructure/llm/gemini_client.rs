use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{errors::CompletionFailure, ports::LLMClient},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiErrorEnvelope {
    #[serde(default)]
    error: GeminiError,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiError {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

/// Maps a non-success response onto a failure kind.
fn classify_failure(status: StatusCode, body: &str) -> CompletionFailure {
    let envelope: GeminiErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    let reason_is = |reason: &str| {
        envelope
            .error
            .details
            .iter()
            .any(|d| d.reason.as_deref() == Some(reason))
    };
    let status_is = |s: &str| envelope.error.status.as_deref() == Some(s);

    if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || reason_is("API_KEY_INVALID")
    {
        return CompletionFailure::InvalidApiKey;
    }
    if status == StatusCode::NOT_FOUND || status_is("NOT_FOUND") {
        return CompletionFailure::ModelNotFound;
    }
    if status == StatusCode::TOO_MANY_REQUESTS || status_is("RESOURCE_EXHAUSTED") {
        return CompletionFailure::QuotaExceeded;
    }
    if status.is_server_error() {
        return CompletionFailure::Unavailable;
    }

    CompletionFailure::RequestFailed(format!("{} - {}", status, body))
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CompletionFailure::RequestFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(classify_failure(status, &error_text).into());
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CompletionFailure::RequestFailed(format!("Failed to parse LLM response: {}", e))
        })?;

        let text = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty());

        match text {
            Some(text) => Ok(text),
            None => {
                tracing::error!("No text in Gemini response");
                Err(CompletionFailure::EmptyResponse.into())
            }
        }
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: response_schema.map(|response_schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}
