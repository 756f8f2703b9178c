use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::{GenerateFuture, TextModel, UpstreamError};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini `generateContent` endpoint.
///
/// The credential is injected once at construction and never reread; each
/// request is a single POST with no retry or backoff.
#[derive(Debug, Clone)]
pub struct Gemini {
    key: String,
    model: String,
}

impl Gemini {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            model: crate::settings::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if !model.trim().is_empty() {
            self.model = model;
        }
        self
    }
}

impl TextModel for Gemini {
    fn generate(&self, prompt: String) -> GenerateFuture {
        let this = self.clone();
        Box::pin(async move {
            let client = reqwest::Client::new();
            let url = format!("{}/{}:generateContent", BASE_URL, this.model);
            let body = json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [{"text": prompt}]
                    }
                ]
            });

            let response = client
                .post(&url)
                .header("x-goog-api-key", this.key.clone())
                .json(&body)
                .send()
                .await
                .map_err(|err| UpstreamError::from_message(err.to_string()))?;

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if !status.is_success() {
                return Err(error_for_status(status, &text));
            }
            extract_text(&text)
        })
    }
}

fn error_for_status(status: StatusCode, body: &str) -> UpstreamError {
    let message = format!(
        "Gemini API error ({}): {}",
        status,
        extract_gemini_error(body).unwrap_or_else(|| body.to_string())
    );
    match status {
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamError::Unauthorized(message),
        _ => UpstreamError::from_message(message),
    }
}

fn extract_text(body: &str) -> Result<String, UpstreamError> {
    let payload: GeminiResponse = serde_json::from_str(body).map_err(|err| {
        UpstreamError::Upstream(format!("failed to parse Gemini response JSON: {}", err))
    })?;
    let candidate = payload
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .ok_or(UpstreamError::Empty)?;

    let text = candidate
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        return Err(UpstreamError::Empty);
    }
    Ok(text)
}

fn extract_gemini_error(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<GeminiError>,
    }

    #[derive(Deserialize)]
    struct GeminiError {
        message: Option<String>,
        status: Option<String>,
        code: Option<i32>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let error = parsed.error?;
    let mut parts = Vec::new();
    if let Some(message) = error.message
        && !message.trim().is_empty()
    {
        parts.push(message);
    }
    if let Some(status) = error.status
        && !status.trim().is_empty()
    {
        parts.push(format!("status: {}", status));
    }
    if let Some(code) = error.code {
        parts.push(format!("code: {}", code));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{UpstreamError, error_for_status, extract_gemini_error, extract_text};
    use reqwest::StatusCode;

    #[test]
    fn extract_text_joins_candidate_parts() {
        let payload = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/gemini_text_response.json"
        ));
        assert_eq!(extract_text(payload).unwrap(), "नमस्ते");
    }

    #[test]
    fn extract_text_rejects_missing_candidates() {
        assert_eq!(
            extract_text(r#"{"candidates": []}"#),
            Err(UpstreamError::Empty)
        );
    }

    #[test]
    fn extract_text_rejects_blank_parts() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#;
        assert_eq!(extract_text(body), Err(UpstreamError::Empty));
    }

    #[test]
    fn error_body_is_flattened() {
        let body = r#"{"error": {"message": "quota exceeded", "status": "RESOURCE_EXHAUSTED", "code": 429}}"#;
        assert_eq!(
            extract_gemini_error(body).unwrap(),
            "quota exceeded | status: RESOURCE_EXHAUSTED | code: 429"
        );
    }

    #[test]
    fn status_mapping_is_typed() {
        let rate = error_for_status(StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(rate, UpstreamError::RateLimited(_)));
        let auth = error_for_status(StatusCode::FORBIDDEN, "{}");
        assert!(matches!(auth, UpstreamError::Unauthorized(_)));
        let other = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert!(matches!(other, UpstreamError::Upstream(_)));
    }
}
