use std::time::Duration;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{Value, json};
use thiserror::Error;

use crate::config::OpenAiSettings;
use crate::models::DocumentSummary;

pub const MAX_SUMMARY_INPUT_CHARS: usize = 15_000;
const SUMMARY_FUNCTION_NAME: &str = "extract_summary";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("OpenAI request failed after {attempts} attempt(s): {source}")]
    Request {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("OpenAI API error {status}: {body}")]
    Api { status: HttpStatusCode, body: String },

    #[error("OpenAI response does not contain a summary tool call")]
    MissingToolCall,

    #[error("failed to decode structured summary: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid summary: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiSummarizer {
    pub fn new(client: reqwest::Client, settings: OpenAiSettings) -> Self {
        Self { client, settings }
    }

    pub async fn summarize(&self, text: &str) -> Result<DocumentSummary, SummaryError> {
        let request_body = build_request(&self.settings.model, text);
        let url = format!("{}/chat/completions", self.settings.base_url);
        let total_attempts = self.settings.max_retries + 1;
        let retry_max_ms = self.settings.retry_max_ms.max(self.settings.retry_base_ms);

        for attempt in 1..=total_attempts {
            let can_retry = attempt < total_attempts;
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.settings.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(resp) => resp,
                Err(error) if can_retry => {
                    let delay =
                        backoff(attempt, self.settings.retry_base_ms, retry_max_ms);
                    tracing::warn!(
                        attempt,
                        total_attempts,
                        delay_ms = delay.as_millis(),
                        "OpenAI request failed (network/transport): {}. Retrying...",
                        error
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                Err(source) => {
                    return Err(SummaryError::Request {
                        attempts: attempt,
                        source,
                    });
                }
            };

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|source| SummaryError::Request {
                    attempts: attempt,
                    source,
                })?;

            if !status.is_success() {
                if can_retry && is_transient(status) {
                    let delay =
                        backoff(attempt, self.settings.retry_base_ms, retry_max_ms);
                    tracing::warn!(
                        attempt,
                        total_attempts,
                        status = %status,
                        delay_ms = delay.as_millis(),
                        "OpenAI transient API error. Retrying..."
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                return Err(SummaryError::Api { status, body });
            }

            let raw_response: Value = serde_json::from_str(&body)?;
            let summary = parse_summary_response(&raw_response)?;
            validate_summary(&summary)?;
            return Ok(summary);
        }

        Err(SummaryError::Invalid(format!(
            "no response after {} attempt(s)",
            total_attempts
        )))
    }
}

pub fn truncate_input(text: &str) -> String {
    if text.chars().count() <= MAX_SUMMARY_INPUT_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_SUMMARY_INPUT_CHARS).collect();
    truncated.push_str("...");
    truncated
}

fn build_request(model: &str, text: &str) -> Value {
    json!({
        "model": model,
        "temperature": 0.2,
        "messages": [
            {
                "role": "system",
                "content": "You are an expert document analyst. Provide structured, comprehensive summaries."
            },
            {
                "role": "user",
                "content": format!(
                    "Please analyze this document and generate a comprehensive summary. Extract structured information from the document.\n\nDocument:\n{}",
                    truncate_input(text)
                )
            }
        ],
        "tools": [
            {
                "type": "function",
                "function": {
                    "name": SUMMARY_FUNCTION_NAME,
                    "description": "Extract summary from input document.",
                    "parameters": summary_schema()
                }
            }
        ],
        "tool_choice": {
            "type": "function",
            "function": { "name": SUMMARY_FUNCTION_NAME }
        }
    })
}

fn summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "abstract": { "type": "string" },
            "key_points": { "type": "array", "items": { "type": "string" } },
            "main_topics": { "type": "array", "items": { "type": "string" } },
            "difficulty_level": {
                "type": "string",
                "enum": ["beginner", "intermediate", "advanced"]
            },
            "estimated_read_time": { "type": "string" },
            "document_type": {
                "type": "string",
                "enum": ["research_paper", "tutorial", "book_chapter", "article"]
            },
            "authors": { "type": "array", "items": { "type": "string" } },
            "publication_date": { "type": "string", "description": "ISO date, YYYY-MM-DD" }
        },
        "required": [
            "title", "abstract", "key_points", "main_topics", "difficulty_level",
            "estimated_read_time", "document_type", "authors", "publication_date"
        ]
    })
}

fn parse_summary_response(raw: &Value) -> Result<DocumentSummary, SummaryError> {
    let message = raw
        .get("choices")
        .and_then(|choices| choices.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .ok_or(SummaryError::MissingToolCall)?;

    let arguments = message
        .get("tool_calls")
        .and_then(|calls| calls.as_array())
        .and_then(|calls| calls.first())
        .and_then(|call| call.get("function"))
        .and_then(|function| function.get("arguments"))
        .and_then(|arguments| arguments.as_str())
        // Some compatible servers ignore tool_choice and answer in content.
        .or_else(|| message.get("content").and_then(|content| content.as_str()))
        .ok_or(SummaryError::MissingToolCall)?;

    Ok(serde_json::from_str(unfenced_json(arguments))?)
}

fn validate_summary(summary: &DocumentSummary) -> Result<(), SummaryError> {
    if summary.title.trim().is_empty() {
        return Err(SummaryError::Invalid("title must not be empty".to_string()));
    }
    if summary.abstract_text.trim().is_empty() {
        return Err(SummaryError::Invalid("abstract must not be empty".to_string()));
    }
    Ok(())
}

/// Rate limits and gateway-side failures; 501 and other 5xx are final.
fn is_transient(status: HttpStatusCode) -> bool {
    status == HttpStatusCode::TOO_MANY_REQUESTS || matches!(status.as_u16(), 500 | 502..=504)
}

/// Doubles from `base_ms` per attempt, capped at `max_ms`.
fn backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(base_ms.saturating_mul(factor).min(max_ms))
}

/// The JSON inside a Markdown code block, or the trimmed input when unfenced.
fn unfenced_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```").and_then(|rest| rest.strip_suffix("```")) else {
        return trimmed;
    };
    body.strip_prefix("json").unwrap_or(body).trim()
}
