// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Failures raised while calling the remote model

use thiserror::Error;

/// Display text is surfaced verbatim to HTTP callers
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("invalid response from model: {0}")]
    Decode(String),
}

impl GeminiError {
    /// Build an API error from a non-success status and its raw body.
    ///
    /// Uses the provider's `{"error": {"message": ...}}` envelope when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let body = body.trim();
                if body.is_empty() {
                    format!("model returned status {}", status)
                } else {
                    format!("{}: {}", status, body)
                }
            });

        GeminiError::Api { status, message }
    }
}
