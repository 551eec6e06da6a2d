// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini generateContent client for image editing

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::error::GeminiError;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;

/// Remote model that turns a multi-part prompt into content parts.
///
/// Implementations are shared read-only across request tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageEditModel: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;
}

/// Client for the Gemini REST API
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a new GeminiClient
    ///
    /// A missing API key is accepted here; calls fail with
    /// [`GeminiError::MissingApiKey`] instead.
    pub fn new(config: &GeminiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("image-edit-node/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let api_base = config.api_base.trim_end_matches('/').to_string();
        info!(
            "Gemini client configured: api_base={}, model={}",
            api_base, config.model
        );

        Ok(Self {
            client,
            api_base,
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl ImageEditModel for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let url = self.generate_url();
        debug!("Gemini generateContent POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| GeminiError::Decode(e.to_string()))
    }
}
