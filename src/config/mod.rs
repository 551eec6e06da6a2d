// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;
use std::net::SocketAddr;

use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_INSTRUCTION: &str = "Make beautiful straight teeth";
pub const DEFAULT_API_PORT: u16 = 3000;
/// Matches the provider's inline-data request ceiling
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Settings for the remote image-editing model
#[derive(Clone)]
pub struct GeminiConfig {
    /// Provider credential (GEMINI_API_KEY); absence fails lazily per call
    pub api_key: Option<String>,
    /// Provider base URL, without trailing slash
    pub api_base: String,
    /// Remote model id
    pub model: String,
    /// Instruction text sent after the image part
    pub instruction: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("instruction", &self.instruction)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map(|k| !k.is_empty()).unwrap_or(false)
    }
}

/// Top-level node configuration
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub api_port: u16,
    pub max_upload_bytes: usize,
    pub gemini: GeminiConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            gemini: GeminiConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_port = match lookup("API_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid API_PORT '{}', using {}", raw, DEFAULT_API_PORT);
                DEFAULT_API_PORT
            }),
            None => defaults.api_port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Invalid MAX_UPLOAD_BYTES '{}', using {}",
                    raw, DEFAULT_MAX_UPLOAD_BYTES
                );
                DEFAULT_MAX_UPLOAD_BYTES
            }),
            None => defaults.max_upload_bytes,
        };

        let gemini = GeminiConfig {
            api_key: lookup("GEMINI_API_KEY").filter(|k| !k.is_empty()),
            api_base: lookup("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .filter(|b| !b.is_empty())
                .unwrap_or(defaults.gemini.api_base),
            model: lookup("GEMINI_MODEL")
                .filter(|m| !m.is_empty())
                .unwrap_or(defaults.gemini.model),
            instruction: lookup("EDIT_INSTRUCTION")
                .filter(|i| !i.is_empty())
                .unwrap_or(defaults.gemini.instruction),
        };

        Self {
            api_port,
            max_upload_bytes,
            gemini,
        }
    }

    /// Address the HTTP server binds to (all interfaces)
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.api_port))
    }
}
