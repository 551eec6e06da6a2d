// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use image_edit_node::{
    api::{start_server, AppState},
    config::NodeConfig,
    gemini::GeminiClient,
    version,
};
use std::{env, sync::Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_info());
    if !dotenv_loaded {
        info!("No .env file found, using process environment");
    }

    let config = NodeConfig::from_env();

    info!("Gemini API key loaded: {}", config.gemini.has_api_key());
    if !config.gemini.has_api_key() {
        warn!("GEMINI_API_KEY is not set; image edit requests will fail until it is provided");
    }

    let client = GeminiClient::new(&config.gemini)?;
    let state = AppState::new(Arc::new(client), &config.gemini.instruction)
        .with_max_upload_bytes(config.max_upload_bytes);

    start_server(state, config.listen_addr()).await
}
