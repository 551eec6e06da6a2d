// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::edit_image::edit_image_handler;
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::gemini::ImageEditModel;

/// Shared, read-only state handed to every request task
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ImageEditModel>,
    pub instruction: Arc<str>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(model: Arc<dyn ImageEditModel>, instruction: &str) -> Self {
        Self {
            model,
            instruction: Arc::from(instruction),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

pub fn create_app(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/api/image/edit", post(edit_image_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
