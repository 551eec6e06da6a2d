// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image edit endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::{multipart::MultipartRejection, Multipart};
use tracing::{debug, error, info};

use super::request::UploadedImage;
use super::response::EditImageResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/image/edit - Edit an uploaded image with the configured instruction
///
/// Pipeline:
/// 1. Extract the `image` file part (400 if absent or body is not multipart)
/// 2. Base64-encode it into a user message: image part, then instruction
/// 3. Call the model exactly once
/// 4. Return the first inline image as a data URI, or the model's text
///
/// Model failures map to 500 with the failure message. Nothing is retried.
pub async fn edit_image_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<EditImageResponse>, ApiError> {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!("Request is not a multipart upload: {}", rejection);
            return Err(ApiError::NoImageUploaded);
        }
    };

    let upload = UploadedImage::from_multipart(multipart)
        .await?
        .ok_or(ApiError::NoImageUploaded)?;

    debug!(
        "Image edit request received: file={:?}, mime_type={}, bytes={}",
        upload.file_name,
        upload.mime_type,
        upload.len()
    );

    let request = upload.to_generation_request(&state.instruction);
    drop(upload);

    let response = state.model.generate_content(request).await.map_err(|e| {
        error!("Image edit failed: {}", e);
        ApiError::from(e)
    })?;

    let payload = EditImageResponse::from(response.into_result());
    match &payload {
        EditImageResponse::Image { image_base64 } => {
            info!("Image edited: data_uri_len={}", image_base64.len())
        }
        EditImageResponse::Text { text } => {
            info!("Model answered without an image: text_len={}", text.len())
        }
    }

    Ok(Json(payload))
}
