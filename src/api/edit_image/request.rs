// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Uploaded image extraction from multipart bodies

use axum::body::Bytes;
use axum_extra::extract::{multipart::MultipartError, Multipart};

use crate::api::errors::ApiError;
use crate::gemini::GenerateContentRequest;

/// Multipart field that carries the image file
pub const IMAGE_FIELD: &str = "image";

/// MIME type assumed when the file part declares none
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Request-scoped upload; dropped when the handler returns
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Bytes,
    pub mime_type: String,
    /// Kept for logging only
    pub file_name: Option<String>,
}

impl UploadedImage {
    /// Read the first file part named `image`.
    ///
    /// Text fields named `image` and any other fields are skipped.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Option<Self>, ApiError> {
        while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }
            let Some(file_name) = field.file_name().map(str::to_string) else {
                continue;
            };

            let mime_type = field
                .content_type()
                .filter(|ct| !ct.is_empty())
                .unwrap_or(DEFAULT_MIME_TYPE)
                .to_string();
            let bytes = field.bytes().await.map_err(upload_error)?;

            return Ok(Some(Self {
                bytes,
                mime_type,
                file_name: Some(file_name),
            }));
        }

        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Build the remote request: image part, then the instruction
    pub fn to_generation_request(&self, instruction: &str) -> GenerateContentRequest {
        GenerateContentRequest::image_edit(&self.bytes, &self.mime_type, instruction)
    }
}

fn upload_error(err: MultipartError) -> ApiError {
    ApiError::InvalidUpload {
        status: err.status(),
        message: err.body_text(),
    }
}
