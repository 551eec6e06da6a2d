// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image edit response payloads

use serde::{Deserialize, Serialize};

use crate::gemini::GenerationResult;

/// Success payload: either the edited image as a data URI or the model's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditImageResponse {
    Image {
        #[serde(rename = "imageBase64")]
        image_base64: String,
    },
    Text {
        text: String,
    },
}

impl EditImageResponse {
    pub fn data_uri(mime_type: &str, data: &str) -> String {
        format!("data:{};base64,{}", mime_type, data)
    }
}

impl From<GenerationResult> for EditImageResponse {
    fn from(result: GenerationResult) -> Self {
        match result {
            GenerationResult::Image { mime_type, data } => EditImageResponse::Image {
                image_base64: Self::data_uri(&mime_type, &data),
            },
            GenerationResult::Text(text) => EditImageResponse::Text { text },
        }
    }
}
