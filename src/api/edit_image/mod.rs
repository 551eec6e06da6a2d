// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image edit API endpoint module
//!
//! Provides POST /api/image/edit: one uploaded image in, one edited image
//! (or the model's text answer) out.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::edit_image_handler;
pub use request::{UploadedImage, IMAGE_FIELD};
pub use response::EditImageResponse;
