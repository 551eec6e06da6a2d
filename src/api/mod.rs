// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod edit_image;
pub mod errors;
pub mod http_server;

pub use edit_image::{edit_image_handler, EditImageResponse, UploadedImage};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState};
