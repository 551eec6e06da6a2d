// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image editing via the Gemini generateContent API

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeminiClient, ImageEditModel};
pub use error::GeminiError;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationResult,
    InlineData, Part,
};
