//! Content digest endpoints
//!
//! Standalone SHA-256 utilities: encode arbitrary content to its hex
//! fingerprint, or check content against a previously computed digest.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::digest;

#[derive(Debug, Deserialize)]
pub struct DigestRequest {
    content: String,
}

#[derive(Serialize)]
pub struct DigestResponse {
    content: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    content: String,
    comparison: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    result: bool,
}

/// POST /api/digest
pub async fn encode(Json(request): Json<DigestRequest>) -> Json<DigestResponse> {
    let digest = digest::sha256_hex(&request.content);
    tracing::info!(digest = %digest, "encoded content");
    Json(DigestResponse { content: digest })
}

/// POST /api/digest/verify
pub async fn verify(Json(request): Json<VerifyRequest>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        result: digest::verify_sha256(&request.content, &request.comparison),
    })
}
