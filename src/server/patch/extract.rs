use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;

use crate::server::{
    error::AppError,
    patch::{PatchDocument, PatchError, JSON_PATCH_CONTENT_TYPE, MERGE_PATCH_CONTENT_TYPE},
};

/// Reads a patch document from the request body.
///
/// The flavour is chosen from `Content-Type` (parameters such as `charset` are ignored).
/// Any other media type is rejected with 415 before the body is read.
impl<S> FromRequest<S> for PatchDocument
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let media_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default();

        let is_json_patch = match media_type.as_str() {
            JSON_PATCH_CONTENT_TYPE => true,
            MERGE_PATCH_CONTENT_TYPE => false,
            _ => {
                return Err(AppError::UnsupportedMediaType(format!(
                    "Expected Content-Type {} or {}",
                    JSON_PATCH_CONTENT_TYPE, MERGE_PATCH_CONTENT_TYPE
                )))
            }
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| PatchError::InvalidDocument(format!("body is not JSON: {e}")))?;

        if is_json_patch {
            Ok(PatchDocument::from_json_patch(value)?)
        } else {
            Ok(PatchDocument::from_merge_patch(value))
        }
    }
}
