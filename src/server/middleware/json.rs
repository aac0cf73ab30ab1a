use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, validation::Validate};

/// JSON request body that has been deserialized and passed its validation rules.
///
/// Rejections use the same `ErrorDto` body as every other error: a missing JSON
/// content type is 415, malformed or mistyped JSON is 400, and rule violations are
/// 400 with field details.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(e) => {
                    AppError::UnsupportedMediaType(e.body_text())
                }
                other => AppError::BadRequest(other.body_text()),
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
