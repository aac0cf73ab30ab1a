use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        confirmation_code::{CodeVerificationDto, VerifyCodeDto},
    },
    server::{
        error::AppError, middleware::json::ValidatedJson,
        service::confirmation_code::ConfirmationCodeService, state::AppState,
    },
};

/// Tag for grouping code verification endpoints in OpenAPI documentation
pub static VERIFICATION_TAG: &str = "verification";

/// Check a confirmation code without changing any state.
///
/// # Returns
/// - `200 OK` - `VALID`
/// - `400 Bad Request` - `EXPIRED` or `MISMATCH`, or the request body is invalid
/// - `404 Not Found` - `NO_CODE`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/verifyCode",
    tag = VERIFICATION_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Code is valid", body = CodeVerificationDto),
        (status = 400, description = "Code expired or mismatched", body = CodeVerificationDto),
        (status = 404, description = "No code to compare against", body = CodeVerificationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VerifyCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfirmationCodeService::new(&state.db, state.code_settings);

    let status = service
        .verify(&payload.user_id, payload.code.as_deref())
        .await?;

    Ok((status.verification_status(), Json(status.into_dto())))
}
