use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::{
        api::ErrorDto,
        confirmation_code::{CodeVerificationDto, ConfirmationCodeDto, EmailValidationDto},
    },
    server::{
        error::AppError,
        event::EventType,
        middleware::{actor::Actor, json::ValidatedJson},
        model::confirmation_code::CodeStatus,
        service::confirmation_code::ConfirmationCodeService,
        state::AppState,
    },
};

/// Tag for grouping confirmation code endpoints in OpenAPI documentation
pub static CONFIRMATION_CODE_TAG: &str = "confirmation-code";

/// List a user's confirmation codes, newest first.
#[utoipa::path(
    get,
    path = "/users/{user_id}/confirmation-codes",
    tag = CONFIRMATION_CODE_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved confirmation codes", body = Vec<ConfirmationCodeDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_confirmation_codes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfirmationCodeService::new(&state.db, state.code_settings);

    let codes = service.get_by_user(&user_id).await?;

    Ok((
        StatusCode::OK,
        Json(codes.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Issue a new confirmation code for the user's current email.
///
/// Length and lifetime come from configuration. Codes issued earlier remain usable
/// until they expire.
///
/// # Returns
/// - `201 Created` - Issued code with its expiry
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/confirmation-codes",
    tag = CONFIRMATION_CODE_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 201, description = "Successfully issued confirmation code", body = ConfirmationCodeDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_confirmation_code(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfirmationCodeService::new(&state.db, state.code_settings);

    let code = service.create(&user_id, actor.as_str()).await?;

    state.events.record(
        actor.as_str(),
        "Confirmation code created",
        Some(json!({ "user_id": code.user_id, "code_id": code.id })),
        EventType::ConfirmationCodeCreated,
    );

    Ok((StatusCode::CREATED, Json(code.into_dto())))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/confirmation-codes/{code_id}",
    tag = CONFIRMATION_CODE_TAG,
    params(
        ("user_id" = String, Path, description = "User ID"),
        ("code_id" = String, Path, description = "Confirmation code ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved confirmation code", body = ConfirmationCodeDto),
        (status = 404, description = "User or code not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_confirmation_code_by_id(
    State(state): State<AppState>,
    Path((user_id, code_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfirmationCodeService::new(&state.db, state.code_settings);

    let code = service.get_by_id(&user_id, &code_id).await?;

    Ok((StatusCode::OK, Json(code.into_dto())))
}

/// Verify the user's email with a confirmation code.
///
/// A valid code marks the email verified. The classification is returned in the body
/// for every outcome.
///
/// # Returns
/// - `202 Accepted` - Code accepted and email verified
/// - `400 Bad Request` - Code expired, does not match, or is longer than any issued code
/// - `404 Not Found` - User not found, or the user holds no codes
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/email-validations",
    tag = CONFIRMATION_CODE_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = EmailValidationDto,
    responses(
        (status = 202, description = "Email verified", body = CodeVerificationDto),
        (status = 400, description = "Code expired or mismatched", body = CodeVerificationDto),
        (status = 404, description = "User not found or no code issued", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_email(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<EmailValidationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfirmationCodeService::new(&state.db, state.code_settings);

    let status = service
        .validate_email(
            &user_id,
            payload.confirmation_code.as_deref(),
            actor.as_str(),
        )
        .await?;

    if status == CodeStatus::Valid {
        state.events.record(
            actor.as_str(),
            "Email verified",
            Some(json!({ "user_id": user_id })),
            EventType::EmailVerified,
        );
    }

    Ok((status.email_validation_status(), Json(status.into_dto())))
}
