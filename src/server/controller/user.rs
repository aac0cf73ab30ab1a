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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        event::EventType,
        middleware::{actor::Actor, json::ValidatedJson},
        model::user::CreateUserParams,
        patch::PatchDocument,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user.
///
/// The email starts out unverified. Attributes are stored as given.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `actor` - Caller recorded as creator
/// - `payload` - Email and attributes
///
/// # Returns
/// - `201 Created` - Created user
/// - `400 Bad Request` - Field validation failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    actor: Actor,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .create(CreateUserParams::from_dto(payload, actor.as_str()))
        .await?;

    state.events.record(
        actor.as_str(),
        "User created",
        Some(json!({ "user_id": user.id })),
        EventType::UserCreated,
    );

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user with their attributes.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_id(&user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially update a user.
///
/// Accepts `application/json-patch+json` (RFC 6902) or `application/merge-patch+json`
/// (RFC 7396). Changing the email marks it unverified.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Patch could not be applied or the result is invalid
/// - `404 Not Found` - User not found
/// - `415 Unsupported Media Type` - Body is neither patch media type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body(
        content = UpdateUserDto,
        content_type = "application/merge-patch+json",
        description = "Merge patch, or a JSON Patch array sent as application/json-patch+json"
    ),
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Malformed patch or invalid result", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 415, description = "Unsupported patch media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_user(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
    patch: PatchDocument,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.patch(&user_id, &patch, actor.as_str()).await?;

    state.events.record(
        actor.as_str(),
        "User updated",
        Some(json!({ "user_id": user.id, "email_verified": user.email_verified })),
        EventType::UserUpdated,
    );

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user together with their codes and subscriptions.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.delete(&user_id).await?;

    state.events.record(
        actor.as_str(),
        "User deleted",
        Some(json!({ "user_id": user_id })),
        EventType::UserDeleted,
    );

    Ok(StatusCode::NO_CONTENT)
}
