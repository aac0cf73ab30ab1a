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
        subscription::{CreateSubscriptionDto, SubscriptionDto, UpdateSubscriptionDto},
    },
    server::{
        error::AppError,
        event::EventType,
        middleware::{actor::Actor, json::ValidatedJson},
        model::subscription::SubscribeParams,
        patch::PatchDocument,
        service::subscription::SubscriptionService,
        state::AppState,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

#[utoipa::path(
    get,
    path = "/users/{user_id}/subscriptions",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subscriptions", body = Vec<SubscriptionDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);

    let subscriptions = service.get_by_user(&user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            subscriptions
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Subscribe a user to an alert type.
///
/// The alert type is looked up by code. The language may be given by its code, ISO
/// code or MSCA code. A user holds at most one subscription per alert type.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `actor` - Caller recorded as creator
/// - `user_id` - Subscribing user
/// - `payload` - Alert type and language codes
///
/// # Returns
/// - `201 Created` - Created subscription
/// - `400 Bad Request` - Missing alert type or language code
/// - `404 Not Found` - User, alert type or language not found
/// - `409 Conflict` - User already subscribes to the alert type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/subscriptions",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = CreateSubscriptionDto,
    responses(
        (status = 201, description = "Successfully created subscription", body = SubscriptionDto),
        (status = 400, description = "Invalid subscription data", body = ErrorDto),
        (status = 404, description = "User, alert type or language not found", body = ErrorDto),
        (status = 409, description = "Already subscribed to this alert type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subscription(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);

    let subscription = service
        .subscribe(SubscribeParams::from_dto(user_id, payload, actor.as_str()))
        .await?;

    state.events.record(
        actor.as_str(),
        "Subscription created",
        Some(json!({
            "user_id": subscription.user_id,
            "subscription_id": subscription.id,
            "alert_type_code": subscription.alert_type_code,
        })),
        EventType::SubscriptionCreated,
    );

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/subscriptions/{id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = String, Path, description = "User ID"),
        ("id" = String, Path, description = "Subscription ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subscription", body = SubscriptionDto),
        (status = 404, description = "User or subscription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription_by_id(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);

    let subscription = service.get_by_id(&user_id, &id).await?;

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

/// Change a subscription's language through a patch document.
#[utoipa::path(
    patch,
    path = "/users/{user_id}/subscriptions/{id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = String, Path, description = "User ID"),
        ("id" = String, Path, description = "Subscription ID")
    ),
    request_body(
        content = UpdateSubscriptionDto,
        content_type = "application/merge-patch+json",
        description = "Merge patch, or a JSON Patch array sent as application/json-patch+json"
    ),
    responses(
        (status = 200, description = "Successfully updated subscription", body = SubscriptionDto),
        (status = 400, description = "Malformed patch or invalid result", body = ErrorDto),
        (status = 404, description = "Subscription or language not found", body = ErrorDto),
        (status = 415, description = "Unsupported patch media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_subscription(
    State(state): State<AppState>,
    actor: Actor,
    Path((user_id, id)): Path<(String, String)>,
    patch: PatchDocument,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);

    let subscription = service
        .patch(&user_id, &id, &patch, actor.as_str())
        .await?;

    state.events.record(
        actor.as_str(),
        "Subscription updated",
        Some(json!({
            "user_id": subscription.user_id,
            "subscription_id": subscription.id,
            "language_code": subscription.language_code,
        })),
        EventType::SubscriptionUpdated,
    );

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}/subscriptions/{id}",
    tag = SUBSCRIPTION_TAG,
    params(
        ("user_id" = String, Path, description = "User ID"),
        ("id" = String, Path, description = "Subscription ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted subscription"),
        (status = 404, description = "User or subscription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subscription(
    State(state): State<AppState>,
    actor: Actor,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);

    service.delete(&user_id, &id).await?;

    state.events.record(
        actor.as_str(),
        "Subscription deleted",
        Some(json!({ "user_id": user_id, "subscription_id": id })),
        EventType::SubscriptionDeleted,
    );

    Ok(StatusCode::NO_CONTENT)
}
