use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{alert_type::AlertTypeDto, api::ErrorDto},
    server::{error::AppError, service::alert_type::AlertTypeService, state::AppState},
};

/// Tag for grouping alert type endpoints in OpenAPI documentation
pub static ALERT_TYPE_TAG: &str = "alert-type";

/// List every alert type a user can subscribe to.
///
/// # Returns
/// - `200 OK` - Alert types ordered by code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/alert-types",
    tag = ALERT_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved alert types", body = Vec<AlertTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alert_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AlertTypeService::new(&state.db);

    let alert_types = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            alert_types
                .into_iter()
                .map(|a| a.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get an alert type by ID.
///
/// # Returns
/// - `200 OK` - Alert type
/// - `404 Not Found` - No alert type with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/alert-types/{id}",
    tag = ALERT_TYPE_TAG,
    params(
        ("id" = String, Path, description = "Alert type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved alert type", body = AlertTypeDto),
        (status = 404, description = "Alert type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alert_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AlertTypeService::new(&state.db);

    let alert_type = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(alert_type.into_dto())))
}
