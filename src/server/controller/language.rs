use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, language::LanguageDto},
    server::{error::AppError, service::language::LanguageService, state::AppState},
};

/// Tag for grouping language endpoints in OpenAPI documentation
pub static LANGUAGE_TAG: &str = "language";

/// List the languages alerts can be delivered in.
#[utoipa::path(
    get,
    path = "/languages",
    tag = LANGUAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved languages", body = Vec<LanguageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_languages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    let languages = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(languages.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/languages/{id}",
    tag = LANGUAGE_TAG,
    params(
        ("id" = String, Path, description = "Language ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved language", body = LanguageDto),
        (status = 404, description = "Language not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_language_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LanguageService::new(&state.db);

    let language = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(language.into_dto())))
}
