use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        alert_type::{self, ALERT_TYPE_TAG},
        confirmation_code::{self, CONFIRMATION_CODE_TAG},
        language::{self, LANGUAGE_TAG},
        subscription::{self, SUBSCRIPTION_TAG},
        user::{self, USER_TAG},
        verification::{self, VERIFICATION_TAG},
    },
    state::AppState,
};

/// Prefix every API route is nested under.
pub const API_PREFIX: &str = "/api/v1";

#[derive(OpenApi)]
#[openapi(
    info(title = "CDCP notification subscriptions"),
    tags(
        (name = ALERT_TYPE_TAG, description = "Alert types users can subscribe to"),
        (name = LANGUAGE_TAG, description = "Languages alerts are delivered in"),
        (name = USER_TAG, description = "Users and their attributes"),
        (name = CONFIRMATION_CODE_TAG, description = "Email confirmation codes"),
        (name = VERIFICATION_TAG, description = "Stateless code verification"),
        (name = SUBSCRIPTION_TAG, description = "Per-user alert subscriptions")
    )
)]
pub struct ApiDoc;

/// Builds the API router together with the OpenAPI document generated from its handlers.
pub fn router() -> (axum::Router<AppState>, utoipa::openapi::OpenApi) {
    let api = OpenApiRouter::new()
        .routes(routes!(alert_type::get_alert_types))
        .routes(routes!(alert_type::get_alert_type_by_id))
        .routes(routes!(language::get_languages))
        .routes(routes!(language::get_language_by_id))
        .routes(routes!(user::create_user))
        .routes(routes!(
            user::get_user,
            user::patch_user,
            user::delete_user
        ))
        .routes(routes!(
            confirmation_code::get_confirmation_codes,
            confirmation_code::create_confirmation_code
        ))
        .routes(routes!(confirmation_code::get_confirmation_code_by_id))
        .routes(routes!(confirmation_code::validate_email))
        .routes(routes!(verification::verify_code))
        .routes(routes!(
            subscription::get_subscriptions,
            subscription::create_subscription
        ))
        .routes(routes!(
            subscription::get_subscription_by_id,
            subscription::patch_subscription,
            subscription::delete_subscription
        ));

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(API_PREFIX, api)
        .split_for_parts()
}
