//! Subscription domain models and parameters.
//!
//! A subscription ties a user to one alert type and the language the alerts are sent in.
//! References are stored by id but exposed by code, so the repository joins the alert type
//! and language rows when loading a subscription.

use chrono::{DateTime, Utc};

use crate::{
    model::subscription::{CreateSubscriptionDto, SubscriptionDto, UpdateSubscriptionDto},
    server::validation::{not_blank, FieldError, Rule, Validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub alert_type_code: String,
    pub language_code: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

impl Subscription {
    /// Converts a subscription row and its referenced rows to a domain model.
    pub fn from_entity(
        entity: entity::subscription::Model,
        alert_type: entity::alert_type::Model,
        language: entity::language::Model,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            alert_type_code: alert_type.code,
            language_code: language.code,
            created_by: entity.created_by,
            created_date: entity.created_date,
            last_modified_by: entity.last_modified_by,
            last_modified_date: entity.last_modified_date,
        }
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.id,
            user_id: self.user_id,
            alert_type_code: self.alert_type_code,
            language_code: self.language_code,
            created_by: self.created_by,
            created_date: self.created_date,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
        }
    }

    /// The fields a client may change through PATCH.
    pub fn patchable(&self) -> UpdateSubscriptionDto {
        UpdateSubscriptionDto {
            language_code: self.language_code.clone(),
        }
    }
}

/// Parameters for subscribing a user to an alert type.
///
/// Codes are resolved against reference data by the service before anything is written.
#[derive(Debug, Clone)]
pub struct SubscribeParams {
    pub user_id: String,
    pub alert_type_code: String,
    pub language_code: String,
    pub actor: String,
}

impl SubscribeParams {
    pub fn from_dto(user_id: String, dto: CreateSubscriptionDto, actor: &str) -> Self {
        Self {
            user_id,
            alert_type_code: dto.alert_type_code,
            language_code: dto.language_code,
            actor: actor.to_string(),
        }
    }
}

/// Row level insert for a subscription whose references are already resolved.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionParams {
    pub user_id: String,
    pub alert_type_id: String,
    pub language_id: String,
    pub actor: String,
}

/// Row level update of a subscription's language.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionParams {
    pub id: String,
    pub language_id: String,
    pub actor: String,
}

fn create_alert_type_code(dto: &CreateSubscriptionDto) -> Vec<FieldError> {
    not_blank("alert_type_code", Some(dto.alert_type_code.as_str()))
        .into_iter()
        .collect()
}

fn create_language_code(dto: &CreateSubscriptionDto) -> Vec<FieldError> {
    not_blank("language_code", Some(dto.language_code.as_str()))
        .into_iter()
        .collect()
}

impl Validate for CreateSubscriptionDto {
    fn rules() -> Vec<Rule<Self>> {
        vec![create_alert_type_code as Rule<Self>, create_language_code]
    }
}

fn update_language_code(dto: &UpdateSubscriptionDto) -> Vec<FieldError> {
    not_blank("language_code", Some(dto.language_code.as_str()))
        .into_iter()
        .collect()
}

impl Validate for UpdateSubscriptionDto {
    fn rules() -> Vec<Rule<Self>> {
        vec![update_language_code as Rule<Self>]
    }
}
