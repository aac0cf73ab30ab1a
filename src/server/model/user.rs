//! User domain models and parameters.
//!
//! A user owns an optional email address with its verification flag and a list of
//! free-form name/value attributes supplied at creation. Confirmation codes and
//! subscriptions are owned by the user too but are loaded through their own services.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserAttributeDto, UserDto},
    server::validation::{email, max_length, not_blank, FieldError, Rule, Validate, MAX_EMAIL_LENGTH},
};

/// User with contact email and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Opaque UUID string.
    pub id: String,
    pub email: Option<String>,
    /// Set once a confirmation code issued to this user has been validated.
    pub email_verified: bool,
    pub attributes: Vec<UserAttribute>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl User {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `attributes` - Attribute rows owned by the user
    pub fn from_entity(
        entity: entity::user::Model,
        attributes: Vec<entity::user_attribute::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            email_verified: entity.email_verified,
            attributes: attributes
                .into_iter()
                .map(|a| UserAttribute {
                    name: a.name,
                    value: a.value,
                })
                .collect(),
            created_by: entity.created_by,
            created_date: entity.created_date,
            last_modified_by: entity.last_modified_by,
            last_modified_date: entity.last_modified_date,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            email_verified: self.email_verified,
            attributes: self
                .attributes
                .into_iter()
                .map(|a| UserAttributeDto {
                    name: a.name,
                    value: a.value,
                })
                .collect(),
            created_by: self.created_by,
            created_date: self.created_date,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
        }
    }

    /// The fields a client may change through PATCH.
    pub fn patchable(&self) -> UpdateUserDto {
        UpdateUserDto {
            email: self.email.clone(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: Option<String>,
    pub attributes: Vec<UserAttribute>,
    /// Recorded in the audit columns.
    pub actor: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto, actor: &str) -> Self {
        Self {
            email: dto.email,
            attributes: dto
                .attributes
                .into_iter()
                .map(|a| UserAttribute {
                    name: a.name,
                    value: a.value,
                })
                .collect(),
            actor: actor.to_string(),
        }
    }
}

/// Parameters for persisting a patched user.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub actor: String,
}

fn email_format(email_value: Option<&str>) -> Vec<FieldError> {
    email("email", email_value)
        .into_iter()
        .chain(max_length("email", email_value, MAX_EMAIL_LENGTH))
        .collect()
}

fn create_email(dto: &CreateUserDto) -> Vec<FieldError> {
    email_format(dto.email.as_deref())
}

fn create_attributes(dto: &CreateUserDto) -> Vec<FieldError> {
    dto.attributes
        .iter()
        .enumerate()
        .filter_map(|(i, a)| not_blank(&format!("attributes[{}].name", i), Some(a.name.as_str())))
        .collect()
}

impl Validate for CreateUserDto {
    fn rules() -> Vec<Rule<Self>> {
        vec![create_email as Rule<Self>, create_attributes]
    }
}

fn update_email(dto: &UpdateUserDto) -> Vec<FieldError> {
    email_format(dto.email.as_deref())
}

impl Validate for UpdateUserDto {
    fn rules() -> Vec<Rule<Self>> {
        vec![update_email as Rule<Self>]
    }
}
