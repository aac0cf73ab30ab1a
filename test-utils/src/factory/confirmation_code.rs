//! Confirmation code factory for creating test code entities.

use crate::factory::helpers::{new_uuid, TEST_ACTOR};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating confirmation codes owned by an existing user.
///
/// Defaults to the code `"12345"` expiring one day from now.
pub struct ConfirmationCodeFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    email: Option<String>,
    code: String,
    expires_in: Duration,
}

impl<'a> ConfirmationCodeFactory<'a> {
    /// Creates a new factory for the given user.
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            email: None,
            code: "12345".to_string(),
            expires_in: Duration::days(1),
        }
    }

    /// Sets the code value.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the email the code was issued for.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the expiry relative to now. Negative durations create already expired codes.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Builds and inserts the code entity into the database.
    pub async fn build(self) -> Result<entity::confirmation_code::Model, DbErr> {
        let now = Utc::now();
        entity::confirmation_code::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            email: ActiveValue::Set(self.email),
            code: ActiveValue::Set(self.code),
            expiry_date: ActiveValue::Set(now + self.expires_in),
            created_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            created_date: ActiveValue::Set(now),
            last_modified_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unexpired `"12345"` code for the user.
pub async fn create_code(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::confirmation_code::Model, DbErr> {
    ConfirmationCodeFactory::new(db, user_id).build().await
}
