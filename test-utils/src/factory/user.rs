//! User factory for creating test user entities.

use crate::factory::helpers::{new_uuid, next_id, TEST_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("someone@example.com")
///     .email_verified(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: Option<String>,
    email_verified: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - email: `"user{n}@example.com"` where n is auto-incremented
    /// - email_verified: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: new_uuid(),
            email: Some(format!("user{}@example.com", next_id())),
            email_verified: false,
        }
    }

    /// Sets the user ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Removes the email address.
    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    /// Sets the email verified flag.
    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = email_verified;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            email_verified: ActiveValue::Set(self.email_verified),
            created_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            created_date: ActiveValue::Set(now),
            last_modified_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
