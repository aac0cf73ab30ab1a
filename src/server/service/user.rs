//! User service for business logic.
//!
//! This module provides the `UserService` for creating, reading, patching and deleting
//! users. Patching runs the client's document against the user's patchable snapshot and
//! resets email verification whenever the address changes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    patch::{PatchDocument, PatchProcessor},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with an unverified email and the given attributes.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User with attributes
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Applies a patch document to a user.
    ///
    /// The patched snapshot must pass validation before anything is written. If the
    /// email changes, the user's email is marked unverified again.
    ///
    /// # Arguments
    /// - `id` - ID of the user to patch
    /// - `patch` - JSON Patch or Merge Patch document
    /// - `actor` - Recorded as the last modifier
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::MalformedPatch)` - Document could not be applied
    /// - `Err(AppError::Validation)` - Patched user breaks a field rule
    pub async fn patch(
        &self,
        id: &str,
        patch: &PatchDocument,
        actor: &str,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user = self.get_by_id(id).await?;
        let patched = PatchProcessor::apply(&user.patchable(), patch)?;

        let email_verified = user.email_verified && patched.email == user.email;

        repo.update(UpdateUserParams {
            id: user.id,
            email: patched.email,
            email_verified,
            actor: actor.to_string(),
        })
        .await?
        .ok_or_else(|| user_not_found(id))
    }

    /// Deletes a user with its codes, subscriptions and attributes.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    /// Fails with `NotFound` unless the user exists.
    pub async fn ensure_exists(&self, id: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn user_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;
    use serde_json::json;
    use test_utils::{builder::TestBuilder, factory::user::UserFactory};

    #[tokio::test]
    async fn test_patch_email_resets_verification() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = UserFactory::new(db)
            .email("old@example.com")
            .email_verified(true)
            .build()
            .await
            .unwrap();

        let service = UserService::new(db);
        let patch = PatchDocument::from_merge_patch(json!({ "email": "new@example.com" }));
        let updated = service.patch(&user.id, &patch, "editor").await.unwrap();

        assert_eq!(updated.email.as_deref(), Some("new@example.com"));
        assert!(!updated.email_verified);
        assert_eq!(updated.last_modified_by, "editor");
    }

    #[tokio::test]
    async fn test_patch_same_email_keeps_verification() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = UserFactory::new(db)
            .email("same@example.com")
            .email_verified(true)
            .build()
            .await
            .unwrap();

        let service = UserService::new(db);
        let patch = PatchDocument::from_json_patch(json!([
            { "op": "replace", "path": "/email", "value": "same@example.com" }
        ]))
        .unwrap();
        let updated = service.patch(&user.id, &patch, "editor").await.unwrap();

        assert!(updated.email_verified);
    }

    #[tokio::test]
    async fn test_invalid_patch_leaves_user_unchanged() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = UserFactory::new(db)
            .email("kept@example.com")
            .build()
            .await
            .unwrap();

        let service = UserService::new(db);

        let invalid_email = PatchDocument::from_merge_patch(json!({ "email": "not-an-email" }));
        let result = service.patch(&user.id, &invalid_email, "editor").await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let wrong_type = PatchDocument::from_merge_patch(json!({ "email": 42 }));
        let result = service.patch(&user.id, &wrong_type, "editor").await;
        assert!(matches!(result, Err(AppError::MalformedPatch(_))));

        let stored = entity::prelude::User::find_by_id(user.id.as_str())
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.email.as_deref(), Some("kept@example.com"));
        assert_eq!(stored.last_modified_date, user.last_modified_date);
    }

    #[tokio::test]
    async fn test_patch_unknown_user() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let patch = PatchDocument::from_merge_patch(json!({ "email": "a@example.com" }));

        assert!(matches!(
            service.patch("missing", &patch, "editor").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_unknown_user() {
        let test = TestBuilder::new()
            .with_subscription_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);

        assert!(matches!(
            service.delete("missing").await,
            Err(AppError::NotFound(_))
        ));
    }
}
