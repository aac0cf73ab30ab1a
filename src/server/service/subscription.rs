//! Subscription service.
//!
//! Resolves alert type and language codes against reference data, enforces one
//! subscription per user and alert type, and applies language changes through PATCH.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        alert_type::AlertTypeRepository, language::LanguageRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::{
        language::Language,
        subscription::{
            CreateSubscriptionParams, SubscribeParams, Subscription, UpdateSubscriptionParams,
        },
    },
    patch::{PatchDocument, PatchProcessor},
    service::user::UserService,
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Subscription>, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = SubscriptionRepository::new(self.db);

        Ok(repo.find_by_user_id(user_id).await?)
    }

    pub async fn get_by_id(&self, user_id: &str, id: &str) -> Result<Subscription, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = SubscriptionRepository::new(self.db);

        repo.find_by_id_and_user(id, user_id)
            .await?
            .ok_or_else(|| subscription_not_found(id, user_id))
    }

    /// Subscribes a user to an alert type.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - Created subscription
    /// - `Err(AppError::NotFound)` - User, alert type or language does not exist
    /// - `Err(AppError::Conflict)` - User already subscribes to the alert type
    pub async fn subscribe(&self, params: SubscribeParams) -> Result<Subscription, AppError> {
        UserService::new(self.db)
            .ensure_exists(&params.user_id)
            .await?;

        let alert_type = AlertTypeRepository::new(self.db)
            .find_by_code(&params.alert_type_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Alert type {} not found", params.alert_type_code))
            })?;

        let language = self.resolve_language(&params.language_code).await?;

        let repo = SubscriptionRepository::new(self.db);

        let conflict = || {
            AppError::Conflict(format!(
                "User {} is already subscribed to {}",
                params.user_id, alert_type.code
            ))
        };

        if repo
            .exists_for_alert_type(&params.user_id, &alert_type.id)
            .await?
        {
            return Err(conflict());
        }

        repo.create(CreateSubscriptionParams {
            user_id: params.user_id.clone(),
            alert_type_id: alert_type.id.clone(),
            language_id: language.id,
            actor: params.actor.clone(),
        })
        .await
        .map_err(|e| on_unique_violation(e, conflict))
    }

    /// Applies a patch document to a subscription. Only the language can change.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - Updated subscription
    /// - `Err(AppError::NotFound)` - Subscription or the requested language does not exist
    /// - `Err(AppError::MalformedPatch)` - Document could not be applied
    /// - `Err(AppError::Validation)` - Patched subscription breaks a field rule
    pub async fn patch(
        &self,
        user_id: &str,
        id: &str,
        patch: &PatchDocument,
        actor: &str,
    ) -> Result<Subscription, AppError> {
        let subscription = self.get_by_id(user_id, id).await?;
        let patched = PatchProcessor::apply(&subscription.patchable(), patch)?;

        let language = self.resolve_language(&patched.language_code).await?;

        let repo = SubscriptionRepository::new(self.db);

        repo.update(UpdateSubscriptionParams {
            id: subscription.id,
            language_id: language.id,
            actor: actor.to_string(),
        })
        .await?
        .ok_or_else(|| subscription_not_found(id, user_id))
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = SubscriptionRepository::new(self.db);

        if !repo.delete(id, user_id).await? {
            return Err(subscription_not_found(id, user_id));
        }

        Ok(())
    }

    async fn resolve_language(&self, code: &str) -> Result<Language, AppError> {
        LanguageRepository::new(self.db)
            .find_by_code_or_alias(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", code)))
    }
}

fn subscription_not_found(id: &str, user_id: &str) -> AppError {
    AppError::NotFound(format!(
        "Subscription {} not found for user {}",
        id, user_id
    ))
}

/// Maps a unique index violation to the caller's conflict error.
fn on_unique_violation(err: DbErr, conflict: impl FnOnce() -> AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict(),
        _ => err.into(),
    }
}
