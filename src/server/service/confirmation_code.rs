//! Confirmation code service.
//!
//! Issues codes for a user's current email, classifies submitted codes and flips the
//! user's verification flag when a code is accepted. Classification itself is the pure
//! `classify_code` function; this service only loads the stored codes for it.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::CodeSettings,
    data::{confirmation_code::ConfirmationCodeRepository, user::UserRepository},
    error::AppError,
    model::confirmation_code::{classify_code, CodeStatus, ConfirmationCode, CreateCodeParams},
    service::user::UserService,
};

pub struct ConfirmationCodeService<'a> {
    db: &'a DatabaseConnection,
    settings: CodeSettings,
}

impl<'a> ConfirmationCodeService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: CodeSettings) -> Self {
        Self { db, settings }
    }

    /// Issues a new code to the user's current email.
    ///
    /// Earlier codes stay valid until they expire.
    ///
    /// # Returns
    /// - `Ok(ConfirmationCode)` - Persisted code with its expiry
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn create(&self, user_id: &str, actor: &str) -> Result<ConfirmationCode, AppError> {
        let user = UserService::new(self.db).get_by_id(user_id).await?;

        let params = {
            let mut rng = rand::rng();
            CreateCodeParams::generate(
                &mut rng,
                &self.settings,
                &user.id,
                user.email,
                Utc::now(),
                actor,
            )
        };

        let repo = ConfirmationCodeRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets every code held by the user, newest first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<ConfirmationCode>, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = ConfirmationCodeRepository::new(self.db);

        Ok(repo.find_by_user_id(user_id).await?)
    }

    pub async fn get_by_id(
        &self,
        user_id: &str,
        code_id: &str,
    ) -> Result<ConfirmationCode, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = ConfirmationCodeRepository::new(self.db);

        repo.find_by_id_and_user(code_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Confirmation code {} not found for user {}",
                    code_id, user_id
                ))
            })
    }

    /// Classifies a submitted code against the user's stored codes.
    ///
    /// An unknown user simply has no codes, so this never fails for business outcomes.
    pub async fn verify(&self, user_id: &str, code: Option<&str>) -> Result<CodeStatus, AppError> {
        let repo = ConfirmationCodeRepository::new(self.db);

        let codes = repo.find_by_user_id(user_id).await?;

        Ok(classify_code(code, &codes, Utc::now()))
    }

    /// Verifies a code and, when it is accepted, marks the user's email as verified.
    ///
    /// # Returns
    /// - `Ok(CodeStatus)` - Classification result; only `Valid` changes state
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn validate_email(
        &self,
        user_id: &str,
        code: Option<&str>,
        actor: &str,
    ) -> Result<CodeStatus, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let status = self.verify(user_id, code).await?;

        if status == CodeStatus::Valid {
            UserRepository::new(self.db)
                .set_email_verified(user_id, actor)
                .await?;
        }

        Ok(status)
    }

    /// Deletes every code that expired before `now`.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let repo = ConfirmationCodeRepository::new(self.db);

        Ok(repo.delete_expired(now).await?)
    }
}
