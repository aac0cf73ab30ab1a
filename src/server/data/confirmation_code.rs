use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::confirmation_code::{ConfirmationCode, CreateCodeParams};

pub struct ConfirmationCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfirmationCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCodeParams) -> Result<ConfirmationCode, DbErr> {
        let code = entity::confirmation_code::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            email: ActiveValue::Set(params.email),
            code: ActiveValue::Set(params.code),
            expiry_date: ActiveValue::Set(params.expiry_date),
            created_by: ActiveValue::Set(params.actor.clone()),
            created_date: ActiveValue::Set(params.created_date),
            last_modified_by: ActiveValue::Set(params.actor),
            last_modified_date: ActiveValue::Set(params.created_date),
        }
        .insert(self.db)
        .await?;

        Ok(ConfirmationCode::from_entity(code))
    }

    /// Gets every code held by a user, newest first.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<ConfirmationCode>, DbErr> {
        let codes = entity::prelude::ConfirmationCode::find()
            .filter(entity::confirmation_code::Column::UserId.eq(user_id))
            .order_by_desc(entity::confirmation_code::Column::CreatedDate)
            .all(self.db)
            .await?;

        Ok(codes.into_iter().map(ConfirmationCode::from_entity).collect())
    }

    /// Finds a code by ID, scoped to its owning user.
    pub async fn find_by_id_and_user(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<ConfirmationCode>, DbErr> {
        let code = entity::prelude::ConfirmationCode::find_by_id(id)
            .filter(entity::confirmation_code::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(code.map(ConfirmationCode::from_entity))
    }

    /// Deletes every code whose expiry is before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of codes deleted
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ConfirmationCode::delete_many()
            .filter(entity::confirmation_code::Column::ExpiryDate.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
