use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user together with its attributes in one transaction.
    ///
    /// The user starts with an unverified email and a fresh UUID.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            email: ActiveValue::Set(params.email),
            email_verified: ActiveValue::Set(false),
            created_by: ActiveValue::Set(params.actor.clone()),
            created_date: ActiveValue::Set(now),
            last_modified_by: ActiveValue::Set(params.actor),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        let mut attributes = Vec::with_capacity(params.attributes.len());
        for attribute in params.attributes {
            let attribute = entity::user_attribute::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4().to_string()),
                user_id: ActiveValue::Set(user.id.clone()),
                name: ActiveValue::Set(attribute.name),
                value: ActiveValue::Set(attribute.value),
            }
            .insert(&txn)
            .await?;
            attributes.push(attribute);
        }

        txn.commit().await?;

        Ok(User::from_entity(user, attributes))
    }

    /// Finds a user by ID with its attributes.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let attributes = self.find_attributes(id).await?;

        Ok(Some(User::from_entity(user, attributes)))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Overwrites the user's email and verification flag.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(params.id.as_str())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.email = ActiveValue::Set(params.email);
        active.email_verified = ActiveValue::Set(params.email_verified);
        active.last_modified_by = ActiveValue::Set(params.actor);
        active.last_modified_date = ActiveValue::Set(Utc::now());
        let user = active.update(self.db).await?;

        let attributes = self.find_attributes(&user.id).await?;

        Ok(Some(User::from_entity(user, attributes)))
    }

    /// Marks the user's current email as verified.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag set
    /// - `Ok(false)` - No user with that ID
    pub async fn set_email_verified(&self, id: &str, actor: &str) -> Result<bool, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.email_verified = ActiveValue::Set(true);
        active.last_modified_by = ActiveValue::Set(actor.to_string());
        active.last_modified_date = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a user and everything it owns in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User and owned rows deleted
    /// - `Ok(false)` - No user with that ID, nothing changed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ConfirmationCode::delete_many()
            .filter(entity::confirmation_code::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Subscription::delete_many()
            .filter(entity::subscription::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::UserAttribute::delete_many()
            .filter(entity::user_attribute::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    async fn find_attributes(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::user_attribute::Model>, DbErr> {
        entity::prelude::UserAttribute::find()
            .filter(entity::user_attribute::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_attribute::Column::Name)
            .all(self.db)
            .await
    }
}
