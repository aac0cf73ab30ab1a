use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::subscription::{
    CreateSubscriptionParams, Subscription, UpdateSubscriptionParams,
};

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subscription whose alert type and language have already been resolved.
    ///
    /// A second subscription for the same user and alert type violates the
    /// `uq_subscription_user_alert_type` index and fails with a unique constraint error.
    pub async fn create(&self, params: CreateSubscriptionParams) -> Result<Subscription, DbErr> {
        let now = Utc::now();
        let subscription = entity::subscription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            alert_type_id: ActiveValue::Set(params.alert_type_id),
            language_id: ActiveValue::Set(params.language_id),
            created_by: ActiveValue::Set(params.actor.clone()),
            created_date: ActiveValue::Set(now),
            last_modified_by: ActiveValue::Set(params.actor),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.enrich_one(subscription).await
    }

    /// Gets all subscriptions of a user, oldest first.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Subscription>, DbErr> {
        let subscriptions = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .order_by_asc(entity::subscription::Column::CreatedDate)
            .all(self.db)
            .await?;

        self.enrich(subscriptions).await
    }

    /// Finds a subscription by ID, scoped to its owning user.
    pub async fn find_by_id_and_user(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Subscription>, DbErr> {
        let Some(subscription) = entity::prelude::Subscription::find_by_id(id)
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.enrich_one(subscription).await?))
    }

    /// Checks whether the user already subscribes to the alert type.
    pub async fn exists_for_alert_type(
        &self,
        user_id: &str,
        alert_type_id: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::AlertTypeId.eq(alert_type_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Changes a subscription's language.
    ///
    /// # Returns
    /// - `Ok(Some(Subscription))` - Updated subscription
    /// - `Ok(None)` - No subscription with that ID
    pub async fn update(
        &self,
        params: UpdateSubscriptionParams,
    ) -> Result<Option<Subscription>, DbErr> {
        let Some(subscription) = entity::prelude::Subscription::find_by_id(params.id.as_str())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::subscription::ActiveModel = subscription.into();
        active.language_id = ActiveValue::Set(params.language_id);
        active.last_modified_by = ActiveValue::Set(params.actor);
        active.last_modified_date = ActiveValue::Set(Utc::now());
        let subscription = active.update(self.db).await?;

        Ok(Some(self.enrich_one(subscription).await?))
    }

    /// Deletes a subscription owned by the given user.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No such subscription for that user
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscription::delete_many()
            .filter(entity::subscription::Column::Id.eq(id))
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn enrich_one(
        &self,
        subscription: entity::subscription::Model,
    ) -> Result<Subscription, DbErr> {
        let id = subscription.id.clone();

        self.enrich(vec![subscription])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Subscription with id {} could not be loaded",
                id
            )))
    }

    /// Resolves alert type and language codes for a batch of subscriptions.
    async fn enrich(
        &self,
        subscriptions: Vec<entity::subscription::Model>,
    ) -> Result<Vec<Subscription>, DbErr> {
        if subscriptions.is_empty() {
            return Ok(Vec::new());
        }

        let alert_type_ids: Vec<String> = subscriptions
            .iter()
            .map(|s| s.alert_type_id.clone())
            .collect();
        let alert_types: HashMap<String, entity::alert_type::Model> =
            entity::prelude::AlertType::find()
                .filter(entity::alert_type::Column::Id.is_in(alert_type_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect();

        let language_ids: Vec<String> = subscriptions
            .iter()
            .map(|s| s.language_id.clone())
            .collect();
        let languages: HashMap<String, entity::language::Model> =
            entity::prelude::Language::find()
                .filter(entity::language::Column::Id.is_in(language_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|l| (l.id.clone(), l))
                .collect();

        subscriptions
            .into_iter()
            .map(|subscription| {
                let alert_type = alert_types
                    .get(&subscription.alert_type_id)
                    .cloned()
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "Alert type {} referenced by subscription {} not found",
                            subscription.alert_type_id, subscription.id
                        ))
                    })?;
                let language = languages
                    .get(&subscription.language_id)
                    .cloned()
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "Language {} referenced by subscription {} not found",
                            subscription.language_id, subscription.id
                        ))
                    })?;

                Ok(Subscription::from_entity(subscription, alert_type, language))
            })
            .collect()
    }
}
