pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_user_attribute_table;
mod m20251001_000003_create_confirmation_code_table;
mod m20251001_000004_create_language_table;
mod m20251001_000005_create_alert_type_table;
mod m20251001_000006_create_subscription_table;
mod m20251001_000007_create_event_log_table;
mod m20251002_000008_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_user_attribute_table::Migration),
            Box::new(m20251001_000003_create_confirmation_code_table::Migration),
            Box::new(m20251001_000004_create_language_table::Migration),
            Box::new(m20251001_000005_create_alert_type_table::Migration),
            Box::new(m20251001_000006_create_subscription_table::Migration),
            Box::new(m20251001_000007_create_event_log_table::Migration),
            Box::new(m20251002_000008_seed_reference_data::Migration),
        ]
    }
}
