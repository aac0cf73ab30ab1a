pub use super::alert_type::Entity as AlertType;
pub use super::confirmation_code::Entity as ConfirmationCode;
pub use super::event_log::Entity as EventLog;
pub use super::language::Entity as Language;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
pub use super::user_attribute::Entity as UserAttribute;
