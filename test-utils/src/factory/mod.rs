//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories fill in
//! audit columns and generate unique identifiers so tests only set what they assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let code = factory::confirmation_code::create_code(&db, &user.id).await?;
//!
//! let (user, alert_type, language, subscription) =
//!     factory::helpers::create_subscription_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let code = factory::confirmation_code::ConfirmationCodeFactory::new(&db, &user.id)
//!     .code("12345")
//!     .expires_in(chrono::Duration::minutes(-5))
//!     .build()
//!     .await?;
//! ```

pub mod alert_type;
pub mod confirmation_code;
pub mod helpers;
pub mod language;
pub mod subscription;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use alert_type::create_alert_type;
pub use confirmation_code::create_code;
pub use language::create_language;
pub use subscription::create_subscription;
pub use user::create_user;
