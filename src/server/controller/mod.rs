//! HTTP request handlers.
//!
//! Controllers convert DTOs to operation parameters, validate request bodies, call the
//! service layer and record an audit event once the operation has succeeded.

pub mod alert_type;
pub mod confirmation_code;
pub mod language;
pub mod subscription;
pub mod user;
pub mod verification;
