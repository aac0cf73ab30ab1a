//! API data transfer objects shared by controllers and the OpenAPI document.
//!
//! DTOs are the wire representation of the service's resources. Server-side domain models
//! convert into these at the controller boundary, and request DTOs are converted into
//! operation parameters before reaching the service layer.

pub mod alert_type;
pub mod api;
pub mod confirmation_code;
pub mod language;
pub mod subscription;
pub mod user;
