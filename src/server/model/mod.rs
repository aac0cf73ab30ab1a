//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request DTOs that are validated on binding get their `Validate` rules here, next to the
//! parameter types they are converted into.

pub mod alert_type;
pub mod confirmation_code;
pub mod language;
pub mod subscription;
pub mod user;
