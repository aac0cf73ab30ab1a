//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Code classification, reference data resolution, uniqueness rules
//! - **Orchestration**: Coordinating multiple repository calls for one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Partial Updates**: Running PATCH documents through `PatchProcessor` before persisting

pub mod alert_type;
pub mod confirmation_code;
pub mod language;
pub mod subscription;
pub mod user;
