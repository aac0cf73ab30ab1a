//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the notification subscription service:
//! API endpoints, business logic, data access and background tasks. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, body validation, DTO conversion and audit recording
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters and validation rules
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request extractors such as the calling actor
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, code settings, audit sink)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Patch** (`patch/`) - JSON Patch and Merge Patch application
//! - **Validation** (`validation`) - Field rules run on request bodies and patched snapshots
//! - **Event** (`event/`) - Non-blocking audit event sink and its writer task
//! - **Scheduler** (`scheduler/`) - Cron job sweeping expired confirmation codes
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the actor, validates the body, converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** records an audit event, converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod event;
pub mod middleware;
pub mod model;
pub mod patch;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
