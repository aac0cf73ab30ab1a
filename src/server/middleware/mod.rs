//! Request extractors that run ahead of the controllers.
//!
//! Authentication happens upstream at the gateway. What reaches this service is the
//! authenticated subject, forwarded in a header and used to stamp audit columns and
//! audit events. JSON bodies are deserialized and validated here too, so controllers
//! only see well-formed payloads.

pub mod actor;
pub mod json;
