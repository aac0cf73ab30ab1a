//! Partial updates via JSON Patch (RFC 6902) and JSON Merge Patch (RFC 7386).
//!
//! A resource is never edited field by field. `PatchProcessor::apply` serializes the
//! resource's patchable snapshot to a `serde_json::Value`, applies the document to that
//! tree, deserializes the tree back into the snapshot type and finally runs the type's
//! validation rules. The caller's value is only ever read.
//!
//! Failures fall into two groups that map to different error payloads:
//! - `PatchError` when the document is unparseable, an operation fails (including a
//!   failing `test` op) or the result no longer has the snapshot's shape
//! - `ValidationErrors` when the result is well-formed but breaks a field rule

pub mod extract;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::server::{error::AppError, validation::Validate};

pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";
pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

#[derive(Error, Debug)]
pub enum PatchError {
    /// The request body is not a well-formed patch document.
    #[error("Invalid patch document: {0}")]
    InvalidDocument(String),

    /// An operation could not be applied. No operation of the document takes effect.
    #[error("Patch could not be applied: {0}")]
    ApplyFailed(String),

    /// The patched document no longer matches the resource's shape.
    #[error("Patched resource is not valid: {0}")]
    IncompatibleResult(String),
}

/// A parsed patch document in one of the two supported flavours.
#[derive(Debug, Clone)]
pub enum PatchDocument {
    /// Ordered RFC 6902 operations, applied all-or-nothing.
    JsonPatch(json_patch::Patch),
    /// RFC 7386 overlay. `null` members remove keys.
    MergePatch(Value),
}

impl PatchDocument {
    pub fn from_json_patch(value: Value) -> Result<Self, PatchError> {
        if !value.is_array() {
            return Err(PatchError::InvalidDocument(
                "JSON Patch must be an array of operations".to_string(),
            ));
        }

        let operations: json_patch::Patch = serde_json::from_value(value)
            .map_err(|e| PatchError::InvalidDocument(format!("invalid JSON Patch format: {e}")))?;

        Ok(Self::JsonPatch(operations))
    }

    /// Any JSON value is a valid merge patch. A non-object replaces the target wholesale.
    pub fn from_merge_patch(value: Value) -> Self {
        Self::MergePatch(value)
    }

    /// Applies the document to a copy of `document`.
    pub fn apply_to(&self, document: &Value) -> Result<Value, PatchError> {
        let mut patched = document.clone();

        match self {
            Self::JsonPatch(operations) => json_patch::patch(&mut patched, operations)
                .map_err(|e| PatchError::ApplyFailed(e.to_string()))?,
            Self::MergePatch(overlay) => json_patch::merge(&mut patched, overlay),
        }

        Ok(patched)
    }
}

pub struct PatchProcessor;

impl PatchProcessor {
    /// Produces a patched, validated copy of `object`.
    ///
    /// # Returns
    /// - `Ok(T)` - New instance with the patch applied and every rule satisfied
    /// - `Err(AppError::MalformedPatch)` - Document failed to apply or produced the wrong shape
    /// - `Err(AppError::Validation)` - Patched value violates one or more rules
    /// - `Err(AppError::InternalError)` - `object` itself could not be serialized
    pub fn apply<T>(object: &T, patch: &PatchDocument) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned + Validate,
    {
        let document = serde_json::to_value(object)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize resource: {e}")))?;

        let patched = patch.apply_to(&document)?;

        let candidate: T = serde_json::from_value(patched)
            .map_err(|e| PatchError::IncompatibleResult(e.to_string()))?;

        candidate.validate()?;

        Ok(candidate)
    }
}
