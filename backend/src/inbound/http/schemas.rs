//! Shared OpenAPI schemas for the HTTP adapter.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Error envelope documented for every non-2xx response.
///
/// Mirrors the serialised shape of [`crate::domain::Error`].
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: String,
    /// Human-readable failure description.
    #[schema(example = "page number must be a positive integer")]
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
