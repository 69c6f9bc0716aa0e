//! OpenAPI stand-ins for domain error types.
//!
//! `crate::domain` does not depend on utoipa, so the error payload is
//! described here and registered under the domain type's name.

use utoipa::ToSchema;

/// Documented values of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Missing field, malformed body or bad query string.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "not_found")]
    NotFound,
    /// Email already held by another employee.
    #[schema(rename = "conflict")]
    Conflict,
    /// Database unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Documented shape of [`crate::domain::Error`] as it appears on the wire.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "only read by the OpenAPI derive")]
pub struct ErrorSchema {
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    #[schema(example = "employee already exists with given email: elkin@vita.com")]
    message: String,
    /// Same value as the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context such as the offending field.
    #[schema(example = json!({"field": "email", "value": "elkin@vita.com", "code": "duplicate_email"}))]
    details: Option<serde_json::Value>,
}
