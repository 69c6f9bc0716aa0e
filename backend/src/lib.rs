//! Employee directory service library.
//!
//! Hexagonal layout: `domain` holds the record types, ports and service;
//! `inbound::http` adapts them to REST; `outbound` provides the PostgreSQL
//! and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
