//! Domain primitives, ports and services.
//!
//! Purpose: define the employee record, the transport-agnostic error payload
//! and the use-case services the inbound adapters drive. Nothing here knows
//! about HTTP or SQL.
//!
//! Public surface:
//! - Employee, EmployeeId, EmployeeProfile: the stored record and its parts.
//! - Error, ErrorCode: API error payload and stable error identifier.
//! - EmployeeService: implements the driving ports over a repository.
//! - TraceId: request-scoped correlation identifier.

pub mod employee;
pub mod error;
mod employee_service;
pub mod ports;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeId, EmployeeProfile};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
