//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. The
//! `diesel print-schema` command regenerates them from a live database.

diesel::table! {
    /// Employee directory table.
    ///
    /// `email` carries the unique index `employees_email_key`; the pair
    /// (`first_name`, `last_name`) is indexed for name lookups.
    employees (id) {
        /// Primary key from a `BIGSERIAL` sequence.
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
    }
}
