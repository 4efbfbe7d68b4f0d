//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A joined `*WithClient` row where list screens show the client name
//!
//! Status-like columns decode through the `allagro-core` enums, so an
//! unexpected stored value fails the row decode instead of leaking an
//! arbitrary string into the application.

pub mod client;
pub mod order;
pub mod profile;
pub mod project;
