//! Domain model structs and DTOs.
//!
//! The article submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - The API-facing projection with its legacy wire names

pub mod article;
