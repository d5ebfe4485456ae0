//! Domain core for the newsgen platform.
//!
//! Zero-dependency-on-infrastructure crate: shared types, the domain error
//! taxonomy, the slug builder, and the fixed news category set. Used by the
//! db, generator, and api crates.

pub mod category;
pub mod error;
pub mod slug;
pub mod types;
