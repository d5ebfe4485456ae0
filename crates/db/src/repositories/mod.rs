//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every statement is
//! parameterized; no SQL is built from request data.

pub mod article_repo;

pub use article_repo::ArticleRepo;
