//! Article generation: draft content with an external completion API,
//! deduplicate against existing rows, and persist the result.
//!
//! The moving parts are behind traits ([`provider::ContentProvider`],
//! [`provider::ImageProvider`]) so the one [`service::Generator`] replaces
//! what used to be a pile of copy-pasted handler variants differing only in
//! which upstream they called.

pub mod image;
pub mod openrouter;
pub mod parse;
pub mod provider;
pub mod service;

pub use provider::{ContentProvider, ImageProvider, ProviderError};
pub use service::{GenerateError, Generator, GeneratorConfig};
