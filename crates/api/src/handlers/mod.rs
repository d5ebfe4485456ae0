//! HTTP handler implementations, one module per feature area.

pub mod feeds;
pub mod generate;
pub mod news;
