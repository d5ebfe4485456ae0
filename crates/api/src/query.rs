//! Shared query parameter types for API handlers.

use serde::Deserialize;

use newsgen_core::types::DbId;

/// Query parameters for the news listing/lookup endpoint
/// (`?id=&category=&limit=&offset=`).
///
/// When `id` is present the other parameters are ignored and the endpoint
/// behaves as a single-article lookup.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub id: Option<DbId>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// The `?id=` parameter for delete.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<DbId>,
}

/// The `?action=` parameter for generation (`auto` or `bulk`).
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub action: Option<String>,
}
