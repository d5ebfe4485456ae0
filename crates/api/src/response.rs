//! Response envelope types for API handlers.
//!
//! The shapes follow the wire contract the existing frontend speaks:
//! listings are `{news: [...], count}`, lookups are `{news: {...}}`, and
//! mutations report `{success, ...}`.

use serde::Serialize;

use newsgen_core::types::DbId;
use newsgen_db::models::article::ArticleDto;

/// `GET /news` (listing) response.
#[derive(Debug, Serialize)]
pub struct NewsListResponse {
    pub news: Vec<ArticleDto>,
    pub count: usize,
}

/// `GET /news?id=` (single lookup) response.
#[derive(Debug, Serialize)]
pub struct NewsItemResponse {
    pub news: ArticleDto,
}

/// `POST /news` response.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: DbId,
    pub slug: String,
}

/// `PUT /news` and `DELETE /news` response.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Generation outcome. `created` is only present for bulk runs.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<u32>,
    pub message: String,
}
