//! Article models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use newsgen_core::types::{DbId, Timestamp};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub author: String,
    pub is_hot: bool,
    pub views_count: i64,
    pub slug: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub published_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
///
/// `title` and `category` are required; everything else falls back to the
/// defaults the original site used. SEO fields default from the display
/// fields when absent (handled at insert time, not here).
///
/// The two required fields deserialize absent-as-empty so a body that
/// omits them reaches the handler's validation (which rejects empty
/// values) instead of dying in the JSON extractor with a 422.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub is_hot: Option<bool>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

/// DTO for updating an existing article. `id` plus any subset of fields.
#[derive(Debug, Deserialize)]
pub struct UpdateArticle {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub is_hot: Option<bool>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

/// API-facing article projection.
///
/// Field names follow the wire contract the frontend already speaks:
/// `image_url` → `image`, `published_at` → `time`, camelCase SEO fields.
#[derive(Debug, Serialize)]
pub struct ArticleDto {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image: String,
    pub author: String,
    pub time: Timestamp,
    #[serde(rename = "isHot")]
    pub is_hot: bool,
    pub views: i64,
    pub slug: String,
    #[serde(rename = "metaTitle")]
    pub meta_title: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
}

impl From<Article> for ArticleDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            excerpt: a.excerpt,
            content: a.content,
            category: a.category,
            image: a.image_url,
            author: a.author,
            time: a.published_at,
            is_hot: a.is_hot,
            views: a.views_count,
            slug: a.slug,
            meta_title: a.meta_title,
            meta_description: a.meta_description,
        }
    }
}

/// Light projection for RSS rendering.
#[derive(Debug, FromRow)]
pub struct FeedEntry {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub published_at: Timestamp,
    pub slug: String,
}

/// Light projection for sitemap rendering.
#[derive(Debug, FromRow)]
pub struct SitemapEntry {
    pub id: DbId,
    pub slug: String,
    pub published_at: Timestamp,
    pub updated_at: Timestamp,
}
