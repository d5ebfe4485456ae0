//! Repository for the `news` table.

use sqlx::PgPool;

use newsgen_core::slug::{slugify, with_suffix};
use newsgen_core::types::DbId;

use crate::models::article::{Article, CreateArticle, FeedEntry, SitemapEntry, UpdateArticle};

/// Column list for news queries.
const COLUMNS: &str = "id, title, excerpt, content, category, image_url, author, \
    is_hot, views_count, slug, meta_title, meta_description, meta_keywords, \
    published_at, updated_at";

/// Default page size for listings.
pub const DEFAULT_LIMIT: i64 = 50;
/// Hard cap on page size.
pub const MAX_LIMIT: i64 = 100;
/// Number of items in the RSS feed.
pub const FEED_LIMIT: i64 = 50;

/// Clamp an optional client-supplied limit into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp an optional client-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Provides CRUD operations for news articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article with an already-resolved unique slug.
    ///
    /// Applies the site's defaulting rules: empty excerpt/content/image,
    /// author "Редакция", SEO fields falling back to the display fields.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArticle,
        slug: &str,
    ) -> Result<Article, sqlx::Error> {
        let excerpt = input.excerpt.clone().unwrap_or_default();
        let meta_title = input
            .meta_title
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| input.title.clone());
        let meta_description = input
            .meta_description
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| excerpt.clone());

        let query = format!(
            "INSERT INTO news
                (title, excerpt, content, category, image_url, author, is_hot,
                 slug, meta_title, meta_description, meta_keywords)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&excerpt)
            .bind(input.content.as_deref().unwrap_or(""))
            .bind(&input.category)
            .bind(input.image_url.as_deref().unwrap_or(""))
            .bind(input.author.as_deref().unwrap_or("Редакция"))
            .bind(input.is_hot.unwrap_or(false))
            .bind(slug)
            .bind(&meta_title)
            .bind(&meta_description)
            .bind(input.meta_keywords.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List articles ordered by publish time descending, optionally
    /// filtered by category.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY published_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Patch an article. Returns `None` if no row matched the id.
    ///
    /// `slug` carries a freshly-resolved slug when the caller changed the
    /// title; `updated_at` is always bumped.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
        slug: Option<&str>,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET
                title = COALESCE($1, title),
                excerpt = COALESCE($2, excerpt),
                content = COALESCE($3, content),
                category = COALESCE($4, category),
                image_url = COALESCE($5, image_url),
                author = COALESCE($6, author),
                is_hot = COALESCE($7, is_hot),
                meta_title = COALESCE($8, meta_title),
                meta_description = COALESCE($9, meta_description),
                meta_keywords = COALESCE($10, meta_keywords),
                slug = COALESCE($11, slug),
                updated_at = now()
             WHERE id = $12
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.author)
            .bind(input.is_hot)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(slug)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an article with exactly this title already exists.
    ///
    /// Case-sensitive exact match; the generator uses it to skip obvious
    /// duplicate drafts. Not a uniqueness guarantee under concurrent
    /// writers -- the slug constraint is the backstop.
    pub async fn title_exists(pool: &PgPool, title: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM news WHERE title = $1)")
            .bind(title)
            .fetch_one(pool)
            .await
    }

    /// Whether a slug is already taken, optionally ignoring one row
    /// (the row being updated).
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM news WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Derive a free slug for a title.
    ///
    /// Probes the base slug first, then `base-1`, `base-2`, … until an
    /// unused one is found. The probe is best-effort: a concurrent insert
    /// can still take the candidate, in which case the `uq_news_slug`
    /// constraint rejects the insert and the caller re-resolves.
    pub async fn resolve_slug(
        pool: &PgPool,
        title: &str,
        exclude_id: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        let base = slugify(title);
        let mut candidate = base.clone();
        let mut counter = 1u32;
        while Self::slug_exists(pool, &candidate, exclude_id).await? {
            candidate = with_suffix(&base, counter);
            counter += 1;
        }
        Ok(candidate)
    }

    /// Insert an article, deriving and re-deriving the slug until the
    /// unique constraint accepts it.
    ///
    /// Wraps [`resolve_slug`](Self::resolve_slug) + [`create`](Self::create):
    /// when a concurrent writer wins the race for the probed candidate, the
    /// resulting `uq_news_slug` violation is treated as the duplicate signal
    /// and the slug is re-resolved. Any other error propagates.
    pub async fn create_with_unique_slug(
        pool: &PgPool,
        input: &CreateArticle,
    ) -> Result<Article, sqlx::Error> {
        loop {
            let slug = Self::resolve_slug(pool, &input.title, None).await?;
            match Self::create(pool, input, &slug).await {
                Err(sqlx::Error::Database(db))
                    if db.code().as_deref() == Some("23505")
                        && db.constraint() == Some("uq_news_slug") =>
                {
                    tracing::debug!(slug = %slug, "Slug race lost, re-resolving");
                    continue;
                }
                other => return other,
            }
        }
    }

    /// Latest articles for the RSS feed.
    pub async fn list_for_feed(pool: &PgPool, limit: i64) -> Result<Vec<FeedEntry>, sqlx::Error> {
        sqlx::query_as::<_, FeedEntry>(
            "SELECT id, title, excerpt, category, image_url, published_at, slug
             FROM news
             ORDER BY published_at DESC, id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Every article, for the sitemap.
    pub async fn list_for_sitemap(pool: &PgPool) -> Result<Vec<SitemapEntry>, sqlx::Error> {
        sqlx::query_as::<_, SitemapEntry>(
            "SELECT id, slug, published_at, updated_at
             FROM news
             ORDER BY published_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
