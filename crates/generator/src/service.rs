//! The generate-and-publish workflow.
//!
//! One cycle: pick a category, ask the content provider for a draft, parse
//! the JSON payload out of it, skip drafts whose title already exists, and
//! insert the survivor with a unique slug. Parse failures and duplicate
//! titles burn an attempt; upstream and database errors abort the cycle.

use rand::Rng;
use sqlx::PgPool;

use newsgen_core::category;
use newsgen_core::types::DbId;
use newsgen_db::models::article::CreateArticle;
use newsgen_db::repositories::ArticleRepo;

use crate::parse::{self, ParseError};
use crate::provider::{ContentProvider, ImageProvider, ProviderError};

/// Attempts per generation cycle before giving up on that slot.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Bulk generation runs this many cycles per category.
pub const BULK_CYCLES_PER_CATEGORY: usize = 2;

/// Roughly one in four generated articles is flagged hot.
const HOT_RATIO: (u32, u32) = (1, 4);

/// Tuning for the generation service.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Attempt cap per cycle (parse failure or duplicate title burns one).
    pub max_attempts: u32,
    /// Byline for generated articles.
    pub author: String,
    /// Categories drafts are generated for.
    pub categories: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            author: "Редакция".to_string(),
            categories: category::CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Errors that abort a generation request.
///
/// An exhausted attempt budget is not an error -- `generate_one` reports it
/// as `Ok(None)` and bulk generation simply counts fewer successes.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Identity of a freshly-created article.
#[derive(Debug)]
pub struct CreatedArticle {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub category: String,
}

/// The generate-and-publish service.
///
/// Holds the pluggable providers plus tuning; shared across requests via
/// `Arc` in the API state.
pub struct Generator {
    content: Box<dyn ContentProvider>,
    images: Box<dyn ImageProvider>,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(
        content: Box<dyn ContentProvider>,
        images: Box<dyn ImageProvider>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            content,
            images,
            config,
        }
    }

    /// Run one generation cycle for a random category.
    ///
    /// `Ok(None)` means every attempt was spent on unparseable drafts or
    /// duplicate titles -- a no-op, not a failure.
    pub async fn generate_one(&self, pool: &PgPool) -> Result<Option<CreatedArticle>, GenerateError> {
        let category = self.pick_category();
        self.generate_for_category(pool, &category).await
    }

    /// Run one generation cycle for a specific category.
    pub async fn generate_for_category(
        &self,
        pool: &PgPool,
        category: &str,
    ) -> Result<Option<CreatedArticle>, GenerateError> {
        for attempt in 1..=self.config.max_attempts {
            let raw = self.content.draft(category).await?;

            let draft = match parse::parse_draft(&raw) {
                Ok(draft) => draft,
                Err(err @ (ParseError::NoJsonObject | ParseError::InvalidJson(_))) => {
                    tracing::warn!(
                        category = %category,
                        attempt,
                        error = %err,
                        "Draft did not contain a parseable payload"
                    );
                    continue;
                }
            };

            let fields = draft.into_fields(category);

            if ArticleRepo::title_exists(pool, &fields.title).await? {
                tracing::info!(
                    category = %category,
                    attempt,
                    title = %fields.title,
                    "Draft title already published, regenerating"
                );
                continue;
            }

            let input = CreateArticle {
                title: fields.title,
                category: category.to_string(),
                excerpt: Some(fields.excerpt),
                content: Some(fields.content),
                image_url: Some(self.images.image_url(category)),
                author: Some(self.config.author.clone()),
                is_hot: Some(rand::rng().random_ratio(HOT_RATIO.0, HOT_RATIO.1)),
                meta_title: Some(fields.meta_title),
                meta_description: Some(fields.meta_description),
                meta_keywords: Some(fields.meta_keywords),
            };

            let article = ArticleRepo::create_with_unique_slug(pool, &input).await?;

            tracing::info!(
                article_id = article.id,
                slug = %article.slug,
                category = %category,
                "Generated article published"
            );

            return Ok(Some(CreatedArticle {
                id: article.id,
                slug: article.slug,
                title: article.title,
                category: article.category,
            }));
        }

        tracing::warn!(
            category = %category,
            attempts = self.config.max_attempts,
            "Generation attempts exhausted without a unique article"
        );
        Ok(None)
    }

    /// Run a bulk batch: two cycles per configured category.
    ///
    /// Returns the number of articles actually created. Cycles that fail to
    /// produce a unique article reduce the count; they never fail the batch.
    /// Upstream and database errors still abort the whole request.
    pub async fn generate_bulk(&self, pool: &PgPool) -> Result<u32, GenerateError> {
        let cycles = self.config.categories.len() * BULK_CYCLES_PER_CATEGORY;
        let mut created = 0u32;
        for _ in 0..cycles {
            if self.generate_one(pool).await?.is_some() {
                created += 1;
            }
        }
        Ok(created)
    }

    fn pick_category(&self) -> String {
        let idx = rand::rng().random_range(0..self.config.categories.len());
        self.config.categories[idx].clone()
    }
}
