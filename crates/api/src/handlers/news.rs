//! Handlers for article CRUD.
//!
//! The listing endpoint doubles as a single-article lookup when `?id=` is
//! supplied, matching the contract the frontend already speaks.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newsgen_core::category::HOME_CATEGORY;
use newsgen_db::models::article::{ArticleDto, CreateArticle, UpdateArticle};
use newsgen_db::repositories::article_repo::{clamp_limit, clamp_offset};
use newsgen_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::query::{IdQuery, NewsQuery};
use crate::response::{CreatedResponse, NewsItemResponse, NewsListResponse, SuccessResponse};
use crate::state::AppState;

/// GET /news
///
/// With `?id=`: single-article lookup, 404 when absent. Otherwise: a page
/// of articles ordered by publish time descending, optionally filtered by
/// category (`Главная` means "all").
pub async fn list_or_get(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(id) = params.id {
        let article = ArticleRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".into()))?;
        return Ok(Json(NewsItemResponse {
            news: article.into(),
        })
        .into_response());
    }

    let category = params
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != HOME_CATEGORY);

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let articles = ArticleRepo::list(&state.pool, category, limit, offset).await?;
    let news: Vec<ArticleDto> = articles.into_iter().map(Into::into).collect();

    Ok(Json(NewsListResponse {
        count: news.len(),
        news,
    })
    .into_response())
}

/// POST /news
///
/// Creates an article from a manual submission. `title` and `category` are
/// required; the slug is derived from the title and uniquified.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    if input.title.is_empty() || input.category.is_empty() {
        return Err(AppError::BadRequest(
            "Title and category are required".into(),
        ));
    }

    let article = ArticleRepo::create_with_unique_slug(&state.pool, &input).await?;

    tracing::info!(
        article_id = article.id,
        slug = %article.slug,
        category = %article.category,
        "Article created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            id: article.id,
            slug: article.slug,
        }),
    ))
}

/// PUT /news
///
/// Patches an article by the `id` in the body. A changed title regenerates
/// the slug through the same uniqueness probe as create.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("News ID is required".into()))?;

    let slug = match &input.title {
        Some(title) => Some(ArticleRepo::resolve_slug(&state.pool, title, Some(id)).await?),
        None => None,
    };

    let updated = ArticleRepo::update(&state.pool, id, &input, slug.as_deref()).await?;

    match updated {
        Some(article) => {
            tracing::info!(article_id = article.id, slug = %article.slug, "Article updated");
            Ok(Json(SuccessResponse { success: true }))
        }
        None => Err(AppError::NotFound("News not found".into())),
    }
}

/// DELETE /news?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<impl IntoResponse> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("News ID is required".into()))?;

    if ArticleRepo::delete(&state.pool, id).await? {
        tracing::info!(article_id = id, "Article deleted");
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(AppError::NotFound("News not found".into()))
    }
}
