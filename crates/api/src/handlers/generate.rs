//! Handler for triggering article generation.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use newsgen_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::query::GenerateQuery;
use crate::response::GenerateResponse;
use crate::state::AppState;

/// GET/POST /generate?action=auto|bulk
///
/// `auto` (the default) runs one generation cycle; `bulk` runs two cycles
/// per category. A cycle that cannot produce a unique article is reported
/// as `success: false` / a lower `created` count -- never as an HTTP error.
/// Upstream completion failures and a missing API key are 500s.
pub async fn generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateQuery>,
) -> AppResult<impl IntoResponse> {
    let generator = state.generator.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Configuration(
            "OPENROUTER_API_KEY is not configured".into(),
        ))
    })?;

    match params.action.as_deref().unwrap_or("auto") {
        "auto" => {
            let created = generator.generate_one(&state.pool).await?;
            let response = match created {
                Some(article) => {
                    tracing::info!(article_id = article.id, "Manual generation succeeded");
                    GenerateResponse {
                        success: true,
                        created: None,
                        message: "Новость успешно создана".into(),
                    }
                }
                None => GenerateResponse {
                    success: false,
                    created: None,
                    message: "Не удалось создать уникальную новость".into(),
                },
            };
            Ok(Json(response))
        }
        "bulk" => {
            let created = generator.generate_bulk(&state.pool).await?;
            tracing::info!(created, "Bulk generation finished");
            Ok(Json(GenerateResponse {
                success: true,
                created: Some(created),
                message: format!("Создано {created} новостей"),
            }))
        }
        other => Err(AppError::BadRequest(format!("Invalid action: {other}"))),
    }
}
