//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                       health check
//! /robots.txt                   robots.txt (GET)
//! /rss.xml                      RSS feed (GET)
//! /sitemap.xml                  sitemap (GET)
//!
//! /api/v1/news                  list/lookup (GET), create (POST),
//!                               update (PUT), delete (DELETE)
//! /api/v1/generate              trigger generation (GET, POST)
//! ```

pub mod feeds;
pub mod generate;
pub mod health;
pub mod news;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/news", news::router())
        .nest("/generate", generate::router())
}
