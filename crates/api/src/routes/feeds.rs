//! Routes for the SEO artifacts, registered at the site root.
//!
//! ```text
//! GET /robots.txt
//! GET /rss.xml
//! GET /sitemap.xml
//! ```
//!
//! GET-only; other methods get a 405 from the router.

use axum::routing::get;
use axum::Router;

use crate::handlers::feeds;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(feeds::robots))
        .route("/rss.xml", get(feeds::rss))
        .route("/sitemap.xml", get(feeds::sitemap))
}
