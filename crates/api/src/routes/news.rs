//! Routes for article CRUD, registered under `/news`.
//!
//! ```text
//! GET    /    list (or single lookup via ?id=)
//! POST   /    create
//! PUT    /    update (id in body)
//! DELETE /    delete (?id=)
//! ```
//!
//! Unsupported methods get a 405 from the router.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(news::list_or_get)
            .post(news::create)
            .put(news::update)
            .delete(news::delete),
    )
}
