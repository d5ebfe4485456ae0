//! Routes for triggering the generator, registered under `/generate`.
//!
//! GET runs one cycle (convenient for manual pokes); POST accepts
//! `?action=auto|bulk`.

use axum::routing::get;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(generate::generate).post(generate::generate))
}
