//! HTTP routes.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the document API router.
///
/// `POST /documentos` creates a document, `GET /documentos` searches.
/// `GET /health` is a liveness probe.
pub fn document_router(ctx: ApiContext) -> Router {
    Router::new()
        .route(
            "/documentos",
            post(endpoints::documents::create).get(endpoints::documents::search),
        )
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
}
