//! Router assembly.
//!
//! Everything except `/healthz` is a static file under the site directory;
//! directory paths resolve to their `index.html`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}
