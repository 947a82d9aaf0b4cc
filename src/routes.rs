//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-renders the FishCast Leptos app for every route it declares, serves
//! the compiled WASM/JS/CSS bundle under `/pkg`, answers `/healthz`, and
//! forwards `POST /api/analyze` to the image-analysis service. Unknown page
//! navigations (`GET`/`HEAD`) are sent to `/`, where the client-side route
//! guard picks the right screen. Anything else unmatched, and every unknown
//! `/api/*` path, gets a JSON 404 so API callers never follow a redirect.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{any, get, post};
use axum::{Json, Router};
use fishcast_client::app::{App, shell};
use fishcast_client::net::types::AnalysisResponse;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::analyze::AnalyzeProxy;

/// 10 MB image plus multipart framing.
const ANALYZE_BODY_LIMIT: usize = 11 * 1024 * 1024;

/// Full application router: API, SSR routes, bundle, fallback.
pub fn app(leptos_options: LeptosOptions, analyzer: AnalyzeProxy) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes(analyzer)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not depend on the Leptos app, plus the fallback.
fn base_routes(analyzer: AnalyzeProxy) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/api/analyze",
            post(analyze).layer(DefaultBodyLimit::max(ANALYZE_BODY_LIMIT)),
        )
        .route("/api/{*rest}", any(api_not_found))
        .fallback(unmatched)
        .with_state(analyzer)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `POST /api/analyze`: pass the upload through to the analysis service.
async fn analyze(State(analyzer): State<AnalyzeProxy>, headers: HeaderMap, body: Bytes) -> Response {
    match analyzer.forward(headers.get(header::CONTENT_TYPE), body).await {
        Ok(reply) => {
            tracing::info!(status = %reply.status, bytes = reply.body.len(), "analysis forwarded");
            let mut response = (reply.status, reply.body).into_response();
            if let Some(content_type) = reply.content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, content_type);
            }
            response
        }
        Err(e) => {
            tracing::warn!(error = ?e, "analysis not forwarded");
            json_failure(e.status(), &e.to_string())
        }
    }
}

async fn api_not_found() -> Response {
    json_failure(StatusCode::NOT_FOUND, "Not found")
}

async fn unmatched(method: Method) -> Response {
    if method == Method::GET || method == Method::HEAD {
        Redirect::temporary("/").into_response()
    } else {
        json_failure(StatusCode::NOT_FOUND, "Not found")
    }
}

fn json_failure(status: StatusCode, message: &str) -> Response {
    (status, Json(AnalysisResponse::failure(message))).into_response()
}
