// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spoolgate — HTTP surface.
//
// Four endpoints over the print service: liveness, enumeration, print
// and drawer. The router also owns the cross-cutting layers: request
// tracing, the forced JSON content type, the per-request timeout and the
// CORS policy the POS frontend needs.

pub mod api;
pub mod error;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use spoolgate_core::AppConfig;

pub use state::AppState;

/// How long a preflight response may be cached by the browser.
const CORS_MAX_AGE_SECS: u64 = 300;

/// Build the gateway router with all middleware attached.
pub fn router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/list-printers", get(api::list_printers))
        .route("/print", post(api::print))
        .route("/open-box", post(api::open_box))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http_request_timeout,
        )))
        .layer(cors_layer(&config.allowed_origins))
}

/// CORS policy for the POS frontend. `*` in the configured origins opens
/// the gateway to any origin; otherwise only the listed ones may call.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            ACCEPT,
            HeaderName::from_static("x-app-version"),
        ])
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS));

    if allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
