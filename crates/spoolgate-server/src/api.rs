// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request handlers for the gateway endpoints.
//
// Handlers do field-presence checks only; everything semantic (printer
// existence, URL validity, tool exit codes) lives in the print service.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Body of `POST /print`.
#[derive(Debug, Deserialize)]
pub struct PrintRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub printer: String,
}

/// Body of `POST /open-box`.
#[derive(Debug, Deserialize)]
pub struct DrawerRequest {
    #[serde(default)]
    pub printer: String,
}

/// `GET /health`: liveness probe for the POS frontend.
pub async fn health() -> Json<Value> {
    Json(json!({ "running": true }))
}

/// `GET /list-printers`: fresh enumeration of the installed printers.
pub async fn list_printers(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let printers = state.service.list_printers().await?;
    Ok(Json(json!({ "printers": printers })))
}

/// `POST /print`: download a PDF and send it to the named printer.
pub async fn print(
    State(state): State<AppState>,
    payload: Result<Json<PrintRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    if request.url.is_empty() || request.printer.is_empty() {
        return Err(ApiError::bad_request("URL o impresora no especificados"));
    }

    info!(printer = %request.printer, url = %request.url, "print requested");
    state
        .service
        .print_from_url(&request.url, &request.printer)
        .await?;

    Ok(Json(json!({
        "message": "PDF enviado a la impresora exitosamente."
    })))
}

/// `POST /open-box`: fire the cash-drawer kick on the named printer.
pub async fn open_box(
    State(state): State<AppState>,
    payload: Result<Json<DrawerRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    if request.printer.is_empty() {
        return Err(ApiError::bad_request("No se especificó la impresora"));
    }

    info!(printer = %request.printer, "drawer open requested");
    state.service.open_drawer(&request.printer).await?;

    Ok(Json(json!({ "message": "Cajón abierto exitosamente." })))
}
