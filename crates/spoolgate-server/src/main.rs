// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spoolgate gateway binary.
//
// Reads `SPOOLGATE_*` configuration, wires the platform backends into
// the print service and serves the HTTP surface until killed.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use spoolgate_core::AppConfig;
use spoolgate_print::{
    ExternalDocumentDispatcher, HttpFetcher, PrintService, ScriptDrawerSignaler, host_directory,
};
use spoolgate_server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading SPOOLGATE_* configuration")?;
    let _log_guard = init_tracing(&config);

    info!(
        port = config.port,
        print_tool = %config.pdf_printer_path.display(),
        drawer_script = %config.drawer_command_path.display(),
        "starting spoolgate"
    );

    let service = PrintService::new(
        host_directory(),
        Arc::new(HttpFetcher::new()?),
        Arc::new(ExternalDocumentDispatcher::new(&config.pdf_printer_path)),
        Arc::new(ScriptDrawerSignaler::new(&config.drawer_command_path)),
    );

    let app = spoolgate_server::router(AppState::new(service), &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "gateway listening");

    axum::serve(listener, app).await.context("HTTP server")?;
    Ok(())
}

/// Install the global subscriber. When a log file is configured the
/// writer is non-blocking; the returned guard must stay alive so the
/// last lines are flushed on shutdown.
fn init_tracing(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spoolgate_server=debug,spoolgate_print=debug"));

    match &config.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(Path::new)
                .unwrap_or_else(|| Path::new("spoolgate.log"));

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
