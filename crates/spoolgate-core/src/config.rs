// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gateway configuration.
//
// Loaded from `SPOOLGATE_*` environment variables; every field has a
// default so the gateway runs out of the box next to its helper tools.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Runtime settings for the gateway process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// TCP port the HTTP gateway listens on.
    pub port: u16,
    /// Path to the external PDF-to-printer executable.
    pub pdf_printer_path: PathBuf,
    /// Path to the drawer-open command script.
    pub drawer_command_path: PathBuf,
    /// Allowed CORS origins; `*` permits any origin.
    pub allowed_origins: Vec<String>,
    /// Per-request timeout in seconds for the HTTP surface.
    pub http_request_timeout: u64,
    /// Log file path; logs go to stdout when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            pdf_printer_path: default_pdf_printer_path(),
            drawer_command_path: default_drawer_command_path(),
            allowed_origins: vec!["*".into()],
            http_request_timeout: 15,
            log_file: None,
        }
    }
}

/// The external tools ship alongside the gateway binary, so the defaults
/// are same-directory relative paths.
fn default_pdf_printer_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("./PDFtoPrinter.exe")
    } else {
        PathBuf::from("./pdf_to_printer.sh")
    }
}

fn default_drawer_command_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("./drawer_open_command.ps1")
    } else {
        PathBuf::from("./drawer_open_command.sh")
    }
}

impl AppConfig {
    /// Load the configuration from `SPOOLGATE_*` environment variables,
    /// falling back to the defaults for anything unset.
    ///
    /// `SPOOLGATE_ALLOWED_ORIGINS` is a comma-separated list.
    pub fn load() -> Result<Self, config::ConfigError> {
        let source = config::Environment::with_prefix("SPOOLGATE")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("allowed_origins");

        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
