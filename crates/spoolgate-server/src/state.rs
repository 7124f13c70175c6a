// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared application state for the HTTP handlers.

use spoolgate_print::PrintService;

/// State injected into every handler. Cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub service: PrintService,
}

impl AppState {
    pub fn new(service: PrintService) -> Self {
        Self { service }
    }
}
