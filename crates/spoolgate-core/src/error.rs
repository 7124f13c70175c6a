// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Spoolgate.
//
// Validation failures (unknown printer, bad URL) surface before any external
// process is spawned or byte downloaded.  External-tool failures carry the
// captured process output so callers can diagnose without re-running.
// Messages shown to the POS frontend are Spanish; internal diagnostics
// are English.

use thiserror::Error;

/// Top-level error type for all Spoolgate operations.
#[derive(Debug, Error)]
pub enum SpoolgateError {
    // -- Validation (user errors, detected before side effects) --
    #[error("la impresora '{0}' no existe")]
    UnknownPrinter(String),

    #[error("URL inválida: {0}")]
    InvalidUrl(String),

    // -- Enumeration --
    #[error("printer enumeration failed: {0}")]
    Enumeration(String),

    // -- Remote fetch --
    #[error("download failed: {0}")]
    Fetch(String),

    // -- External tool dispatch --
    #[error("print tool failed: {0}")]
    Print(String),

    #[error("drawer command failed: {0}")]
    Drawer(String),

    // -- Infrastructure --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SpoolgateError {
    /// Whether this error is a caller mistake rather than a gateway fault.
    ///
    /// User errors map to HTTP 400 at the transport boundary; everything
    /// else maps to 500.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UnknownPrinter(_) | Self::InvalidUrl(_))
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SpoolgateError>;
