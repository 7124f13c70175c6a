// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability traits for the print pipeline.
//
// Each external effect the gateway performs sits behind one of these
// traits: host enumeration, remote download, print-tool dispatch, and the
// drawer signal. The orchestrator depends only on the traits, so tests
// swap in stubs and platforms swap in their native backends.

use std::path::Path;

use async_trait::async_trait;

use spoolgate_core::error::Result;
use spoolgate_core::types::PrinterRecord;

use crate::fetch::TemporaryDocument;

/// Read-only view of the printers installed on the host.
#[async_trait]
pub trait PrinterDirectory: Send + Sync {
    /// Enumerate the installed printers, fresh on every call.
    async fn list_printers(&self) -> Result<Vec<PrinterRecord>>;

    /// Whether a printer with exactly this name is installed.
    ///
    /// Matching is an exact, case-sensitive comparison of the full name;
    /// "HP" does not match "HP2".
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .list_printers()
            .await?
            .iter()
            .any(|printer| printer.name() == Some(name)))
    }
}

/// Download a remote document to local scratch storage.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    /// Fetch the document at `url` into a temporary file.
    ///
    /// The returned handle deletes the file when dropped; callers that
    /// want the deletion error should call
    /// [`TemporaryDocument::close`] instead.
    async fn fetch(&self, url: &str) -> Result<TemporaryDocument>;
}

/// Hand a local document to the platform print tool.
#[async_trait]
pub trait DocumentDispatcher: Send + Sync {
    /// Print `document` on the named printer. Returns once the external
    /// tool has exited, not when paper comes out.
    async fn print(&self, document: &Path, printer: &str) -> Result<()>;
}

/// Fire the cash-drawer kick attached to a receipt printer.
#[async_trait]
pub trait DrawerSignaler: Send + Sync {
    /// Send the drawer-open pulse through the named printer.
    async fn open_drawer(&self, printer: &str) -> Result<()>;
}
