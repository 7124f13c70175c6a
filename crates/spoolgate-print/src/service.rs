// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print pipeline orchestrator.
//
// Holds no state of its own. Every request validates first, then touches
// the outside world, so a bad printer name never costs a download and a
// bad URL never spawns a process. The scratch document is removed on
// every exit path, success or failure.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use spoolgate_core::error::{Result, SpoolgateError};
use spoolgate_core::types::PrinterRecord;

use crate::traits::{DocumentDispatcher, DrawerSignaler, PrinterDirectory, RemoteFetcher};

/// Facade over the capability traits; one instance serves the whole
/// gateway and is cheap to clone.
#[derive(Clone)]
pub struct PrintService {
    directory: Arc<dyn PrinterDirectory>,
    fetcher: Arc<dyn RemoteFetcher>,
    dispatcher: Arc<dyn DocumentDispatcher>,
    drawer: Arc<dyn DrawerSignaler>,
}

impl PrintService {
    pub fn new(
        directory: Arc<dyn PrinterDirectory>,
        fetcher: Arc<dyn RemoteFetcher>,
        dispatcher: Arc<dyn DocumentDispatcher>,
        drawer: Arc<dyn DrawerSignaler>,
    ) -> Self {
        Self {
            directory,
            fetcher,
            dispatcher,
            drawer,
        }
    }

    /// Enumerate the installed printers.
    #[instrument(skip(self))]
    pub async fn list_printers(&self) -> Result<Vec<PrinterRecord>> {
        let printers = self.directory.list_printers().await?;
        debug!(count = printers.len(), "printers listed");
        Ok(printers)
    }

    /// Download the document at `url` and print it on `printer`.
    ///
    /// Order is fixed: existence check, download, dispatch. The temp file
    /// is removed before returning, whatever the dispatch outcome.
    #[instrument(skip(self))]
    pub async fn print_from_url(&self, url: &str, printer: &str) -> Result<()> {
        self.ensure_printer_exists(printer).await?;

        let document = self.fetcher.fetch(url).await?;
        let outcome = self.dispatcher.print(document.path(), printer).await;

        if let Err(err) = document.close() {
            warn!(%err, "failed to remove temporary document");
        }
        outcome
    }

    /// Fire the cash-drawer kick on `printer`.
    #[instrument(skip(self))]
    pub async fn open_drawer(&self, printer: &str) -> Result<()> {
        self.ensure_printer_exists(printer).await?;
        self.drawer.open_drawer(printer).await
    }

    async fn ensure_printer_exists(&self, printer: &str) -> Result<()> {
        if self.directory.exists(printer).await? {
            Ok(())
        } else {
            Err(SpoolgateError::UnknownPrinter(printer.to_string()))
        }
    }
}
