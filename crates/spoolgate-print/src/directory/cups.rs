// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unix printer enumeration via CUPS `lpstat -p`.
//
// `lpstat` reports one destination per line ("printer <name> is idle.
// enabled since ..."). Queue names cannot contain spaces, so the name is
// the second whitespace-separated token.

use tokio::process::Command;
use tracing::debug;

use spoolgate_core::error::{Result, SpoolgateError};
use spoolgate_core::types::PrinterRecord;

use crate::exec::run_captured;
use crate::traits::PrinterDirectory;

/// Enumerates CUPS destinations.
#[derive(Debug, Default, Clone)]
pub struct CupsPrinterDirectory;

impl CupsPrinterDirectory {
    pub fn new() -> Self {
        Self
    }
}

fn parse_lpstat_line(line: &str) -> Option<PrinterRecord> {
    let rest = line.strip_prefix("printer ")?;
    let (name, status) = rest.split_once(' ')?;

    let mut record = PrinterRecord::new();
    record.insert(PrinterRecord::NAME_KEY, name);
    record.insert("PrinterStatus", status.trim().trim_end_matches('.'));
    Some(record)
}

fn parse_lpstat_listing(output: &str) -> Vec<PrinterRecord> {
    output.lines().filter_map(parse_lpstat_line).collect()
}

#[async_trait::async_trait]
impl PrinterDirectory for CupsPrinterDirectory {
    async fn list_printers(&self) -> Result<Vec<PrinterRecord>> {
        let mut command = Command::new("lpstat");
        command.arg("-p");

        let captured = run_captured(command)
            .await
            .map_err(|e| SpoolgateError::Enumeration(format!("spawn lpstat: {e}")))?;

        // `lpstat -p` exits non-zero when no destinations exist; that is
        // an empty listing, not a failure.
        if !captured.success() && !captured.output.contains("No destinations") {
            return Err(SpoolgateError::Enumeration(format!(
                "lpstat exited with {}: {}",
                captured.status,
                captured.output.trim()
            )));
        }

        let records = parse_lpstat_listing(&captured.output);
        debug!(count = records.len(), "enumerated CUPS destinations");
        Ok(records)
    }
}
