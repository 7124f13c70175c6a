// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Windows printer enumeration via PowerShell `Get-Printer`.

use tokio::process::Command;
use tracing::debug;

use spoolgate_core::error::{Result, SpoolgateError};
use spoolgate_core::types::PrinterRecord;

use crate::directory::parse;
use crate::exec::run_captured;
use crate::traits::PrinterDirectory;

/// Pipeline that flattens each installed printer into one
/// `key=value;key=value` line, the format `parse` understands.
const ENUMERATION_COMMAND: &str = "Get-Printer | Select-Object Name, DriverName, PortName, PrinterStatus, Location | ForEach-Object { \"Name=$($_.Name);DriverName=$($_.DriverName);PortName=$($_.PortName);PrinterStatus=$($_.PrinterStatus);Location=$($_.Location)\" }";

/// Enumerates printers registered with the Windows spooler.
#[derive(Debug, Default, Clone)]
pub struct WindowsPrinterDirectory;

impl WindowsPrinterDirectory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PrinterDirectory for WindowsPrinterDirectory {
    async fn list_printers(&self) -> Result<Vec<PrinterRecord>> {
        let mut command = Command::new("powershell");
        command.arg("-Command").arg(ENUMERATION_COMMAND);

        let captured = run_captured(command)
            .await
            .map_err(|e| SpoolgateError::Enumeration(format!("spawn powershell: {e}")))?;

        if !captured.success() {
            return Err(SpoolgateError::Enumeration(format!(
                "powershell exited with {}: {}",
                captured.status,
                captured.output.trim()
            )));
        }

        let records = parse::parse_listing(&captured.output);
        debug!(count = records.len(), "enumerated spooler printers");
        Ok(records)
    }
}
