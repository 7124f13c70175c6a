// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer enumeration backends.
//
// The wire format is shared: each backend produces `PrinterRecord`s and
// the platform module only decides which host facility to ask. Windows
// shells out to PowerShell's `Get-Printer`; Unix hosts ask CUPS via
// `lpstat`.

pub mod parse;

#[cfg(unix)]
pub mod cups;
#[cfg(windows)]
pub mod windows;

use std::sync::Arc;

use crate::traits::PrinterDirectory;

/// The enumeration backend for the host this gateway runs on.
#[cfg(windows)]
pub fn host_directory() -> Arc<dyn PrinterDirectory> {
    Arc::new(windows::WindowsPrinterDirectory::new())
}

/// The enumeration backend for the host this gateway runs on.
#[cfg(unix)]
pub fn host_directory() -> Arc<dyn PrinterDirectory> {
    Arc::new(cups::CupsPrinterDirectory::new())
}
