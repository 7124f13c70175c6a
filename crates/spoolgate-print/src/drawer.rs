// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cash-drawer kick via a companion script.
//
// The drawer solenoid hangs off the receipt printer, so "open the drawer"
// means sending the right escape pulse through the printer. That logic
// lives in a script shipped next to the gateway: PowerShell on Windows
// (invoked with `-Printer <name>`), a plain executable elsewhere (printer
// name as the first argument).

use std::path::PathBuf;

use tokio::process::Command;
use tracing::info;

use spoolgate_core::error::{Result, SpoolgateError};

use crate::exec::run_captured;
use crate::traits::DrawerSignaler;

/// Signaler that runs the configured drawer script.
#[derive(Debug, Clone)]
pub struct ScriptDrawerSignaler {
    script_path: PathBuf,
}

impl ScriptDrawerSignaler {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }

    #[cfg(windows)]
    fn command(&self, printer: &str) -> Command {
        let mut command = Command::new("powershell");
        command
            .arg("-NoProfile")
            .arg("-ExecutionPolicy")
            .arg("Bypass")
            .arg("-File")
            .arg(&self.script_path)
            .arg("-Printer")
            .arg(printer);
        command
    }

    #[cfg(not(windows))]
    fn command(&self, printer: &str) -> Command {
        let mut command = Command::new(&self.script_path);
        command.arg(printer);
        command
    }
}

#[async_trait::async_trait]
impl DrawerSignaler for ScriptDrawerSignaler {
    async fn open_drawer(&self, printer: &str) -> Result<()> {
        let captured = run_captured(self.command(printer)).await.map_err(|e| {
            SpoolgateError::Drawer(format!("spawn {}: {e}", self.script_path.display()))
        })?;

        if !captured.success() {
            return Err(SpoolgateError::Drawer(format!(
                "{} exited with {}: {}",
                self.script_path.display(),
                captured.status,
                captured.output.trim()
            )));
        }

        info!(printer, "drawer-open signal sent");
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn executable_script(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("drawer.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        path
    }

    #[tokio::test]
    async fn script_receives_the_printer_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let record = dir.path().join("printer.txt");
        let script = executable_script(&dir, &format!("echo \"$1\" > {}", record.display()));
        let signaler = ScriptDrawerSignaler::new(script);

        signaler.open_drawer("EPSON TM-T20III").await.expect("open");

        let printer = std::fs::read_to_string(&record).expect("read record");
        assert_eq!(printer.trim(), "EPSON TM-T20III");
    }

    #[tokio::test]
    async fn failing_script_is_a_drawer_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = executable_script(&dir, "echo 'no drawer attached' >&2; exit 1");
        let signaler = ScriptDrawerSignaler::new(script);

        let err = signaler.open_drawer("EPSON").await.expect_err("must fail");
        assert!(matches!(err, SpoolgateError::Drawer(_)));
        assert!(err.to_string().contains("no drawer attached"));
    }

    #[tokio::test]
    async fn missing_script_is_a_drawer_error() {
        let signaler = ScriptDrawerSignaler::new(Path::new("/nonexistent/drawer.sh"));

        let err = signaler.open_drawer("EPSON").await.expect_err("must fail");
        assert!(matches!(err, SpoolgateError::Drawer(_)));
    }
}
