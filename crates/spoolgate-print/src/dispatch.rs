// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document dispatch through the external print tool.
//
// The gateway never drives printer drivers itself; it hands the file to a
// companion executable (`PDFtoPrinter.exe` on Windows) that takes the
// document path and the printer name as its two arguments.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::info;

use spoolgate_core::error::{Result, SpoolgateError};

use crate::exec::run_captured;
use crate::traits::DocumentDispatcher;

/// Dispatcher that shells out to a configured print tool.
#[derive(Debug, Clone)]
pub struct ExternalDocumentDispatcher {
    tool_path: PathBuf,
}

impl ExternalDocumentDispatcher {
    pub fn new(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl DocumentDispatcher for ExternalDocumentDispatcher {
    async fn print(&self, document: &Path, printer: &str) -> Result<()> {
        let mut command = Command::new(&self.tool_path);
        command.arg(document).arg(printer);

        let captured = run_captured(command).await.map_err(|e| {
            SpoolgateError::Print(format!("spawn {}: {e}", self.tool_path.display()))
        })?;

        if !captured.success() {
            return Err(SpoolgateError::Print(format!(
                "{} exited with {}: {}",
                self.tool_path.display(),
                captured.status,
                captured.output.trim()
            )));
        }

        info!(printer, document = %document.display(), "document handed to print tool");
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use std::os::unix::fs::PermissionsExt;

    fn executable_script(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("tool.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        path
    }

    #[tokio::test]
    async fn zero_exit_is_success() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tool = executable_script(&dir, "exit 0");
        let dispatcher = ExternalDocumentDispatcher::new(tool);

        dispatcher
            .print(Path::new("/tmp/ticket.pdf"), "EPSON")
            .await
            .expect("print");
    }

    #[tokio::test]
    async fn nonzero_exit_carries_the_tool_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tool = executable_script(&dir, "echo 'paper jam' >&2; exit 3");
        let dispatcher = ExternalDocumentDispatcher::new(tool);

        let err = dispatcher
            .print(Path::new("/tmp/ticket.pdf"), "EPSON")
            .await
            .expect_err("must fail");

        assert!(matches!(err, SpoolgateError::Print(_)));
        assert!(err.to_string().contains("paper jam"));
    }

    #[tokio::test]
    async fn missing_tool_is_a_print_error() {
        let dispatcher = ExternalDocumentDispatcher::new("/nonexistent/print-tool");

        let err = dispatcher
            .print(Path::new("/tmp/ticket.pdf"), "EPSON")
            .await
            .expect_err("must fail");
        assert!(matches!(err, SpoolgateError::Print(_)));
    }

    #[tokio::test]
    async fn tool_receives_document_then_printer() {
        let dir = tempfile::tempdir().expect("tempdir");
        let record = dir.path().join("args.txt");
        let tool = executable_script(&dir, &format!("echo \"$1|$2\" > {}", record.display()));
        let dispatcher = ExternalDocumentDispatcher::new(tool);

        dispatcher
            .print(Path::new("/tmp/ticket.pdf"), "EPSON TM-T20III")
            .await
            .expect("print");

        let args = std::fs::read_to_string(&record).expect("read args");
        assert_eq!(args.trim(), "/tmp/ticket.pdf|EPSON TM-T20III");
    }
}
