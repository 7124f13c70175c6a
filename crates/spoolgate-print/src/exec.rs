// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Child-process execution with combined output capture.
//
// All external tools (enumeration shell, print tool, drawer script) run
// through `run_captured` so their stdout and stderr end up in one string
// that error messages can carry verbatim.

use std::io;
use std::process::ExitStatus;

use tokio::process::Command;

/// Exit status plus the interleaved stdout/stderr of a finished child.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub output: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `command` to completion and capture everything it printed.
///
/// On Windows the child runs with `CREATE_NO_WINDOW` so helper tools
/// never flash a console on the POS terminal.
pub async fn run_captured(mut command: Command) -> io::Result<CapturedOutput> {
    #[cfg(windows)]
    {
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let raw = command.output().await?;

    let mut output = String::from_utf8_lossy(&raw.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&raw.stderr);
    if !stderr.is_empty() {
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&stderr);
    }

    Ok(CapturedOutput {
        status: raw.status,
        output,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_and_exit_status() {
        let mut command = Command::new("sh");
        command.arg("-c").arg("echo ready");

        let captured = run_captured(command).await.expect("run");
        assert!(captured.success());
        assert_eq!(captured.output.trim(), "ready");
    }

    #[tokio::test]
    async fn interleaves_stderr_after_stdout() {
        let mut command = Command::new("sh");
        command.arg("-c").arg("echo out; echo err >&2; exit 3");

        let captured = run_captured(command).await.expect("run");
        assert!(!captured.success());
        assert_eq!(captured.status.code(), Some(3));
        assert!(captured.output.contains("out"));
        assert!(captured.output.contains("err"));
    }

    #[tokio::test]
    async fn missing_binary_surfaces_as_io_error() {
        let command = Command::new("/nonexistent/spoolgate-no-such-tool");
        assert!(run_captured(command).await.is_err());
    }
}
