// Copyright 2026 The battery-bridge contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Standardized command execution for host facilities.
//
// Goals:
// - Centralize timeout behavior
// - Normalize stdout/stderr handling (UTF-8 lossy conversion)
// - Provide an optional status check

use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::{HostError, HostResult};

/// Default timeout for host tool invocations. Everything the bridge runs
/// (`getprop`, `dumpsys`, `am start`) is a local query or a fire-and-forget
/// launch, so anything slower than this is treated as a stuck host.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// Options to control command execution behavior.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Optional timeout to use. If None, uses [`DEFAULT_COMMAND_TIMEOUT`].
    pub timeout: Option<Duration>,
    /// If true, non-zero exit statuses will return an error.
    pub check_status: bool,
}

/// Normalized command output.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Process exit code (or -1 if unavailable)
    pub status: i32,
    /// UTF-8 (lossy) decoded stdout
    pub stdout: String,
    /// UTF-8 (lossy) decoded stderr
    pub stderr: String,
}

/// Execute a command with a timeout.
/// Returns Ok(Output) if the command completes within the timeout,
/// Err if timeout occurs or the command fails to start.
fn run_command_with_timeout(
    command: &str,
    args: &[&str],
    timeout: Duration,
) -> HostResult<Output> {
    let (tx, rx) = mpsc::channel();

    // Clone the command and args for the thread
    let command = command.to_string();
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();

    thread::spawn(move || {
        let output = Command::new(command).args(args).output();
        let _ = tx.send(output);
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => Ok(result?),
        Err(_) => Err(HostError::Timeout(format!(
            "Command timed out after {timeout:?}"
        ))),
    }
}

/// Execute a command with the provided CommandOptions.
///
/// - When options.check_status is true and exit code != 0, returns
///   HostError::CommandFailed
pub fn execute_command(
    command: &str,
    args: &[&str],
    options: &CommandOptions,
) -> HostResult<CommandOutput> {
    let timeout = options.timeout.unwrap_or(DEFAULT_COMMAND_TIMEOUT);
    let output = run_command_with_timeout(command, args, timeout)?;

    let status_code = output.status.code().unwrap_or(-1);
    let out = CommandOutput {
        status: status_code,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    if options.check_status && status_code != 0 {
        return Err(HostError::CommandFailed {
            command: format!("{command} {}", args.join(" ")),
            code: Some(status_code),
            stderr: out.stderr.clone(),
        });
    }

    Ok(out)
}

/// Convenience helper using the default timeout and no status enforcement
/// (caller may inspect `status`).
pub fn execute_command_default(command: &str, args: &[&str]) -> HostResult<CommandOutput> {
    execute_command(command, args, &CommandOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_execute_command_default_success() {
        let out = execute_command_default("echo", &["hello"]).expect("echo should succeed");
        assert_eq!(out.status, 0);
        assert!(out.stdout.contains("hello"));
    }

    #[test]
    fn test_execute_command_with_status_check() {
        let opts = CommandOptions {
            timeout: Some(Duration::from_secs(2)),
            check_status: true,
        };
        // Use `false` which returns non-zero status on Unix
        let err = execute_command("false", &[], &opts).unwrap_err();
        match err {
            HostError::CommandFailed { .. } => {}
            _ => panic!("Expected CommandFailed error"),
        }
    }

    #[test]
    fn test_execute_command_missing_binary_is_io_error() {
        let err = execute_command_default("battery-bridge-no-such-tool", &[]).unwrap_err();
        match err {
            HostError::Io(_) => {}
            _ => panic!("Expected Io error, got {err}"),
        }
    }

    #[test]
    fn test_execute_script_fixture_times_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sleeper.sh");
        {
            let mut f = std::fs::File::create(&path).expect("create script");
            writeln!(f, "#!/bin/sh\nsleep 5").expect("write script");
        }
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");

        let opts = CommandOptions {
            timeout: Some(Duration::from_millis(200)),
            check_status: false,
        };
        let err = execute_command(path.to_str().unwrap(), &[], &opts).unwrap_err();
        match err {
            HostError::Timeout(_) => {}
            _ => panic!("Expected Timeout error, got {err}"),
        }
    }
}
