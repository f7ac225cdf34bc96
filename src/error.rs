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

//! Error types for the host-facility layer.
//!
//! These errors never cross the bridge boundary: every bridge operation
//! terminates in a normal reply, and host-level failures are downgraded to
//! boolean outcomes or logged and absorbed. The types here exist so the host
//! layer can report *why* a command or launch failed to the diagnostics log.

use std::io;
use thiserror::Error;

/// Errors raised by the host-facility layer (command execution and intent
/// launches). Callers above the host traits only ever see these through
/// `tracing` output.
#[derive(Debug, Error)]
pub enum HostError {
    /// An I/O error while spawning or reading a host command.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A host command did not complete within its timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// A host command completed with a non-zero exit status.
    #[error("Command failed: '{command}' (code: {code:?}) stderr: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The host refused an intent launch, e.g. no activity handles the
    /// requested action on this device.
    #[error("Launch rejected for action '{action}': {detail}")]
    LaunchRejected { action: String, detail: String },
}

pub type HostResult<T> = Result<T, HostError>;
