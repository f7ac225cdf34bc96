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

//! Android implementations of the host-facility traits, backed by the
//! platform command-line tools: `getprop` for the SDK level, `dumpsys
//! deviceidle` for the exemption allow-list, and `am start` for intent
//! launches.

use tracing::{debug, warn};

use crate::error::{HostError, HostResult};
use crate::host::command::execute_command_default;
use crate::host::constants::SDK_LEVEL_PROPERTY;
use crate::host::{IntentLauncher, PlatformBuild, PowerFacility};

pub struct AndroidBuild;

impl PlatformBuild for AndroidBuild {
    fn sdk_level(&self) -> u32 {
        match execute_command_default("getprop", &[SDK_LEVEL_PROPERTY]) {
            Ok(out) if out.status == 0 => parse_sdk_level(&out.stdout),
            Ok(out) => {
                warn!("getprop exited with status {}", out.status);
                0
            }
            Err(e) => {
                warn!("getprop failed: {e}");
                0
            }
        }
    }
}

pub struct AndroidPowerFacility;

impl PowerFacility for AndroidPowerFacility {
    fn is_ignoring_battery_optimizations(&self, package: &str) -> bool {
        match execute_command_default("dumpsys", &["deviceidle", "whitelist"]) {
            Ok(out) if out.status == 0 => whitelist_contains(&out.stdout, package),
            Ok(out) => {
                warn!("dumpsys deviceidle exited with status {}", out.status);
                false
            }
            Err(e) => {
                warn!("dumpsys deviceidle failed: {e}");
                false
            }
        }
    }
}

pub struct AndroidIntentLauncher;

impl IntentLauncher for AndroidIntentLauncher {
    fn launch(&self, action: &str, data: Option<&str>) -> HostResult<()> {
        let mut args = vec!["start", "-a", action];
        if let Some(data) = data {
            args.push("-d");
            args.push(data);
        }

        let out = execute_command_default("am", &args)?;
        // `am start` exits 0 even when no activity handles the action and
        // reports the failure on its output instead.
        if out.status != 0 || launch_error(&out.stdout) || launch_error(&out.stderr) {
            return Err(HostError::LaunchRejected {
                action: action.to_string(),
                detail: launch_detail(&out.stdout, &out.stderr, out.status),
            });
        }

        debug!("launched intent action {action} (data: {data:?})");
        Ok(())
    }
}

/// Parse `getprop ro.build.version.sdk` output into an SDK level.
/// Unparseable output maps to 0 (treated as pre-restriction).
pub(crate) fn parse_sdk_level(stdout: &str) -> u32 {
    stdout.trim().parse::<u32>().unwrap_or_else(|_| {
        warn!("unparseable SDK level {:?}", stdout.trim());
        0
    })
}

/// Whether `package` appears in `dumpsys deviceidle whitelist` output.
/// Lines have the form `<source>,<package>,<uid>`.
pub(crate) fn whitelist_contains(stdout: &str, package: &str) -> bool {
    stdout.lines().any(|line| {
        let mut fields = line.trim().split(',');
        matches!(
            (fields.next(), fields.next()),
            (Some(_), Some(pkg)) if pkg == package
        )
    })
}

fn launch_error(stream: &str) -> bool {
    stream
        .lines()
        .any(|line| line.trim_start().starts_with("Error") || line.contains("Exception"))
}

fn launch_detail(stdout: &str, stderr: &str, status: i32) -> String {
    let detail = stdout
        .lines()
        .chain(stderr.lines())
        .find(|line| line.trim_start().starts_with("Error") || line.contains("Exception"))
        .unwrap_or_default()
        .trim();
    if detail.is_empty() {
        format!("am start exited with status {status}")
    } else {
        detail.to_string()
    }
}
