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

//! Host-OS facility seams.
//!
//! The bridge consumes the host through three narrow traits so the core can
//! run against the real Android surface or a scripted mock. All three are
//! read-only from the bridge's perspective except for the intent launches,
//! which hand control to the host UI and return immediately.

pub mod android;
pub mod command;
pub mod constants;
pub mod mock;

use std::sync::Arc;

use crate::error::HostResult;

/// Platform version information, used for the capability threshold check.
pub trait PlatformBuild: Send + Sync {
    /// The host SDK level. Implementations report 0 when the level cannot
    /// be determined, which the bridge treats as pre-restriction.
    fn sdk_level(&self) -> u32;
}

/// The host power-management facility.
pub trait PowerFacility: Send + Sync {
    /// Whether `package` is on the battery-optimization exemption
    /// allow-list. Read fresh on every call; the bridge never caches it.
    fn is_ignoring_battery_optimizations(&self, package: &str) -> bool;
}

/// The host navigation/intent facility.
pub trait IntentLauncher: Send + Sync {
    /// Ask the host to display the settings screen for `action`, optionally
    /// scoped to `data` (a `package:<id>` URI). Returns as soon as the
    /// launch is accepted or rejected, never when the user is done.
    fn launch(&self, action: &str, data: Option<&str>) -> HostResult<()>;
}

/// The three host facilities bundled for the bridge.
#[derive(Clone)]
pub struct Host {
    pub build: Arc<dyn PlatformBuild>,
    pub power: Arc<dyn PowerFacility>,
    pub launcher: Arc<dyn IntentLauncher>,
}

impl Host {
    /// Host backed by the Android command-line surface.
    pub fn android() -> Self {
        Host {
            build: Arc::new(android::AndroidBuild),
            power: Arc::new(android::AndroidPowerFacility),
            launcher: Arc::new(android::AndroidIntentLauncher),
        }
    }
}

/// Probe for an Android host: the `getprop` surface only exists there.
pub fn is_android_host() -> bool {
    std::path::Path::new("/system/build.prop").exists()
        || command::execute_command_default("getprop", &[constants::SDK_LEVEL_PROPERTY])
            .map(|out| out.status == 0)
            .unwrap_or(false)
}
