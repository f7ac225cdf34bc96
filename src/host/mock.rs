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

//! Scripted mock host.
//!
//! Backs the bridge tests and `serve --mock` runs on machines without an
//! Android surface. The mock records every launch attempt so scenarios can
//! assert both results and side effects.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{HostError, HostResult};
use crate::host::{Host, IntentLauncher, PlatformBuild, PowerFacility};

/// One recorded launch attempt, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub action: String,
    pub data: Option<String>,
}

/// Scripted host state shared by all three facility traits.
pub struct MockHost {
    sdk_level: AtomicU32,
    exempt: AtomicBool,
    failing_actions: Mutex<HashSet<String>>,
    launches: Mutex<Vec<LaunchRecord>>,
}

impl MockHost {
    pub fn new(sdk_level: u32, exempt: bool) -> Arc<Self> {
        Arc::new(MockHost {
            sdk_level: AtomicU32::new(sdk_level),
            exempt: AtomicBool::new(exempt),
            failing_actions: Mutex::new(HashSet::new()),
            launches: Mutex::new(Vec::new()),
        })
    }

    /// Script `action` to be rejected by the launcher.
    pub fn fail_action(&self, action: &str) {
        self.failing_actions
            .lock()
            .unwrap()
            .insert(action.to_string());
    }

    pub fn set_exempt(&self, exempt: bool) {
        self.exempt.store(exempt, Ordering::Relaxed);
    }

    /// All launch attempts so far, including rejected ones, in call order.
    pub fn launches(&self) -> Vec<LaunchRecord> {
        self.launches.lock().unwrap().clone()
    }

    /// Bundle this mock as a [`Host`].
    pub fn host(self: &Arc<Self>) -> Host {
        Host {
            build: self.clone(),
            power: self.clone(),
            launcher: self.clone(),
        }
    }
}

impl PlatformBuild for MockHost {
    fn sdk_level(&self) -> u32 {
        self.sdk_level.load(Ordering::Relaxed)
    }
}

impl PowerFacility for MockHost {
    fn is_ignoring_battery_optimizations(&self, _package: &str) -> bool {
        self.exempt.load(Ordering::Relaxed)
    }
}

impl IntentLauncher for MockHost {
    fn launch(&self, action: &str, data: Option<&str>) -> HostResult<()> {
        self.launches.lock().unwrap().push(LaunchRecord {
            action: action.to_string(),
            data: data.map(str::to_string),
        });

        if self.failing_actions.lock().unwrap().contains(action) {
            return Err(HostError::LaunchRejected {
                action: action.to_string(),
                detail: "no handler for action (scripted)".to_string(),
            });
        }
        Ok(())
    }
}
