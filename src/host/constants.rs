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

// Common constants for the host-facility layer.

/// First SDK level with Doze/app-standby battery restrictions (Android M).
/// Below this level there is nothing to be exempt from.
pub const BATTERY_RESTRICTIONS_MIN_SDK: u32 = 23;

/// Per-application flow asking the user to exempt one package.
pub const ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS: &str =
    "android.settings.REQUEST_IGNORE_BATTERY_OPTIMIZATIONS";

/// General battery-optimization settings screen, not scoped to a package.
pub const ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS: &str =
    "android.settings.IGNORE_BATTERY_OPTIMIZATION_SETTINGS";

/// Generic application-details screen, scoped to one package.
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

/// URI scheme for addressing a package in intent data.
pub const PACKAGE_URI_SCHEME: &str = "package:";

/// Builds the `package:<id>` intent data URI for a package.
pub fn package_uri(package: &str) -> String {
    format!("{PACKAGE_URI_SCHEME}{package}")
}

/// System property holding the platform SDK level.
pub const SDK_LEVEL_PROPERTY: &str = "ro.build.version.sdk";
