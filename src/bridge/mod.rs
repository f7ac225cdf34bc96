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

//! The power-exemption bridge.
//!
//! Translates the named operations of the two channels into host-facility
//! calls. Every call is independent and stateless: exemption state is read
//! fresh from the host each time, and no host failure ever reaches the
//! caller as an error.

pub mod channel;

use tracing::{debug, warn};

use crate::host::constants::{
    package_uri, ACTION_APPLICATION_DETAILS_SETTINGS, ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS,
    ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS, BATTERY_RESTRICTIONS_MIN_SDK,
};
use crate::host::Host;
use channel::{
    Channel, MethodReply, METHOD_IS_IGNORING, METHOD_OPEN_SETTINGS, METHOD_REQUEST_IGNORE,
};

pub struct ExemptionBridge {
    package: String,
    host: Host,
}

impl ExemptionBridge {
    pub fn new(package: impl Into<String>, host: Host) -> Self {
        ExemptionBridge {
            package: package.into(),
            host,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Whether this host has battery restrictions at all. Hosts below the
    /// threshold have nothing to be exempt from.
    fn restrictions_apply(&self) -> bool {
        self.host.build.sdk_level() >= BATTERY_RESTRICTIONS_MIN_SDK
    }

    /// Whether the application is currently exempt from battery
    /// optimizations. Always true on pre-restriction hosts.
    pub fn is_ignoring_battery_optimizations(&self) -> bool {
        if !self.restrictions_apply() {
            return true;
        }
        self.host
            .power
            .is_ignoring_battery_optimizations(&self.package)
    }

    /// Ask the host to put this application on the exemption allow-list.
    ///
    /// Returns true as soon as the request flow is launched, not when the
    /// user decides; callers depend on these fire-and-launch semantics.
    /// Idempotent when already exempt: no launch is issued.
    pub fn request_ignore_battery_optimizations(&self) -> bool {
        if !self.restrictions_apply() {
            return true;
        }
        if self
            .host
            .power
            .is_ignoring_battery_optimizations(&self.package)
        {
            debug!("{} already exempt, skipping request", self.package);
            return true;
        }

        match self.host.launcher.launch(
            ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS,
            Some(&package_uri(&self.package)),
        ) {
            Ok(()) => true,
            Err(e) => {
                warn!("exemption request launch failed: {e}");
                false
            }
        }
    }

    /// Best-effort navigation to the battery-optimization settings, falling
    /// back to this application's details screen. Failures are logged and
    /// absorbed; the caller always gets a success acknowledgment.
    pub fn open_battery_optimization_settings(&self) {
        if let Err(e) = self
            .host
            .launcher
            .launch(ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS, None)
        {
            warn!("battery settings launch failed: {e}, trying app details");
            if let Err(e) = self.host.launcher.launch(
                ACTION_APPLICATION_DETAILS_SETTINGS,
                Some(&package_uri(&self.package)),
            ) {
                warn!("app details launch failed: {e}");
            }
        }
    }

    /// Dispatch one method call on a channel. Unknown methods yield
    /// [`MethodReply::NotImplemented`]; every known method yields a bool.
    pub fn handle(&self, channel: Channel, method: &str) -> MethodReply {
        match channel {
            Channel::BatteryOptimization => match method {
                METHOD_IS_IGNORING => {
                    MethodReply::Bool(self.is_ignoring_battery_optimizations())
                }
                METHOD_REQUEST_IGNORE => {
                    MethodReply::Bool(self.request_ignore_battery_optimizations())
                }
                _ => MethodReply::NotImplemented,
            },
            Channel::BatteryOptimizationFallback => match method {
                METHOD_OPEN_SETTINGS => {
                    self.open_battery_optimization_settings();
                    MethodReply::Bool(true)
                }
                _ => MethodReply::NotImplemented,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;
    use std::sync::Arc;

    const PKG: &str = "com.vibra.audio";

    fn bridge(mock: &Arc<MockHost>) -> ExemptionBridge {
        ExemptionBridge::new(PKG, mock.host())
    }

    #[test]
    fn test_query_pre_restriction_host_always_exempt() {
        let mock = MockHost::new(21, false);
        assert!(bridge(&mock).is_ignoring_battery_optimizations());
    }

    #[test]
    fn test_query_reads_host_state_fresh() {
        let mock = MockHost::new(34, false);
        let bridge = bridge(&mock);
        assert!(!bridge.is_ignoring_battery_optimizations());
        mock.set_exempt(true);
        assert!(bridge.is_ignoring_battery_optimizations());
    }

    #[test]
    fn test_request_pre_restriction_host_no_launch() {
        let mock = MockHost::new(22, false);
        let bridge = bridge(&mock);
        assert!(bridge.is_ignoring_battery_optimizations());
        assert!(bridge.request_ignore_battery_optimizations());
        assert!(mock.launches().is_empty());
    }

    #[test]
    fn test_request_already_exempt_is_idempotent() {
        let mock = MockHost::new(34, true);
        let bridge = bridge(&mock);
        for _ in 0..3 {
            assert!(bridge.request_ignore_battery_optimizations());
        }
        assert!(mock.launches().is_empty());
    }

    #[test]
    fn test_request_not_exempt_launches_scoped_flow() {
        let mock = MockHost::new(34, false);
        assert!(bridge(&mock).request_ignore_battery_optimizations());

        let launches = mock.launches();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].action, ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS);
        assert_eq!(launches[0].data.as_deref(), Some("package:com.vibra.audio"));
    }

    #[test]
    fn test_request_launch_rejected_returns_false() {
        let mock = MockHost::new(34, false);
        mock.fail_action(ACTION_REQUEST_IGNORE_BATTERY_OPTIMIZATIONS);
        assert!(!bridge(&mock).request_ignore_battery_optimizations());
        assert_eq!(mock.launches().len(), 1);
    }

    #[test]
    fn test_open_settings_primary_succeeds() {
        let mock = MockHost::new(34, false);
        bridge(&mock).open_battery_optimization_settings();

        let launches = mock.launches();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].action, ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS);
        assert_eq!(launches[0].data, None);
    }

    #[test]
    fn test_open_settings_falls_back_to_app_details() {
        let mock = MockHost::new(34, false);
        mock.fail_action(ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS);
        bridge(&mock).open_battery_optimization_settings();

        let launches = mock.launches();
        assert_eq!(launches.len(), 2);
        assert_eq!(launches[0].action, ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS);
        assert_eq!(launches[1].action, ACTION_APPLICATION_DETAILS_SETTINGS);
        assert_eq!(launches[1].data.as_deref(), Some("package:com.vibra.audio"));
    }

    #[test]
    fn test_open_settings_absorbs_double_failure() {
        let mock = MockHost::new(34, false);
        mock.fail_action(ACTION_IGNORE_BATTERY_OPTIMIZATION_SETTINGS);
        mock.fail_action(ACTION_APPLICATION_DETAILS_SETTINGS);
        // Must not panic or error; the fallback channel still acks success.
        let bridge = bridge(&mock);
        bridge.open_battery_optimization_settings();
        assert_eq!(
            bridge.handle(Channel::BatteryOptimizationFallback, METHOD_OPEN_SETTINGS),
            MethodReply::Bool(true)
        );
    }

    #[test]
    fn test_dispatch_known_methods() {
        let mock = MockHost::new(34, true);
        let bridge = bridge(&mock);

        assert_eq!(
            bridge.handle(Channel::BatteryOptimization, METHOD_IS_IGNORING),
            MethodReply::Bool(true)
        );
        assert_eq!(
            bridge.handle(Channel::BatteryOptimization, METHOD_REQUEST_IGNORE),
            MethodReply::Bool(true)
        );
        assert_eq!(
            bridge.handle(Channel::BatteryOptimizationFallback, METHOD_OPEN_SETTINGS),
            MethodReply::Bool(true)
        );
    }

    #[test]
    fn test_dispatch_unknown_method_on_both_channels() {
        let mock = MockHost::new(34, true);
        let bridge = bridge(&mock);

        for channel in [Channel::BatteryOptimization, Channel::BatteryOptimizationFallback] {
            assert_eq!(bridge.handle(channel, "resetExemption"), MethodReply::NotImplemented);
            assert_eq!(bridge.handle(channel, ""), MethodReply::NotImplemented);
        }
        // Methods are channel-scoped: the fallback method is unknown on the
        // primary channel and vice versa.
        assert_eq!(
            bridge.handle(Channel::BatteryOptimization, METHOD_OPEN_SETTINGS),
            MethodReply::NotImplemented
        );
        assert_eq!(
            bridge.handle(Channel::BatteryOptimizationFallback, METHOD_IS_IGNORING),
            MethodReply::NotImplemented
        );
    }
}
