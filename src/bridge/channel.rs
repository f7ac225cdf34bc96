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

//! Channel and method naming for the bridge.
//!
//! The operation names are the wire contract with the UI layer and must not
//! change: `isIgnoringBatteryOptimizations` and
//! `requestIgnoreBatteryOptimizations` on the primary channel,
//! `openBatteryOptimizationSettings` on the fallback channel.

/// Primary channel: exemption state query and request.
pub const BATTERY_OPTIMIZATION_CHANNEL: &str = "battery-optimization";

/// Fallback channel: settings-screen navigation.
pub const BATTERY_OPTIMIZATION_FALLBACK_CHANNEL: &str = "battery-optimization-fallback";

pub const METHOD_IS_IGNORING: &str = "isIgnoringBatteryOptimizations";
pub const METHOD_REQUEST_IGNORE: &str = "requestIgnoreBatteryOptimizations";
pub const METHOD_OPEN_SETTINGS: &str = "openBatteryOptimizationSettings";

/// The two logical sub-channels of the bridge. The split mirrors the wire
/// contract; the behavior behind both lives on one bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    BatteryOptimization,
    BatteryOptimizationFallback,
}

impl Channel {
    pub fn from_id(id: &str) -> Option<Channel> {
        match id {
            BATTERY_OPTIMIZATION_CHANNEL => Some(Channel::BatteryOptimization),
            BATTERY_OPTIMIZATION_FALLBACK_CHANNEL => Some(Channel::BatteryOptimizationFallback),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Channel::BatteryOptimization => BATTERY_OPTIMIZATION_CHANNEL,
            Channel::BatteryOptimizationFallback => BATTERY_OPTIMIZATION_FALLBACK_CHANNEL,
        }
    }
}

/// Reply to one method call. `NotImplemented` is distinct from
/// `Bool(false)` so callers can tell "unsupported method" apart from an
/// operation that returned false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodReply {
    Bool(bool),
    NotImplemented,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_ids_round_trip() {
        for channel in [Channel::BatteryOptimization, Channel::BatteryOptimizationFallback] {
            assert_eq!(Channel::from_id(channel.id()), Some(channel));
        }
        assert_eq!(Channel::from_id("battery"), None);
        assert_eq!(Channel::from_id(""), None);
    }
}
