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

//! HTTP handlers for the bridge channels.
//!
//! One route serves both channels: `POST /channel/{channel}` with a
//! `{"method": ...}` envelope. Known methods answer 200 with a boolean
//! result; unknown methods answer 501 with a not-implemented envelope so
//! callers can tell "unsupported" apart from a false result.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::bridge::channel::{Channel, MethodReply};
use crate::bridge::ExemptionBridge;

pub type SharedBridge = Arc<ExemptionBridge>;

/// One incoming method call. Arguments are accepted and ignored; none of
/// the bridge methods take any.
#[derive(Debug, Deserialize)]
pub struct MethodCall {
    pub method: String,
}

#[derive(Debug, Serialize)]
pub struct MethodResult {
    pub result: bool,
}

#[derive(Debug, Serialize)]
pub struct MethodError {
    pub error: &'static str,
    pub method: String,
}

pub async fn channel_handler(
    State(bridge): State<SharedBridge>,
    Path(channel): Path<String>,
    Json(call): Json<MethodCall>,
) -> Response {
    let Some(channel) = Channel::from_id(&channel) else {
        return (
            StatusCode::NOT_FOUND,
            Json(MethodError {
                error: "unknownChannel",
                method: call.method,
            }),
        )
            .into_response();
    };

    match bridge.handle(channel, &call.method) {
        MethodReply::Bool(result) => Json(MethodResult { result }).into_response(),
        MethodReply::NotImplemented => (
            StatusCode::NOT_IMPLEMENTED,
            Json(MethodError {
                error: "notImplemented",
                method: call.method,
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::channel::{
        BATTERY_OPTIMIZATION_CHANNEL, BATTERY_OPTIMIZATION_FALLBACK_CHANNEL, METHOD_IS_IGNORING,
        METHOD_OPEN_SETTINGS,
    };
    use crate::host::mock::MockHost;

    fn shared_bridge(sdk: u32, exempt: bool) -> SharedBridge {
        let mock = MockHost::new(sdk, exempt);
        Arc::new(ExemptionBridge::new("com.vibra.audio", mock.host()))
    }

    async fn call(bridge: SharedBridge, channel: &str, method: &str) -> Response {
        channel_handler(
            State(bridge),
            Path(channel.to_string()),
            Json(MethodCall {
                method: method.to_string(),
            }),
        )
        .await
    }

    #[tokio::test]
    async fn test_known_method_answers_ok() {
        let resp = call(
            shared_bridge(34, true),
            BATTERY_OPTIMIZATION_CHANNEL,
            METHOD_IS_IGNORING,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fallback_channel_always_acks() {
        let resp = call(
            shared_bridge(34, false),
            BATTERY_OPTIMIZATION_FALLBACK_CHANNEL,
            METHOD_OPEN_SETTINGS,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_method_answers_501() {
        for channel in [
            BATTERY_OPTIMIZATION_CHANNEL,
            BATTERY_OPTIMIZATION_FALLBACK_CHANNEL,
        ] {
            let resp = call(shared_bridge(34, true), channel, "resetExemption").await;
            assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        }
    }

    #[tokio::test]
    async fn test_unknown_channel_answers_404() {
        let resp = call(shared_bridge(34, true), "battery", METHOD_IS_IGNORING).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_reply_envelopes_serialize() {
        let ok = serde_json::to_value(MethodResult { result: true }).unwrap();
        assert_eq!(ok, serde_json::json!({"result": true}));

        let err = serde_json::to_value(MethodError {
            error: "notImplemented",
            method: "resetExemption".to_string(),
        })
        .unwrap();
        assert_eq!(
            err,
            serde_json::json!({"error": "notImplemented", "method": "resetExemption"})
        );
    }
}
