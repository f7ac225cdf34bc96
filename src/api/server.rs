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

use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{channel_handler, SharedBridge};
use crate::bridge::ExemptionBridge;
use crate::cli::ServeArgs;

/// Run the bridge server, exposing both channels over HTTP.
pub async fn run_serve_mode(args: &ServeArgs) {
    let host = args.host.select_host();
    let bridge: SharedBridge = Arc::new(ExemptionBridge::new(args.package.clone(), host));

    let app = Router::new()
        .route("/channel/{channel}", post(channel_handler))
        .with_state(bridge)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let listener = match TcpListener::bind(format!("0.0.0.0:{}", args.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind TCP listener on port {}: {e}", args.port);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "bridge serving package {} on http://0.0.0.0:{}",
        args.package,
        args.port
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
