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

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use battery_bridge::api::run_serve_mode;
use battery_bridge::cli::{Cli, Commands, OneShotArgs};
use battery_bridge::ExemptionBridge;

fn one_shot_bridge(args: &OneShotArgs) -> ExemptionBridge {
    ExemptionBridge::new(args.package.clone(), args.host.select_host())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battery_bridge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Set up signal handler for clean shutdown
    tokio::spawn(async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        std::process::exit(0);
    });

    match cli.command {
        Commands::Serve(args) => {
            run_serve_mode(&args).await;
        }
        Commands::Query(args) => {
            let exempt = one_shot_bridge(&args).is_ignoring_battery_optimizations();
            println!("{exempt}");
        }
        Commands::Request(args) => {
            let requested = one_shot_bridge(&args).request_ignore_battery_optimizations();
            println!("{requested}");
        }
        Commands::OpenSettings(args) => {
            one_shot_bridge(&args).open_battery_optimization_settings();
            // The fallback channel always acks; mirror that on stdout.
            println!("true");
        }
    }
}
