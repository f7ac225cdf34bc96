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

use clap::{Args, Parser, Subcommand};

use crate::host::mock::MockHost;
use crate::host::{is_android_host, Host};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the bridge channels over HTTP for the UI layer.
    Serve(ServeArgs),
    /// Query whether the application is exempt from battery optimizations.
    Query(OneShotArgs),
    /// Request a battery-optimization exemption for the application.
    Request(OneShotArgs),
    /// Open the battery-optimization settings screen (application-details
    /// fallback when unavailable).
    OpenSettings(OneShotArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// The application identifier (package id) the bridge acts for.
    #[arg(short, long)]
    pub package: String,
    /// The port to listen on for the bridge channels.
    #[arg(long, default_value_t = 9802)]
    pub port: u16,
    #[command(flatten)]
    pub host: HostArgs,
}

#[derive(Parser)]
pub struct OneShotArgs {
    /// The application identifier (package id) the bridge acts for.
    #[arg(short, long)]
    pub package: String,
    #[command(flatten)]
    pub host: HostArgs,
}

#[derive(Args)]
pub struct HostArgs {
    /// Run against a scripted mock host instead of the Android surface.
    #[arg(long)]
    pub mock: bool,
    /// SDK level reported by the mock host.
    #[arg(long, default_value_t = 34, requires = "mock")]
    pub mock_sdk: u32,
    /// Whether the mock host reports the application as already exempt.
    #[arg(long, requires = "mock")]
    pub mock_exempt: bool,
}

impl HostArgs {
    /// Pick the host surface for this run: the Android command-line surface,
    /// or the scripted mock when requested.
    pub fn select_host(&self) -> Host {
        if self.mock {
            return MockHost::new(self.mock_sdk, self.mock_exempt).host();
        }
        if !is_android_host() {
            tracing::warn!(
                "no Android host surface detected; queries will report not-exempt and launches will fail (use --mock to run without one)"
            );
        }
        Host::android()
    }
}
