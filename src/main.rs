// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use clap::Parser;
use lake_hooks::hooks::{router, AppState};
use lake_hooks::{Client, LakeFsConfig};
use std::error::Error;
use tracing::info;

/// lakeFS validation webhook server
#[derive(Parser, Debug)]
#[command(name = "lake-hooks", version, about)]
struct Args {
    /// Address to serve the webhooks on
    #[arg(long, env = "LAKE_HOOKS_LISTEN", default_value = "0.0.0.0:5000")]
    listen: String,

    /// Base URL of the lakeFS server
    #[arg(long, env = "LAKEFS_SERVER_ADDRESS")]
    lakefs_endpoint: String,

    #[arg(long, env = "LAKEFS_ACCESS_KEY_ID")]
    access_key_id: String,

    #[arg(long, env = "LAKEFS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_access_key: String,

    /// Results requested per page from lakeFS
    #[arg(long, env = "LAKE_HOOKS_PAGE_SIZE")]
    page_size: Option<usize>,

    /// Request timeout in seconds; unset leaves the transport default
    #[arg(long, env = "LAKE_HOOKS_TIMEOUT")]
    timeout: Option<String>,
}

impl Args {
    fn lakefs_config(&self) -> LakeFsConfig {
        let mut config = LakeFsConfig::new(
            &self.lakefs_endpoint,
            &self.access_key_id,
            &self.secret_access_key,
        );
        if let Some(page_size) = self.page_size {
            config = config.with_option("page_size", page_size.to_string());
        }
        if let Some(timeout) = &self.timeout {
            config = config.with_option("timeout", timeout);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.lakefs_config();
    info!("Using lakeFS config={:?}", config);

    let client = Client::new(&config)?;
    let app = router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!("Serving webhooks on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
