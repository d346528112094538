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

//! # Lake Hooks
//!
//! A lakeFS client, a read-only filesystem over lakeFS refs and a set of
//! validation webhooks for lakeFS pre-merge and pre-commit hooks.
//!
//! ## Features
//!
//! - **Paginated client**: diffs between refs, uncommitted branch changes and
//!   object listings as lazy streams that follow the server cursor page by page
//! - **Read-only filesystem**: `stat`, `list` and seekable in-memory reads by
//!   path; mutations are reported as unsupported
//! - **Webhooks**: format allow-lists, column-name deny-lists, dirty-partition
//!   detection and required commit metadata
//!
//! ## Quick Start
//!
//! ### Streaming a diff
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use lake_hooks::{Client, LakeFsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = LakeFsConfig::new("http://localhost:8000", "ACCESS_KEY", "SECRET_KEY")
//!     .with_option("page_size", "500");
//! let client = Client::new(&config)?;
//!
//! let mut changes = client.diff("my-repo", "feature", "main", "tables/events/");
//! while let Some(change) = changes.try_next().await? {
//!     println!("{:?} {}", change.change_type, change.path);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Serving the webhooks
//!
//! ```rust,no_run
//! use lake_hooks::hooks::{router, AppState};
//! use lake_hooks::{Client, LakeFsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let client = Client::new(&LakeFsConfig::from_env()?)?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router(AppState::new(client))).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Point a lakeFS hook at `http://<host:port>/webhooks/format?allow=parquet&prefix=tables/`.
//! See [`hooks::router`] for every route.

pub mod client;
pub mod hooks;
pub mod storage;
pub mod util;

// Re-export commonly used types
pub use client::{Client, ClientError, ClientResult, LakeFsConfig};
pub use hooks::{HookEvent, HookReport, Violation};
pub use storage::{FileSystem, LakeFsFileSystem};
pub use util::path::Path;
