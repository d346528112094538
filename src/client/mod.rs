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

//! lakeFS API client
//!
//! [`LakeFsApi`] is the page-level seam: one method per remote call.
//! [`Client`] builds lazy, cursor-following streams on top of it and is what
//! the filesystem adapter and the webhooks consume.

pub mod api;
#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
mod pager;

#[cfg(test)]
pub(crate) mod mock;

// Public exports
pub use api::LakeFsApi;
pub use client::{ChangeStream, Client, ListingStream, DEFAULT_DELIMITER};
pub use config::{LakeFsConfig, DEFAULT_PAGE_SIZE};
pub use error::{ClientError, ClientResult};
pub use http::HttpApi;
pub use models::{Change, ChangeType, Commit, ListingEntry, ObjectStats, Page, Pagination, PathType};
