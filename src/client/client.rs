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

use super::api::LakeFsApi;
use super::config::{LakeFsConfig, DEFAULT_PAGE_SIZE};
use super::error::{ClientError, ClientResult};
use super::http::HttpApi;
use super::models::{Change, ListingEntry, ObjectStats};
use super::pager::paginate;
use crate::storage::LakeFsFileSystem;
use bytes::Bytes;
use futures::future;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::debug;

/// Lazy stream of diff entries.
pub type ChangeStream = BoxStream<'static, ClientResult<Change>>;

/// Lazy stream of listing entries.
pub type ListingStream = BoxStream<'static, ClientResult<ListingEntry>>;

/// Default delimiter of object listings; lists a single "directory" level.
pub const DEFAULT_DELIMITER: &str = "/";

/// lakeFS client exposing cursor-following streams over diffs and listings.
///
/// Cloning is cheap; clones share the underlying API handle.
///
/// # Examples
///
/// ```no_run
/// use futures::TryStreamExt;
/// use lake_hooks::client::{ChangeType, Client, LakeFsConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let config = LakeFsConfig::new("http://localhost:8000", "ACCESS_KEY", "SECRET_KEY");
/// let client = Client::new(&config)?;
///
/// let mut changes = client.diff("my-repo", "experiment", "main", "collections/production/");
/// while let Some(change) = changes.try_next().await? {
///     if change.change_type == ChangeType::Added {
///         println!("added {}", change.path);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    api: Arc<dyn LakeFsApi>,
    page_size: usize,
}

impl Client {
    /// Create a client talking to the lakeFS server described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is invalid or the HTTP client cannot be built.
    pub fn new(config: &LakeFsConfig) -> ClientResult<Self> {
        let api = HttpApi::new(config)?;
        debug!("Created lakeFS client api={:?}", api);
        Ok(Self::with_api(Arc::new(api)).with_page_size(config.page_size()))
    }

    /// Create a client over any [`LakeFsApi`] implementation.
    pub fn with_api(api: Arc<dyn LakeFsApi>) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override how many entries are requested per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Stream the differences between `from_ref` and `to_ref` under `prefix`.
    ///
    /// Iteration starts at `prefix` and stops at the first path outside of it,
    /// relying on the server returning paths in lexicographic order.
    pub fn diff(&self, repository: &str, from_ref: &str, to_ref: &str, prefix: &str) -> ChangeStream {
        let api = Arc::clone(&self.api);
        let repository = repository.to_string();
        let from_ref = from_ref.to_string();
        let to_ref = to_ref.to_string();

        let changes = paginate(prefix.to_string(), self.page_size, None, move |after, amount| {
            let api = Arc::clone(&api);
            let repository = repository.clone();
            let from_ref = from_ref.clone();
            let to_ref = to_ref.clone();
            async move {
                api.diff_refs(&repository, &from_ref, &to_ref, &after, amount)
                    .await
            }
        });
        within_prefix(changes, prefix)
    }

    /// Stream the uncommitted changes of `branch` under `prefix`.
    ///
    /// With `max_amount` at most that many changes are yielded and pages are
    /// never larger than it.
    pub fn diff_branch(
        &self,
        repository: &str,
        branch: &str,
        prefix: &str,
        max_amount: Option<usize>,
    ) -> ChangeStream {
        let api = Arc::clone(&self.api);
        let repository = repository.to_string();
        let branch = branch.to_string();

        let changes = paginate(
            prefix.to_string(),
            self.page_size,
            max_amount,
            move |after, amount| {
                let api = Arc::clone(&api);
                let repository = repository.clone();
                let branch = branch.clone();
                async move { api.diff_branch(&repository, &branch, &after, amount).await }
            },
        );
        within_prefix(changes, prefix)
    }

    /// Stream the objects under `prefix` at `reference`.
    ///
    /// An empty `delimiter` lists recursively; [`DEFAULT_DELIMITER`] lists one
    /// level and reports sub-directories as common prefixes. A `max_amount` of
    /// zero yields nothing without contacting the server.
    pub fn list(
        &self,
        repository: &str,
        reference: &str,
        prefix: &str,
        delimiter: &str,
        max_amount: Option<usize>,
    ) -> ListingStream {
        let api = Arc::clone(&self.api);
        let repository = repository.to_string();
        let reference = reference.to_string();
        let prefix = prefix.to_string();
        let delimiter = delimiter.to_string();

        paginate(String::new(), self.page_size, max_amount, move |after, amount| {
            let api = Arc::clone(&api);
            let repository = repository.clone();
            let reference = reference.clone();
            let prefix = prefix.clone();
            let delimiter = delimiter.clone();
            async move {
                api.list_objects(&repository, &reference, &prefix, &after, &delimiter, amount)
                    .await
            }
        })
    }

    /// Read an entire object into memory.
    pub async fn get_object(&self, repository: &str, reference: &str, path: &str) -> ClientResult<Bytes> {
        self.api.get_object(repository, reference, path).await
    }

    /// Read object metadata; a missing object yields `ClientError::NotFound`.
    pub async fn stat_object(
        &self,
        repository: &str,
        reference: &str,
        path: &str,
    ) -> ClientResult<ObjectStats> {
        self.api.stat_object(repository, reference, path).await
    }

    /// ID of the newest commit reachable from `reference`.
    ///
    /// For a branch this is its head commit, i.e. the state before any
    /// uncommitted changes.
    pub async fn last_commit(&self, repository: &str, reference: &str) -> ClientResult<String> {
        let page = self.api.log_commits(repository, reference, "", 1).await?;
        page.results
            .into_iter()
            .next()
            .map(|commit| commit.id)
            .ok_or_else(|| ClientError::NotFound(format!("commits of {}/{}", repository, reference)))
    }

    /// A read-only filesystem over `reference`.
    pub fn filesystem(&self, repository: &str, reference: &str) -> LakeFsFileSystem {
        LakeFsFileSystem::new(self.clone(), repository, reference)
    }
}

/// Stop a change stream at the first path that does not start with `prefix`.
fn within_prefix(changes: ChangeStream, prefix: &str) -> ChangeStream {
    let prefix = prefix.to_string();
    changes
        .try_take_while(move |change| future::ready(Ok(change.path.starts_with(&prefix))))
        .boxed()
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Client(page_size={})", self.page_size)
    }
}
