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

use super::error::ClientResult;
use super::models::{Change, Commit, ObjectStats, Page};
use async_trait::async_trait;
use bytes::Bytes;

/// Page-level operations of the lakeFS API.
///
/// Each call maps to exactly one remote request. Cursor handling (following
/// `next_offset` while `has_more`) lives in [`super::Client`], so
/// implementations only need to translate one request into one response.
#[async_trait]
pub trait LakeFsApi: Send + Sync {
    /// Fetch one page of differences between two refs, starting after `after`.
    async fn diff_refs(
        &self,
        repository: &str,
        left_ref: &str,
        right_ref: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Change>>;

    /// Fetch one page of uncommitted changes on a branch, starting after `after`.
    async fn diff_branch(
        &self,
        repository: &str,
        branch: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Change>>;

    /// Fetch one page of objects under `prefix`.
    ///
    /// An empty `delimiter` lists recursively; otherwise entries below the next
    /// delimiter are grouped into common prefixes.
    async fn list_objects(
        &self,
        repository: &str,
        reference: &str,
        prefix: &str,
        after: &str,
        delimiter: &str,
        amount: usize,
    ) -> ClientResult<Page<ObjectStats>>;

    /// Read the whole content of an object.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` when the object does not exist.
    async fn get_object(&self, repository: &str, reference: &str, path: &str)
        -> ClientResult<Bytes>;

    /// Read object metadata.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` when the object does not exist.
    async fn stat_object(
        &self,
        repository: &str,
        reference: &str,
        path: &str,
    ) -> ClientResult<ObjectStats>;

    /// Fetch one page of the commit log reachable from `reference`, newest first.
    async fn log_commits(
        &self,
        repository: &str,
        reference: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Commit>>;
}
