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

//! Dirty-partition check.
//!
//! Tables or partitions that are always computed in full must be written
//! either into a fresh directory or by replacing every object in it. A data
//! file that survives from the last commit next to newly written files is
//! "dirty".

use super::error::HookResult;
use super::event::HookEvent;
use super::report::{Violation, OBJECT_IS_DIRTY};
use crate::client::{Client, ClientResult, ListingEntry, DEFAULT_DELIMITER};
use crate::util::path::Path;
use futures::{future, TryStreamExt};
use std::collections::HashSet;
use tracing::debug;

pub async fn check_dirty_partitions(
    client: &Client,
    event: &HookEvent,
    prefix: &str,
) -> HookResult<Vec<Violation>> {
    let directories = modified_directories(client, event, prefix).await?;
    if directories.is_empty() {
        return Ok(Vec::new());
    }

    let repository = event.repository_id.as_str();
    let last_commit = client.last_commit(repository, &event.source_ref).await?;
    debug!(
        "Comparing directories={} between commit={} and ref={}",
        directories.len(),
        last_commit,
        event.source_ref
    );

    let mut violations = Vec::new();
    for directory in &directories {
        let previous: HashSet<String> = data_files(client, repository, &last_commit, directory)
            .await?
            .into_iter()
            .map(|entry| entry.path)
            .collect();
        let current = data_files(client, repository, &event.source_ref, directory).await?;

        let dirty: Vec<ListingEntry> = current
            .iter()
            .filter(|entry| previous.contains(&entry.path))
            .cloned()
            .collect();
        if dirty.len() == current.len() {
            // nothing new was written here
            continue;
        }
        violations.extend(
            dirty
                .into_iter()
                .map(|entry| Violation::new(entry.path, OBJECT_IS_DIRTY)),
        );
    }
    Ok(violations)
}

/// Parent directories of the added or changed paths of the branch, with a
/// trailing separator, in first-seen order and without duplicates.
async fn modified_directories(
    client: &Client,
    event: &HookEvent,
    prefix: &str,
) -> ClientResult<Vec<String>> {
    let mut changes = client.diff_branch(&event.repository_id, &event.branch_id, prefix, None);
    let mut seen = HashSet::new();
    let mut directories = Vec::new();
    while let Some(change) = changes.try_next().await? {
        if !change.is_added_or_changed() {
            continue;
        }
        let directory = Path::new(change.path).directory_prefix();
        if seen.insert(directory.clone()) {
            directories.push(directory);
        }
    }
    Ok(directories)
}

/// Non-empty objects directly inside `directory`.
async fn data_files(
    client: &Client,
    repository: &str,
    reference: &str,
    directory: &str,
) -> ClientResult<Vec<ListingEntry>> {
    client
        .list(repository, reference, directory, DEFAULT_DELIMITER, None)
        .try_filter(|entry| future::ready(entry.is_object() && entry.size_bytes > 0))
        .try_collect()
        .await
}
