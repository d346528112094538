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

//! In-memory [`LakeFsApi`] used by unit tests across the crate.

use super::api::LakeFsApi;
use super::error::{ClientError, ClientResult};
use super::models::{Change, Commit, ObjectStats, Page, Pagination};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Clone)]
struct MockObject {
    data: Bytes,
    mtime: i64,
}

/// Serves refs, diffs and commit logs from memory and records every request.
///
/// Keys are ordered so pages come back sorted by path, like the real server.
/// The repository argument is ignored.
#[derive(Default)]
pub(crate) struct MockApi {
    objects: Mutex<HashMap<String, BTreeMap<String, MockObject>>>,
    ref_diffs: Mutex<HashMap<(String, String), Vec<Change>>>,
    branch_diffs: Mutex<HashMap<String, Vec<Change>>>,
    commits: Mutex<HashMap<String, Vec<String>>>,
    failure: Mutex<Option<u16>>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_object(self, reference: &str, path: &str, data: &[u8], mtime: i64) -> Self {
        self.objects
            .lock()
            .unwrap()
            .entry(reference.to_string())
            .or_default()
            .insert(
                path.to_string(),
                MockObject {
                    data: Bytes::copy_from_slice(data),
                    mtime,
                },
            );
        self
    }

    /// Add an object of `size` zero bytes.
    pub(crate) fn with_sized_object(self, reference: &str, path: &str, size: usize) -> Self {
        self.with_object(reference, path, &vec![0u8; size], 1_700_000_000)
    }

    pub(crate) fn with_ref_diff(self, left: &str, right: &str, mut changes: Vec<Change>) -> Self {
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        self.ref_diffs
            .lock()
            .unwrap()
            .insert((left.to_string(), right.to_string()), changes);
        self
    }

    pub(crate) fn with_branch_diff(self, branch: &str, mut changes: Vec<Change>) -> Self {
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        self.branch_diffs
            .lock()
            .unwrap()
            .insert(branch.to_string(), changes);
        self
    }

    /// Record `id` as the newest commit reachable from `reference`.
    pub(crate) fn with_commit(self, reference: &str, id: &str) -> Self {
        self.commits
            .lock()
            .unwrap()
            .entry(reference.to_string())
            .or_default()
            .insert(0, id.to_string());
        self
    }

    /// Make every request fail with the given HTTP status.
    pub(crate) fn failing(self, status: u16) -> Self {
        *self.failure.lock().unwrap() = Some(status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match *self.failure.lock().unwrap() {
            Some(404) => Err(ClientError::NotFound("mock".to_string())),
            Some(status) => Err(ClientError::ApiError {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn ref_objects(&self, reference: &str) -> BTreeMap<String, MockObject> {
        self.objects
            .lock()
            .unwrap()
            .get(reference)
            .cloned()
            .unwrap_or_default()
    }
}

/// Cut one page out of `(key, item)` pairs sorted by key.
fn page_of<T>(items: Vec<(String, T)>, after: &str, amount: usize) -> Page<T> {
    let mut rest: Vec<(String, T)> = items
        .into_iter()
        .filter(|(key, _)| key.as_str() > after)
        .collect();
    let has_more = rest.len() > amount;
    rest.truncate(amount);
    let pagination = match (has_more, rest.last()) {
        (true, Some((key, _))) => Pagination::more(key.clone(), rest.len()),
        _ => Pagination::last(rest.len()),
    };
    Page {
        pagination,
        results: rest.into_iter().map(|(_, item)| item).collect(),
    }
}

fn keyed(changes: Vec<Change>) -> Vec<(String, Change)> {
    changes.into_iter().map(|c| (c.path.clone(), c)).collect()
}

#[async_trait]
impl LakeFsApi for MockApi {
    async fn diff_refs(
        &self,
        _repository: &str,
        left_ref: &str,
        right_ref: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Change>> {
        self.record(format!("diff_refs {}..{} after={} amount={}", left_ref, right_ref, after, amount))?;
        let changes = self
            .ref_diffs
            .lock()
            .unwrap()
            .get(&(left_ref.to_string(), right_ref.to_string()))
            .cloned()
            .unwrap_or_default();
        Ok(page_of(keyed(changes), after, amount))
    }

    async fn diff_branch(
        &self,
        _repository: &str,
        branch: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Change>> {
        self.record(format!("diff_branch {} after={} amount={}", branch, after, amount))?;
        let changes = self
            .branch_diffs
            .lock()
            .unwrap()
            .get(branch)
            .cloned()
            .unwrap_or_default();
        Ok(page_of(keyed(changes), after, amount))
    }

    async fn list_objects(
        &self,
        _repository: &str,
        reference: &str,
        prefix: &str,
        after: &str,
        delimiter: &str,
        amount: usize,
    ) -> ClientResult<Page<ObjectStats>> {
        self.record(format!(
            "list_objects {} prefix={} after={} delimiter={} amount={}",
            reference, prefix, after, delimiter, amount
        ))?;
        let mut entries: BTreeMap<String, ObjectStats> = BTreeMap::new();
        for (path, object) in self.ref_objects(reference) {
            let Some(rest) = path.strip_prefix(prefix) else {
                continue;
            };
            match rest.find(delimiter).filter(|_| !delimiter.is_empty()) {
                Some(idx) => {
                    let common = format!("{}{}", prefix, &rest[..idx + delimiter.len()]);
                    entries.insert(common.clone(), ObjectStats::common_prefix(common));
                }
                None => {
                    let stats = ObjectStats::object(path.clone(), object.data.len() as u64, object.mtime);
                    entries.insert(path, stats);
                }
            }
        }
        Ok(page_of(entries.into_iter().collect(), after, amount))
    }

    async fn get_object(
        &self,
        _repository: &str,
        reference: &str,
        path: &str,
    ) -> ClientResult<Bytes> {
        self.record(format!("get_object {} {}", reference, path))?;
        self.ref_objects(reference)
            .get(path)
            .map(|object| object.data.clone())
            .ok_or_else(|| ClientError::NotFound(path.to_string()))
    }

    async fn stat_object(
        &self,
        _repository: &str,
        reference: &str,
        path: &str,
    ) -> ClientResult<ObjectStats> {
        self.record(format!("stat_object {} {}", reference, path))?;
        self.ref_objects(reference)
            .get(path)
            .map(|object| ObjectStats::object(path, object.data.len() as u64, object.mtime))
            .ok_or_else(|| ClientError::NotFound(path.to_string()))
    }

    async fn log_commits(
        &self,
        _repository: &str,
        reference: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Commit>> {
        self.record(format!("log_commits {} after={} amount={}", reference, after, amount))?;
        let ids = self
            .commits
            .lock()
            .unwrap()
            .get(reference)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(reference.to_string()))?;
        let mut results: Vec<Commit> = ids.into_iter().map(Commit::new).collect();
        let has_more = results.len() > amount;
        results.truncate(amount);
        let pagination = match (has_more, results.last()) {
            (true, Some(last)) => Pagination::more(last.id.clone(), results.len()),
            _ => Pagination::last(results.len()),
        };
        Ok(Page {
            pagination,
            results,
        })
    }
}
