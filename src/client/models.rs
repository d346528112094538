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

//! Wire models of the lakeFS REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cursor returned with every page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub has_more: bool,

    /// Opaque token to pass as `after` when requesting the next page
    #[serde(default)]
    pub next_offset: String,

    /// Number of results in this page
    #[serde(default)]
    pub results: usize,

    #[serde(default)]
    pub max_per_page: usize,
}

impl Pagination {
    /// Pagination of a final page.
    pub fn last(results: usize) -> Self {
        Self {
            has_more: false,
            next_offset: String::new(),
            results,
            max_per_page: results,
        }
    }

    /// Pagination of a page followed by more results starting after `next_offset`.
    pub fn more(next_offset: impl Into<String>, results: usize) -> Self {
        Self {
            has_more: true,
            next_offset: next_offset.into(),
            results,
            max_per_page: results,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub results: Vec<T>,
}

/// Kind of a single difference between two refs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Added,
    Changed,
    Removed,
    Conflict,
    /// Any type this client does not know about
    #[serde(other)]
    Other,
}

/// Kind of a listing or diff entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    Object,
    /// A "directory" grouping entries that share a prefix up to the delimiter
    CommonPrefix,
}

/// A single difference returned by ref or branch diffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub path: String,

    #[serde(rename = "type")]
    pub change_type: ChangeType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_type: Option<PathType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl Change {
    pub fn new(path: impl Into<String>, change_type: ChangeType) -> Self {
        Self {
            path: path.into(),
            change_type,
            path_type: None,
            size_bytes: None,
        }
    }

    /// True for changes that bring new or rewritten content.
    pub fn is_added_or_changed(&self) -> bool {
        matches!(self.change_type, ChangeType::Added | ChangeType::Changed)
    }
}

/// Object metadata returned by stat and listing calls.
///
/// Common prefixes carry only a path; their size and modification time are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStats {
    pub path: String,

    pub path_type: PathType,

    #[serde(default)]
    pub size_bytes: u64,

    /// Modification time in seconds since the unix epoch
    #[serde(default)]
    pub mtime: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Entry of an object listing.
pub type ListingEntry = ObjectStats;

impl ObjectStats {
    pub fn object(path: impl Into<String>, size_bytes: u64, mtime: i64) -> Self {
        Self {
            path: path.into(),
            path_type: PathType::Object,
            size_bytes,
            mtime,
            physical_address: None,
            checksum: None,
            content_type: None,
            metadata: None,
        }
    }

    pub fn common_prefix(path: impl Into<String>) -> Self {
        Self {
            path_type: PathType::CommonPrefix,
            ..Self::object(path, 0, 0)
        }
    }

    pub fn is_object(&self) -> bool {
        self.path_type == PathType::Object
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.mtime, 0)
    }
}

/// A commit as returned by the commit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,

    #[serde(default)]
    pub parents: Vec<String>,

    #[serde(default)]
    pub committer: String,

    #[serde(default)]
    pub message: String,

    /// Seconds since the unix epoch
    #[serde(default)]
    pub creation_date: i64,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Commit {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parents: Vec::new(),
            committer: String::new(),
            message: String::new(),
            creation_date: 0,
            metadata: HashMap::new(),
        }
    }
}
