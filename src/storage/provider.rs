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

use crate::client::ClientResult;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::io::{Cursor, Write};

/// What a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    File,
    Directory,
    NotFound,
}

/// Status of a single path, derived fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path inside the repository
    pub path: String,

    pub file_type: FileType,

    /// File size in bytes; zero for directories and missing paths
    pub size: u64,

    /// Last modified timestamp (if available)
    pub last_modified: Option<DateTime<Utc>>,
}

impl FileInfo {
    pub fn file(path: impl Into<String>, size: u64, last_modified: Option<DateTime<Utc>>) -> Self {
        Self {
            path: path.into(),
            file_type: FileType::File,
            size,
            last_modified,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: FileType::Directory,
            size: 0,
            last_modified: None,
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: FileType::NotFound,
            size: 0,
            last_modified: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    pub fn exists(&self) -> bool {
        self.file_type != FileType::NotFound
    }
}

/// Which directory to enumerate and how deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelector {
    pub base_dir: String,

    /// List every descendant instead of a single level
    pub recursive: bool,
}

impl FileSelector {
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            recursive: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Seekable in-memory view over a whole object.
pub type InputFile = Cursor<Bytes>;

/// Writable stream returned by filesystems that support writes.
pub type OutputStream = Box<dyn Write + Send>;

/// Outcome of a mutating filesystem call.
///
/// Read-only filesystems answer every mutation with `Unsupported` instead of
/// failing or pretending the change was made.
#[must_use]
pub enum Mutation<T = ()> {
    Applied(T),
    Unsupported,
}

impl<T> Mutation<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Mutation::Unsupported)
    }
}

impl<T> Debug for Mutation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Mutation::Applied(_) => f.write_str("Applied"),
            Mutation::Unsupported => f.write_str("Unsupported"),
        }
    }
}

/// Filesystem capabilities consumed by components that read files by path.
///
/// Reads and listings are fallible remote calls. Mutations never fail: an
/// implementation either applies them or reports [`Mutation::Unsupported`].
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Short name identifying the implementation.
    fn type_name(&self) -> &str;

    /// Canonical form of `path` for this filesystem.
    fn normalize_path(&self, path: &str) -> String {
        path.to_string()
    }

    /// Status of a single path.
    ///
    /// Paths ending in `/` are treated as directories; anything else as a file.
    async fn stat(&self, path: &str) -> ClientResult<FileInfo>;

    /// Status of several paths, queried one after another.
    async fn stat_many(&self, paths: &[String]) -> ClientResult<Vec<FileInfo>> {
        let mut infos = Vec::with_capacity(paths.len());
        for path in paths {
            infos.push(self.stat(path).await?);
        }
        Ok(infos)
    }

    /// Complete snapshot of the entries matched by `selector`.
    async fn list(&self, selector: &FileSelector) -> ClientResult<Vec<FileInfo>>;

    /// Open a file for random-access reading.
    async fn open_for_read(&self, path: &str) -> ClientResult<InputFile>;

    async fn create_dir(&self, path: &str, recursive: bool) -> Mutation;

    async fn delete_dir(&self, path: &str) -> Mutation;

    async fn delete_dir_contents(&self, path: &str, accept_root_dir: bool) -> Mutation;

    async fn delete_root_dir_contents(&self) -> Mutation;

    async fn delete_file(&self, path: &str) -> Mutation;

    async fn move_file(&self, src: &str, dst: &str) -> Mutation;

    async fn copy_file(&self, src: &str, dst: &str) -> Mutation;

    async fn open_output_stream(&self, path: &str) -> Mutation<OutputStream>;

    async fn open_append_stream(&self, path: &str) -> Mutation<OutputStream>;
}

impl Debug for dyn FileSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "FileSystem(type={})", self.type_name())
    }
}
