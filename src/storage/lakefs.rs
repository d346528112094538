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

use super::provider::{FileInfo, FileSelector, FileSystem, InputFile, Mutation, OutputStream};
use crate::client::{Client, ClientResult, ListingEntry, DEFAULT_DELIMITER};
use async_trait::async_trait;
use futures::TryStreamExt;
use std::fmt::{Debug, Formatter};
use std::io::Cursor;
use tracing::debug;

/// Read-only [`FileSystem`] over one ref of a lakeFS repository.
///
/// Nothing is cached: every call goes to the server. Reads pull the whole
/// object into memory before any byte is returned, so only objects that fit
/// in memory can be opened.
///
/// # Examples
///
/// ```no_run
/// use lake_hooks::client::{Client, LakeFsConfig};
/// use lake_hooks::storage::{FileSystem, FileType};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let client = Client::new(&LakeFsConfig::new("http://localhost:8000", "KEY", "SECRET"))?;
/// let fs = client.filesystem("my-repo", "my-branch");
///
/// let info = fs.stat("collections/events/part-0000.parquet").await?;
/// if info.file_type == FileType::File {
///     let file = fs.open_for_read(&info.path).await?;
///     println!("read {} bytes", file.get_ref().len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LakeFsFileSystem {
    client: Client,
    repository: String,
    reference: String,
}

impl LakeFsFileSystem {
    pub const TYPE_NAME: &'static str = "lakefs";

    pub fn new(client: Client, repository: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            client,
            repository: repository.into(),
            reference: reference.into(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Collect the listing under `path` into file infos.
    async fn list_entries(
        &self,
        path: &str,
        delimiter: &str,
        max_amount: Option<usize>,
    ) -> ClientResult<Vec<FileInfo>> {
        self.client
            .list(&self.repository, &self.reference, path, delimiter, max_amount)
            .map_ok(to_file_info)
            .try_collect()
            .await
    }

    fn ignore<T>(&self, operation: &str, path: &str) -> Mutation<T> {
        debug!(
            "Ignoring operation={} path={} on read-only filesystem {}/{}",
            operation, path, self.repository, self.reference
        );
        Mutation::Unsupported
    }
}

fn to_file_info(entry: ListingEntry) -> FileInfo {
    if entry.is_object() {
        let last_modified = entry.last_modified();
        FileInfo::file(entry.path, entry.size_bytes, last_modified)
    } else {
        FileInfo::directory(entry.path)
    }
}

#[async_trait]
impl FileSystem for LakeFsFileSystem {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    async fn stat(&self, path: &str) -> ClientResult<FileInfo> {
        if path.ends_with(DEFAULT_DELIMITER) {
            // A directory exists as long as something is listed under it
            let probe = self.list_entries(path, DEFAULT_DELIMITER, Some(1)).await?;
            return Ok(if probe.is_empty() {
                FileInfo::not_found(path)
            } else {
                FileInfo::directory(path)
            });
        }

        match self
            .client
            .stat_object(&self.repository, &self.reference, path)
            .await
        {
            Ok(stats) => Ok(FileInfo::file(path, stats.size_bytes, stats.last_modified())),
            Err(e) if e.is_not_found() => Ok(FileInfo::not_found(path)),
            Err(e) => Err(e),
        }
    }

    async fn list(&self, selector: &FileSelector) -> ClientResult<Vec<FileInfo>> {
        let delimiter = if selector.recursive { "" } else { DEFAULT_DELIMITER };
        let entries = self.list_entries(&selector.base_dir, delimiter, None).await?;
        debug!(
            "Listed base_dir={} recursive={} count={}",
            selector.base_dir,
            selector.recursive,
            entries.len()
        );
        Ok(entries)
    }

    async fn open_for_read(&self, path: &str) -> ClientResult<InputFile> {
        let data = self
            .client
            .get_object(&self.repository, &self.reference, path)
            .await?;
        debug!("Read path={} size={} into memory", path, data.len());
        Ok(Cursor::new(data))
    }

    async fn create_dir(&self, path: &str, _recursive: bool) -> Mutation {
        self.ignore("create_dir", path)
    }

    async fn delete_dir(&self, path: &str) -> Mutation {
        self.ignore("delete_dir", path)
    }

    async fn delete_dir_contents(&self, path: &str, _accept_root_dir: bool) -> Mutation {
        self.ignore("delete_dir_contents", path)
    }

    async fn delete_root_dir_contents(&self) -> Mutation {
        self.ignore("delete_root_dir_contents", "")
    }

    async fn delete_file(&self, path: &str) -> Mutation {
        self.ignore("delete_file", path)
    }

    async fn move_file(&self, src: &str, _dst: &str) -> Mutation {
        self.ignore("move_file", src)
    }

    async fn copy_file(&self, src: &str, _dst: &str) -> Mutation {
        self.ignore("copy_file", src)
    }

    async fn open_output_stream(&self, path: &str) -> Mutation<OutputStream> {
        self.ignore("open_output_stream", path)
    }

    async fn open_append_stream(&self, path: &str) -> Mutation<OutputStream> {
        self.ignore("open_append_stream", path)
    }
}

impl Debug for LakeFsFileSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LakeFsFileSystem(repository={}, reference={})",
            self.repository, self.reference
        )
    }
}
