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

//! Column-name deny-list check and the schema readers it relies on.

use super::error::{HookError, HookResult, SchemaResult};
use super::event::HookEvent;
use super::report::Violation;
use crate::client::Client;
use crate::storage::{FileSystem, InputFile};
use crate::util::path::Path;
use futures::TryStreamExt;
use orc_rust::ArrowReaderBuilder;
use parquet::file::reader::{FileReader, SerializedFileReader};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::debug;

pub const PARQUET_EXTENSION: &str = "parquet";
pub const ORC_EXTENSION: &str = "orc";

/// Reads the top-level column names of one data file.
pub trait SchemaReader: Send + Sync {
    fn read_schema(&self, file: InputFile) -> SchemaResult<Vec<String>>;
}

/// [`SchemaReader`] for Parquet files, reading only the footer metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParquetSchemaReader;

impl SchemaReader for ParquetSchemaReader {
    fn read_schema(&self, file: InputFile) -> SchemaResult<Vec<String>> {
        let reader = SerializedFileReader::new(file.into_inner())?;
        let columns = reader
            .metadata()
            .file_metadata()
            .schema_descr()
            .root_schema()
            .get_fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();
        Ok(columns)
    }
}

/// [`SchemaReader`] for ORC files, reading only the file tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrcSchemaReader;

impl SchemaReader for OrcSchemaReader {
    fn read_schema(&self, file: InputFile) -> SchemaResult<Vec<String>> {
        let builder = ArrowReaderBuilder::try_new(file.into_inner())?;
        let columns = builder
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();
        Ok(columns)
    }
}

/// Schema readers keyed by file extension.
///
/// Files whose extension has no reader are not inspected.
#[derive(Clone, Default)]
pub struct SchemaReaders {
    readers: HashMap<String, Arc<dyn SchemaReader>>,
}

impl SchemaReaders {
    /// No readers at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Readers for the formats supported out of the box: Parquet and ORC.
    pub fn builtin() -> Self {
        Self::new()
            .with_reader(PARQUET_EXTENSION, Arc::new(ParquetSchemaReader))
            .with_reader(ORC_EXTENSION, Arc::new(OrcSchemaReader))
    }

    pub fn with_reader(mut self, extension: impl Into<String>, reader: Arc<dyn SchemaReader>) -> Self {
        self.readers.insert(extension.into(), reader);
        self
    }

    pub fn get(&self, extension: &str) -> Option<&Arc<dyn SchemaReader>> {
        self.readers.get(extension)
    }
}

impl Debug for SchemaReaders {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut extensions: Vec<&String> = self.readers.keys().collect();
        extensions.sort();
        write!(f, "SchemaReaders({:?})", extensions)
    }
}

/// Report every column whose name starts with one of `disallowed`.
///
/// Added or changed files under `prefix` are opened on the source ref. One
/// violation is reported per offending column, however many prefixes it
/// matches.
pub async fn check_schema(
    client: &Client,
    readers: &SchemaReaders,
    event: &HookEvent,
    prefix: &str,
    disallowed: &[String],
) -> HookResult<Vec<Violation>> {
    let fs = client.filesystem(&event.repository_id, &event.source_ref);
    let mut changes = client.diff(
        &event.repository_id,
        &event.source_ref,
        &event.branch_id,
        prefix,
    );

    let mut violations = Vec::new();
    while let Some(change) = changes.try_next().await? {
        if !change.is_added_or_changed() {
            continue;
        }
        let path = Path::new(change.path.as_str());
        let Some(reader) = readers.get(path.extension()) else {
            debug!("No schema reader for path={}", path);
            continue;
        };

        let file = fs.open_for_read(&change.path).await?;
        let columns = reader.read_schema(file).map_err(|source| HookError::Schema {
            path: change.path.clone(),
            source,
        })?;
        debug!("Read schema path={} columns={}", change.path, columns.len());

        for column in columns {
            if disallowed.iter().any(|p| column.starts_with(p.as_str())) {
                violations.push(Violation::new(
                    change.path.as_str(),
                    format!("column name not allowed: {}", column),
                ));
            }
        }
    }
    Ok(violations)
}
