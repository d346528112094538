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

//! Validation webhooks for lakeFS pre-merge and pre-commit hooks
//!
//! Each check runs over a [`crate::client::Client`] and returns the
//! [`Violation`]s it found. [`router`] exposes them over HTTP: a check that
//! finds nothing answers 200, one that finds violations answers 400, and one
//! that cannot run answers 500.

pub mod dirty;
pub mod error;
pub mod event;
pub mod format;
pub mod metadata;
pub mod report;
pub mod schema;
pub mod server;

// Public exports
pub use dirty::check_dirty_partitions;
pub use error::{HookError, HookResult, SchemaError, SchemaResult};
pub use event::{HookEvent, HookQuery};
pub use format::check_formats;
pub use metadata::check_commit_metadata;
pub use report::{HookReport, Violation};
pub use schema::{check_schema, OrcSchemaReader, ParquetSchemaReader, SchemaReader, SchemaReaders};
pub use server::{router, AppState};
