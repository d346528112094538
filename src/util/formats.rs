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

//! Pure predicates classifying object paths by data format.

use super::path::Path;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Directory that holds a Delta Lake transaction log.
pub const DELTA_LOG_DIR: &str = "_delta_log";

/// Extensions allowed inside a Delta Lake transaction log directory.
pub const DELTA_LOG_EXTENSIONS: [&str; 2] = ["json", "parquet"];

/// Name of the allow rule that maps to [`is_delta_lake`].
pub const DELTA_LAKE_FORMAT: &str = "delta_lake";

/// True for files that belong to a Delta Lake transaction log.
pub fn is_delta_lake(path: &Path) -> bool {
    path.directory().ends_with(DELTA_LOG_DIR) && DELTA_LOG_EXTENSIONS.contains(&path.extension())
}

/// Build a predicate matching paths with the given extension, ignoring case.
pub fn has_extension(extension: impl Into<String>) -> impl Fn(&Path) -> bool {
    let extension = extension.into().to_lowercase();
    move |path: &Path| path.extension().to_lowercase() == extension
}

/// True for hidden or marker files such as `_SUCCESS` or `_temporary`.
pub fn is_hidden(path: &Path) -> bool {
    path.base_name().starts_with('_')
}

/// A single `allow` rule of the format webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatRule {
    /// Delta Lake log files.
    DeltaLake,
    /// Files with the given extension.
    Extension(String),
}

impl FormatRule {
    /// Parse a rule name. Unknown names are treated as plain extensions.
    pub fn parse(name: &str) -> Self {
        if name == DELTA_LAKE_FORMAT {
            FormatRule::DeltaLake
        } else {
            FormatRule::Extension(name.to_string())
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            FormatRule::DeltaLake => is_delta_lake(path),
            FormatRule::Extension(extension) => has_extension(extension.as_str())(path),
        }
    }
}

impl Display for FormatRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FormatRule::DeltaLake => f.write_str(DELTA_LAKE_FORMAT),
            FormatRule::Extension(extension) => f.write_str(extension),
        }
    }
}
