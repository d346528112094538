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

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Default separator between path components.
pub const DEFAULT_PATH_SEPARATOR: char = '/';

/// Separator between a base name and its extension.
pub const EXTENSION_SEPARATOR: char = '.';

/// A slash-delimited object path split into directory, base name and extension.
///
/// All components are slices of the raw string, recomputed on access from the
/// rightmost separator. Every input, including the empty string, yields
/// well-defined (possibly empty) components.
///
/// # Examples
///
/// ```
/// use lake_hooks::util::path::Path;
///
/// let path = Path::new("tables/events/_delta_log/00001.json");
/// assert_eq!(path.directory(), "tables/events/_delta_log");
/// assert_eq!(path.base_name(), "00001.json");
/// assert_eq!(path.extension(), "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    raw: String,
    separator: char,
}

impl Path {
    /// Create a path using the default `/` separator.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_separator(raw, DEFAULT_PATH_SEPARATOR)
    }

    /// Create a path with a custom separator.
    pub fn with_separator(raw: impl Into<String>, separator: char) -> Self {
        Self {
            raw: raw.into(),
            separator,
        }
    }

    /// The raw path string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Everything before the last separator, or `""` when there is none.
    pub fn directory(&self) -> &str {
        match self.raw.rfind(self.separator) {
            Some(idx) => &self.raw[..idx],
            None => "",
        }
    }

    /// Everything after the last separator, or the whole path when there is none.
    pub fn base_name(&self) -> &str {
        match self.raw.rfind(self.separator) {
            Some(idx) => &self.raw[idx + self.separator.len_utf8()..],
            None => &self.raw,
        }
    }

    /// Everything after the last `.` of the base name, or `""` when there is none.
    pub fn extension(&self) -> &str {
        let base_name = self.base_name();
        match base_name.rfind(EXTENSION_SEPARATOR) {
            Some(idx) => &base_name[idx + EXTENSION_SEPARATOR.len_utf8()..],
            None => "",
        }
    }

    /// The directory with a trailing separator, as used for directory-style queries.
    ///
    /// Returns `""` for paths without a directory component.
    pub fn directory_prefix(&self) -> String {
        let directory = self.directory();
        if directory.is_empty() {
            String::new()
        } else {
            format!("{}{}", directory, self.separator)
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path::new(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Path::new(raw)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
