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

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::form_urlencoded;

/// Body of a lakeFS pre-merge or pre-commit hook call.
///
/// Only the fields the checks rely on are modelled; anything else lakeFS
/// sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEvent {
    pub repository_id: String,
    pub branch_id: String,
    pub source_ref: String,

    #[serde(default)]
    pub event_type: String,

    #[serde(default)]
    pub hook_id: String,

    #[serde(default, alias = "metadata")]
    pub commit_metadata: HashMap<String, String>,
}

impl HookEvent {
    pub fn new(
        repository_id: impl Into<String>,
        branch_id: impl Into<String>,
        source_ref: impl Into<String>,
    ) -> Self {
        Self {
            repository_id: repository_id.into(),
            branch_id: branch_id.into(),
            source_ref: source_ref.into(),
            event_type: String::new(),
            hook_id: String::new(),
            commit_metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.commit_metadata.insert(key.into(), value.into());
        self
    }
}

/// Query parameters shared by the webhooks.
///
/// `allow`, `disallow` and `fields` may be repeated; `tag` is accepted as an
/// alias of `fields`. A repeated `prefix` keeps its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookQuery {
    pub prefix: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub fields: Vec<String>,
}

impl HookQuery {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = HookQuery::default();
        let mut prefix = None;
        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "prefix" => {
                    prefix.get_or_insert_with(|| value.into_owned());
                }
                "allow" => query.allow.push(value.into_owned()),
                "disallow" => query.disallow.push(value.into_owned()),
                "fields" | "tag" => query.fields.push(value.into_owned()),
                _ => {}
            }
        }
        query.prefix = prefix.unwrap_or_default();
        query
    }
}
