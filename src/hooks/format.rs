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

//! Format allow-list check.

use super::error::HookResult;
use super::event::HookEvent;
use super::report::{Violation, FORMAT_NOT_ALLOWED};
use crate::client::{ChangeType, Client};
use crate::util::formats::{is_hidden, FormatRule};
use crate::util::path::Path;
use futures::TryStreamExt;
use tracing::debug;

/// Report every file added under `prefix` that matches none of `rules`.
///
/// Only `added` changes between the source ref and the target branch count;
/// hidden files such as `_SUCCESS` are exempt.
pub async fn check_formats(
    client: &Client,
    event: &HookEvent,
    prefix: &str,
    rules: &[FormatRule],
) -> HookResult<Vec<Violation>> {
    let mut changes = client.diff(
        &event.repository_id,
        &event.source_ref,
        &event.branch_id,
        prefix,
    );

    let mut violations = Vec::new();
    while let Some(change) = changes.try_next().await? {
        if change.change_type != ChangeType::Added {
            continue;
        }
        let path = Path::new(change.path.as_str());
        if is_hidden(&path) {
            debug!("Skipping hidden path={}", path);
            continue;
        }
        if !rules.iter().any(|rule| rule.matches(&path)) {
            violations.push(Violation::new(change.path, FORMAT_NOT_ALLOWED));
        }
    }
    Ok(violations)
}
