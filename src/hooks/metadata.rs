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

//! Required commit metadata check.

use super::error::HookResult;
use super::event::HookEvent;
use super::report::Violation;
use crate::client::Client;
use futures::TryStreamExt;
use tracing::debug;

/// Require `fields` in the commit metadata when the commit touches `prefix`.
///
/// Only the first uncommitted change under `prefix` is fetched. Violations
/// carry the prefix as their path.
pub async fn check_commit_metadata(
    client: &Client,
    event: &HookEvent,
    prefix: &str,
    fields: &[String],
) -> HookResult<Vec<Violation>> {
    let mut changes = client.diff_branch(&event.repository_id, &event.source_ref, prefix, Some(1));
    if changes.try_next().await?.is_none() {
        debug!("No changes under prefix={}, metadata not required", prefix);
        return Ok(Vec::new());
    }

    let violations = fields
        .iter()
        .filter_map(|field| match event.commit_metadata.get(field) {
            None => Some(Violation::new(
                prefix,
                format!("missing commit metadata field: {}", field),
            )),
            Some(value) if value.is_empty() => Some(Violation::new(
                prefix,
                format!("commit metadata field is empty: {}", field),
            )),
            Some(_) => None,
        })
        .collect();
    Ok(violations)
}
