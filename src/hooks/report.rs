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

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const FORMAT_NOT_ALLOWED: &str = "file format not allowed";
pub const OBJECT_IS_DIRTY: &str = "object is dirty";

/// One problem found by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub path: String,
    pub error: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            error: error.into(),
        }
    }
}

/// Webhook answer: `{"errors": [...]}`, HTTP 200 when empty and 400 otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookReport {
    pub errors: Vec<Violation>,
}

impl HookReport {
    pub fn new(errors: Vec<Violation>) -> Self {
        Self { errors }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn status(&self) -> StatusCode {
        if self.passed() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for HookReport {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(HookReport::default().status(), StatusCode::OK);
        let report = HookReport::new(vec![Violation::new("a/b.csv", FORMAT_NOT_ALLOWED)]);
        assert!(!report.passed());
        assert_eq!(report.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wire_format() {
        let report = HookReport::new(vec![Violation::new("dir/a.parquet", OBJECT_IS_DIRTY)]);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"errors": [{"path": "dir/a.parquet", "error": "object is dirty"}]})
        );
        assert_eq!(
            serde_json::to_string(&HookReport::default()).unwrap(),
            r#"{"errors":[]}"#
        );
    }
}
