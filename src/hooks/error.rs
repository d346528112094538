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

use crate::client::ClientError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Failure to read a column schema out of a data file.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("ORC error: {0}")]
    Orc(#[from] orc_rust::error::OrcError),

    #[error("Unreadable schema: {0}")]
    Unreadable(String),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// A webhook could not run its check.
///
/// This is distinct from a check that ran and found violations: it is
/// answered with HTTP 500 and `{"error": message}`.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("lakeFS request failed: {0}")]
    Client(#[from] ClientError),

    #[error("Failed to read schema of {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: SchemaError,
    },
}

pub type HookResult<T> = Result<T, HookError>;

impl IntoResponse for HookError {
    fn into_response(self) -> Response {
        error!("Webhook failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
