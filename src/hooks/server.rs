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

use super::dirty::check_dirty_partitions;
use super::error::HookResult;
use super::event::{HookEvent, HookQuery};
use super::format::check_formats;
use super::metadata::check_commit_metadata;
use super::report::HookReport;
use super::schema::{check_schema, SchemaReaders};
use crate::client::Client;
use crate::util::formats::FormatRule;
use axum::extract::{RawQuery, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

const README: &str = include_str!("../../README.md");

/// Shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: Client,
    pub schema_readers: SchemaReaders,
}

impl AppState {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            schema_readers: SchemaReaders::builtin(),
        }
    }

    pub fn with_schema_readers(mut self, schema_readers: SchemaReaders) -> Self {
        self.schema_readers = schema_readers;
        self
    }
}

/// Routes of the webhook service.
///
/// | Method | Path | Query |
/// |--------|------|-------|
/// | GET | `/` | |
/// | POST | `/webhooks/format` | `prefix`, `allow` (repeatable) |
/// | POST | `/webhooks/schema` | `prefix`, `disallow` (repeatable) |
/// | POST | `/webhooks/dirty_check` | `prefix` |
/// | POST | `/webhooks/commit_metadata` | `prefix`, `fields` or `tag` (repeatable) |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/webhooks/format", post(format_hook))
        .route("/webhooks/schema", post(schema_hook))
        .route("/webhooks/dirty_check", post(dirty_check_hook))
        .route("/webhooks/commit_metadata", post(commit_metadata_hook))
        .with_state(state)
}

async fn index() -> &'static str {
    README
}

async fn format_hook(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(event): Json<HookEvent>,
) -> HookResult<HookReport> {
    let query = HookQuery::parse(query.as_deref());
    let rules: Vec<FormatRule> = query.allow.iter().map(|name| FormatRule::parse(name)).collect();
    info!(
        "Format check repository={} source_ref={} branch={} prefix={} allow={:?}",
        event.repository_id, event.source_ref, event.branch_id, query.prefix, query.allow
    );
    let errors = check_formats(&state.client, &event, &query.prefix, &rules).await?;
    Ok(HookReport::new(errors))
}

async fn schema_hook(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(event): Json<HookEvent>,
) -> HookResult<HookReport> {
    let query = HookQuery::parse(query.as_deref());
    info!(
        "Schema check repository={} source_ref={} branch={} prefix={} disallow={:?}",
        event.repository_id, event.source_ref, event.branch_id, query.prefix, query.disallow
    );
    let errors = check_schema(
        &state.client,
        &state.schema_readers,
        &event,
        &query.prefix,
        &query.disallow,
    )
    .await?;
    Ok(HookReport::new(errors))
}

async fn dirty_check_hook(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(event): Json<HookEvent>,
) -> HookResult<HookReport> {
    let query = HookQuery::parse(query.as_deref());
    info!(
        "Dirty check repository={} source_ref={} branch={} prefix={}",
        event.repository_id, event.source_ref, event.branch_id, query.prefix
    );
    let errors = check_dirty_partitions(&state.client, &event, &query.prefix).await?;
    Ok(HookReport::new(errors))
}

async fn commit_metadata_hook(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Json(event): Json<HookEvent>,
) -> HookResult<HookReport> {
    let query = HookQuery::parse(query.as_deref());
    info!(
        "Commit metadata check repository={} source_ref={} prefix={} fields={:?}",
        event.repository_id, event.source_ref, query.prefix, query.fields
    );
    let errors = check_commit_metadata(&state.client, &event, &query.prefix, &query.fields).await?;
    Ok(HookReport::new(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockApi;
    use crate::client::{Change, ChangeType};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    const EVENT: &str = r#"{
        "event_type": "pre-merge",
        "repository_id": "repo",
        "branch_id": "main",
        "source_ref": "feature",
        "commit_metadata": {"job_id": "7"}
    }"#;

    fn app(api: MockApi) -> Router {
        router(AppState::new(Client::with_api(Arc::new(api))))
    }

    fn post_event(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_index_serves_readme() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app(MockApi::new()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, README.as_bytes());
    }

    #[tokio::test]
    async fn test_format_violation_is_400() {
        let api = MockApi::new().with_ref_diff(
            "feature",
            "main",
            vec![
                Change::new("a/_delta_log/0001.json", ChangeType::Added),
                Change::new("a/b.csv", ChangeType::Added),
            ],
        );
        let (status, body) = call(
            app(api),
            post_event("/webhooks/format?allow=delta_lake&prefix=a/", EVENT),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"errors": [{"path": "a/b.csv", "error": "file format not allowed"}]})
        );
    }

    #[tokio::test]
    async fn test_format_pass_is_200() {
        let api = MockApi::new().with_ref_diff(
            "feature",
            "main",
            vec![Change::new("a/x.parquet", ChangeType::Added)],
        );
        let (status, body) = call(
            app(api),
            post_event("/webhooks/format?allow=parquet&allow=delta_lake&prefix=a/", EVENT),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"errors": []}));
    }

    #[tokio::test]
    async fn test_schema_without_readable_files_is_200() {
        let api = MockApi::new().with_ref_diff(
            "feature",
            "main",
            vec![Change::new("public/a.csv", ChangeType::Added)],
        );
        let (status, _) = call(
            app(api),
            post_event("/webhooks/schema?disallow=user_&prefix=public/", EVENT),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_schema_inspects_orc_files() {
        let api = MockApi::new()
            .with_object("feature", "public/users.orc", include_bytes!("../../testdata/users.orc"), 0)
            .with_ref_diff(
                "feature",
                "main",
                vec![Change::new("public/users.orc", ChangeType::Added)],
            );
        let (status, body) = call(
            app(api),
            post_event("/webhooks/schema?disallow=user_&prefix=public/", EVENT),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"errors": [{
                "path": "public/users.orc",
                "error": "column name not allowed: user_email"
            }]})
        );
    }

    #[tokio::test]
    async fn test_dirty_check() {
        let api = MockApi::new()
            .with_commit("feature", "c1")
            .with_sized_object("c1", "dir/a.parquet", 100)
            .with_sized_object("feature", "dir/a.parquet", 100)
            .with_sized_object("feature", "dir/b.parquet", 50)
            .with_branch_diff("main", vec![Change::new("dir/b.parquet", ChangeType::Added)]);
        let (status, body) = call(app(api), post_event("/webhooks/dirty_check?prefix=dir/", EVENT)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["path"], "dir/a.parquet");
        assert_eq!(body["errors"][0]["error"], "object is dirty");
    }

    #[tokio::test]
    async fn test_commit_metadata_with_tag_alias() {
        let api = MockApi::new().with_branch_diff(
            "feature",
            vec![Change::new("data/daily/a.parquet", ChangeType::Added)],
        );
        let (status, body) = call(
            app(api),
            post_event(
                "/webhooks/commit_metadata?prefix=data/daily/&fields=job_id&tag=owning_team",
                EVENT,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"errors": [{
                "path": "data/daily/",
                "error": "missing commit metadata field: owning_team"
            }]})
        );
    }

    #[tokio::test]
    async fn test_client_failure_is_500() {
        let (status, body) = call(
            app(MockApi::new().failing(500)),
            post_event("/webhooks/format?allow=parquet", EVENT),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("lakeFS request failed"));
    }

    #[tokio::test]
    async fn test_malformed_event_is_rejected() {
        let (status, _) = call(
            app(MockApi::new()),
            post_event("/webhooks/dirty_check", r#"{"repository_id": "repo"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
