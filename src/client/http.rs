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

use super::api::LakeFsApi;
use super::config::LakeFsConfig;
use super::error::{ClientError, ClientResult};
use super::models::{Change, Commit, ObjectStats, Page};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Formatter};
use tracing::debug;
use url::Url;

/// [`LakeFsApi`] over the lakeFS REST API, authenticated with HTTP basic auth.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: Url,
    access_key_id: String,
    secret_access_key: String,
}

impl HttpApi {
    /// Build an HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The endpoint is empty or not a valid URL
    /// * The underlying HTTP client cannot be built
    pub fn new(config: &LakeFsConfig) -> ClientResult<Self> {
        let base_url = config.api_url()?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::ConfigError(format!(
                "lakeFS endpoint cannot be used as a base URL: {}",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
        })
    }

    /// Build an API URL from path segments; each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::ConfigError(format!("Invalid lakeFS endpoint: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, query: &[(&str, &str)], what: &str) -> ClientResult<Response> {
        debug!("GET url={} query={:?}", url, query);
        let response = self
            .http
            .get(url)
            .query(query)
            .basic_auth(&self.access_key_id, Some(&self.secret_access_key))
            .send()
            .await?;
        check_status(response, what).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
        what: &str,
    ) -> ClientResult<T> {
        let body = self.get(url, query, what).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Map non-success statuses to [`ClientError`] variants.
async fn check_status(response: Response, what: &str) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(status_error(status, what, message))
}

fn status_error(status: StatusCode, what: &str, message: String) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(what.to_string()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ClientError::Unauthorized(format!("{}: {}", what, message.trim()))
        }
        _ => ClientError::ApiError {
            status: status.as_u16(),
            message: format!("{}: {}", what, message.trim()),
        },
    }
}

#[async_trait]
impl LakeFsApi for HttpApi {
    async fn diff_refs(
        &self,
        repository: &str,
        left_ref: &str,
        right_ref: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Change>> {
        let url = self.url(&["repositories", repository, "refs", left_ref, "diff", right_ref])?;
        let amount = amount.to_string();
        let what = format!("diff {}/{}...{}", repository, left_ref, right_ref);
        self.get_json(url, &[("after", after), ("amount", amount.as_str())], &what)
            .await
    }

    async fn diff_branch(
        &self,
        repository: &str,
        branch: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Change>> {
        let url = self.url(&["repositories", repository, "branches", branch, "diff"])?;
        let amount = amount.to_string();
        let what = format!("diff branch {}/{}", repository, branch);
        self.get_json(url, &[("after", after), ("amount", amount.as_str())], &what)
            .await
    }

    async fn list_objects(
        &self,
        repository: &str,
        reference: &str,
        prefix: &str,
        after: &str,
        delimiter: &str,
        amount: usize,
    ) -> ClientResult<Page<ObjectStats>> {
        let url = self.url(&["repositories", repository, "refs", reference, "objects", "ls"])?;
        let amount = amount.to_string();
        let what = format!("list {}/{}/{}", repository, reference, prefix);
        self.get_json(
            url,
            &[
                ("prefix", prefix),
                ("after", after),
                ("delimiter", delimiter),
                ("amount", amount.as_str()),
            ],
            &what,
        )
        .await
    }

    async fn get_object(
        &self,
        repository: &str,
        reference: &str,
        path: &str,
    ) -> ClientResult<Bytes> {
        let url = self.url(&["repositories", repository, "refs", reference, "objects"])?;
        let what = format!("{}/{}/{}", repository, reference, path);
        let response = self.get(url, &[("path", path)], &what).await?;
        Ok(response.bytes().await?)
    }

    async fn stat_object(
        &self,
        repository: &str,
        reference: &str,
        path: &str,
    ) -> ClientResult<ObjectStats> {
        let url = self.url(&["repositories", repository, "refs", reference, "objects", "stat"])?;
        let what = format!("{}/{}/{}", repository, reference, path);
        self.get_json(url, &[("path", path)], &what).await
    }

    async fn log_commits(
        &self,
        repository: &str,
        reference: &str,
        after: &str,
        amount: usize,
    ) -> ClientResult<Page<Commit>> {
        let url = self.url(&["repositories", repository, "refs", reference, "commits"])?;
        let amount = amount.to_string();
        let what = format!("commit log {}/{}", repository, reference);
        self.get_json(url, &[("after", after), ("amount", amount.as_str())], &what)
            .await
    }
}

impl Debug for HttpApi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HttpApi(base_url={})", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(endpoint: &str) -> HttpApi {
        HttpApi::new(&LakeFsConfig::new(endpoint, "key", "secret")).unwrap()
    }

    #[test]
    fn test_url_building() {
        let api = api("http://localhost:8000");
        let url = api
            .url(&["repositories", "repo", "refs", "main", "objects", "stat"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/repositories/repo/refs/main/objects/stat"
        );
    }

    #[test]
    fn test_url_segments_are_encoded() {
        let api = api("http://localhost:8000/");
        let url = api
            .url(&["repositories", "repo", "refs", "feature/x y", "diff", "main"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/repositories/repo/refs/feature%2Fx%20y/diff/main"
        );
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let result = HttpApi::new(&LakeFsConfig::new("", "k", "s"));
        assert!(matches!(result, Err(ClientError::ConfigError(_))));

        let result = HttpApi::new(&LakeFsConfig::new("mailto:someone@example.com", "k", "s"));
        assert!(matches!(result, Err(ClientError::ConfigError(_))));
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(status_error(StatusCode::NOT_FOUND, "x", String::new()).is_not_found());
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "x", "denied".to_string()),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "x", String::new()),
            ClientError::Unauthorized(_)
        ));
        match status_error(StatusCode::BAD_GATEWAY, "diff", "upstream".to_string()) {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "diff: upstream");
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_debug() {
        let debug_str = format!("{:?}", api("http://localhost:8000"));
        assert!(debug_str.contains("HttpApi"));
        assert!(!debug_str.contains("secret"));
    }
}
