//! Reqwest-backed upstream source adapter.
//!
//! This adapter owns transport details only: URL construction, status and
//! timeout mapping, and JSON decoding into domain values.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{PostDto, UserDto};
use crate::domain::ports::{UserPostsSource, UserPostsSourceError};
use crate::domain::{PostInfo, UserId, UserInfo};

const DEFAULT_USER_AGENT: &str = "user-posts-backend/0.1";

/// Errors raised while building [`UpstreamHttpSource`].
#[derive(Debug, thiserror::Error)]
pub enum UpstreamSourceBuildError {
    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("upstream base URL {url} cannot be used as a base")]
    InvalidBaseUrl { url: String },
    /// The reqwest client could not be constructed.
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Upstream source adapter issuing one HTTP GET per port call.
#[derive(Debug, Clone)]
pub struct UpstreamHttpSource {
    client: Client,
    base_url: Url,
}

impl UpstreamHttpSource {
    /// Build an adapter rooted at `base_url`.
    ///
    /// `timeout` bounds each outbound request; `None` leaves requests
    /// unbounded.
    /// ```rust,ignore
    /// let base = Url::parse("https://jsonplaceholder.typicode.com")?;
    /// let source = UpstreamHttpSource::new(base, Some(Duration::from_secs(10)))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry a path or the reqwest
    /// client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, UpstreamSourceBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(UpstreamSourceBuildError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        let builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn user_url(&self, user_id: UserId) -> Url {
        endpoint(&self.base_url, &["users", &user_id.to_string()])
    }

    fn posts_url(&self) -> Url {
        endpoint(&self.base_url, &["posts"])
    }

    /// Send `request` and decode a JSON body.
    ///
    /// A 404 becomes `NotFound` only when `missing_user` names the user the
    /// resource belongs to; otherwise it is an unexpected status like any other.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        missing_user: Option<UserId>,
    ) -> Result<T, UserPostsSourceError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "upstream responded");

        if let Some(user_id) = missing_user.filter(|_| status == StatusCode::NOT_FOUND) {
            return Err(UserPostsSourceError::not_found(user_id));
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        decode(body.as_ref())
    }
}

#[async_trait]
impl UserPostsSource for UpstreamHttpSource {
    async fn fetch_user(&self, user_id: UserId) -> Result<UserInfo, UserPostsSourceError> {
        let request = self.client.get(self.user_url(user_id));
        let user: UserDto = self.get_json(request, Some(user_id)).await?;
        Ok(user.into())
    }

    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<PostInfo>, UserPostsSourceError> {
        let request = self
            .client
            .get(self.posts_url())
            .query(&[("userId", user_id.get())]);
        let posts: Vec<PostDto> = self.get_json(request, None).await?;
        Ok(posts.into_iter().map(PostInfo::from).collect())
    }
}

fn endpoint(base_url: &Url, segments: &[&str]) -> Url {
    let mut url = base_url.clone();
    // Checked in `UpstreamHttpSource::new`.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, UserPostsSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        UserPostsSourceError::decode(format!(
            "invalid upstream JSON payload: {error}; body: {}",
            body_preview(body)
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> UserPostsSourceError {
    if error.is_timeout() {
        UserPostsSourceError::timeout(error.to_string())
    } else if error.is_decode() {
        UserPostsSourceError::decode(error.to_string())
    } else {
        UserPostsSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserPostsSourceError {
    let body_preview = body_preview(body);
    if body_preview.is_empty() {
        UserPostsSourceError::transport(format!("status {}", status.as_u16()))
    } else {
        UserPostsSourceError::transport(format!("status {}: {}", status.as_u16(), body_preview))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    fn source(base: &str) -> UpstreamHttpSource {
        UpstreamHttpSource::new(Url::parse(base).expect("valid url"), None)
            .expect("client builds")
    }

    #[rstest]
    #[case("https://jsonplaceholder.typicode.com")]
    #[case("https://jsonplaceholder.typicode.com/")]
    fn user_url_appends_segments(#[case] base: &str) {
        let url = source(base).user_url(UserId::new(42));
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/users/42");
    }

    #[test]
    fn endpoints_keep_base_path_prefix() {
        let source = source("http://127.0.0.1:9000/api/");
        assert_eq!(source.posts_url().as_str(), "http://127.0.0.1:9000/api/posts");
        assert_eq!(
            source.user_url(UserId::new(-1)).as_str(),
            "http://127.0.0.1:9000/api/users/-1"
        );
    }

    #[test]
    fn rejects_base_urls_without_a_path() {
        let error = UpstreamHttpSource::new(Url::parse("mailto:ops@example.com").expect("url"), None)
            .expect_err("mailto is not a base");
        assert!(matches!(error, UpstreamSourceBuildError::InvalidBaseUrl { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT)]
    #[case::bad_request(StatusCode::BAD_REQUEST)]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    fn unexpected_statuses_are_transport_errors(#[case] status: StatusCode) {
        let error = map_status_error(status, b"{\"error\":\"backend unavailable\"}");
        assert_eq!(error.kind(), "transport");
        assert!(
            error.to_string().contains(&status.as_u16().to_string()),
            "message should carry the status: {error}"
        );
    }

    #[test]
    fn status_message_omits_empty_body() {
        let error = map_status_error(StatusCode::BAD_GATEWAY, b"  \n ");
        assert_eq!(error, UserPostsSourceError::transport("status 502"));
    }

    #[test]
    fn body_preview_compacts_and_truncates() {
        let long = format!("a  b\n{}", "x".repeat(400));
        let preview = body_preview(long.as_bytes());
        assert!(preview.starts_with("a b "));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }

    #[test]
    fn decode_failures_map_to_decode_errors() {
        let error = decode::<Vec<PostDto>>(b"{\"not\":\"a list\"}").expect_err("object is not a list");
        assert_eq!(error.kind(), "decode");
    }

    #[test]
    fn decode_accepts_empty_post_lists() {
        let posts = decode::<Vec<PostDto>>(b"[]").expect("empty list decodes");
        assert!(posts.is_empty());
    }
}
