//! User posts aggregate endpoint.
//!
//! ```text
//! GET /v1/user-posts/{user_id}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, PostInfo, UserAndPostsInfo, UserId, UserInfo};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Profile section of [`UserPostsResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserInfoResponse {
    #[schema(example = "Leanne Graham")]
    pub name: String,
    #[schema(example = "Bret")]
    pub username: String,
    #[schema(example = "Sincere@april.biz")]
    pub email: String,
}

/// One post in [`UserPostsResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    #[schema(example = 57)]
    pub id: i64,
    #[schema(example = "Dissertation on the Weave")]
    pub title: String,
    #[schema(example = "work in progress...")]
    pub body: String,
}

/// Response payload combining a user's profile and posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPostsResponse {
    /// Identifier the aggregate was requested for.
    #[schema(example = 42)]
    pub id: i64,
    pub user_info: UserInfoResponse,
    /// Posts in upstream order; empty when the user has none.
    pub posts: Vec<PostResponse>,
}

impl From<UserInfo> for UserInfoResponse {
    fn from(value: UserInfo) -> Self {
        Self {
            name: value.name,
            username: value.username,
            email: value.email,
        }
    }
}

impl From<PostInfo> for PostResponse {
    fn from(value: PostInfo) -> Self {
        Self {
            id: value.post_id,
            title: value.title,
            body: value.body,
        }
    }
}

impl From<UserAndPostsInfo> for UserPostsResponse {
    fn from(value: UserAndPostsInfo) -> Self {
        let (user_id, user_info, posts) = value.into_parts();
        Self {
            id: user_id.get(),
            user_info: user_info.into(),
            posts: posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}

/// The id is the last `/`-separated segment of whatever follows
/// `/user-posts/`, so `a/42` names user 42 while an empty or trailing-slash
/// suffix is rejected.
fn last_segment(tail: &str) -> &str {
    tail.rsplit('/').next().unwrap_or(tail)
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<UserId>().map_err(|err| {
        debug!(user_id = raw, error = %err, "rejecting non-integer user id");
        Error::invalid_request("user id must be an integer")
            .with_details(json!({ "field": "userId", "value": raw }))
    })
}

/// Fetch a user's profile and posts as one document.
#[utoipa::path(
    get,
    path = "/v1/user-posts/{user_id}",
    description = "Fetch the profile and posts of one upstream user concurrently and return them merged. Example request: GET /v1/user-posts/42",
    params(("user_id" = i64, Path, description = "Upstream user identifier")),
    responses(
        (status = 200, description = "User profile with posts", body = UserPostsResponse),
        (status = 400, description = "User id is not an integer", body = Error),
        (status = 404, description = "Upstream has no such user", body = Error),
        (status = 500, description = "Upstream could not be read", body = Error)
    ),
    tags = ["user-posts"],
    operation_id = "getUserPosts"
)]
#[get("/user-posts/{tail:.*}")]
pub async fn get_user_posts(
    state: web::Data<HttpState>,
    tail: web::Path<String>,
) -> ApiResult<web::Json<UserPostsResponse>> {
    let user_id = parse_user_id(last_segment(tail.as_str()))?;
    let aggregate = state.user_posts.user_posts(user_id).await?;
    Ok(web::Json(aggregate.into()))
}
