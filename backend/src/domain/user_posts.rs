//! User and post data model.
//!
//! These values are produced by the upstream source port and combined by the
//! aggregation service. They carry no identity beyond their content and are
//! never mutated once built.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Numeric identifier of an upstream user.
///
/// # Examples
/// ```
/// use user_posts::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert!("asdf".parse::<UserId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile details for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Full name.
    pub name: String,
    /// Handle.
    pub username: String,
    /// Contact address.
    pub email: String,
}

/// One post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInfo {
    /// Upstream post identifier.
    pub post_id: i64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// Aggregate of a user's profile and posts.
///
/// ## Invariants
/// - Only built once both the profile and the post list were fetched.
/// - `posts` keeps the order the upstream returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAndPostsInfo {
    user_id: UserId,
    user_info: UserInfo,
    posts: Vec<PostInfo>,
}

impl UserAndPostsInfo {
    /// Combine a fetched profile and post list.
    #[must_use]
    pub const fn new(user_id: UserId, user_info: UserInfo, posts: Vec<PostInfo>) -> Self {
        Self {
            user_id,
            user_info,
            posts,
        }
    }

    /// Identifier the aggregate was requested for.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Profile details.
    #[must_use]
    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Posts in upstream order.
    #[must_use]
    pub fn posts(&self) -> &[PostInfo] {
        &self.posts
    }

    /// Split the aggregate into its parts.
    #[must_use]
    pub fn into_parts(self) -> (UserId, UserInfo, Vec<PostInfo>) {
        (self.user_id, self.user_info, self.posts)
    }
}
