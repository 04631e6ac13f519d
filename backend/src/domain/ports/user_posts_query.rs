//! Driving port for the user posts aggregate.

use async_trait::async_trait;

use super::UserPostsSourceError;
use crate::domain::{UserAndPostsInfo, UserId};

/// Use-case port consumed by inbound adapters.
///
/// Errors are passed through exactly as the source classified them so the
/// adapter can tell a missing user from an upstream failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPostsQuery: Send + Sync {
    /// Build the aggregate of a user's profile and posts.
    async fn user_posts(&self, user_id: UserId) -> Result<UserAndPostsInfo, UserPostsSourceError>;
}
