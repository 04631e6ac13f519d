//! Driven port for reading users and their posts from the upstream service.
//!
//! The domain owns the error classification so the aggregation service and
//! the HTTP boundary never depend on transport details.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{PostInfo, UserId, UserInfo};

define_port_error! {
    /// Errors surfaced while reading from the upstream service.
    ///
    /// `NotFound` is the only variant that describes the requested resource;
    /// the remaining variants all mean the upstream could not be read.
    pub enum UserPostsSourceError {
        /// Upstream reported that the user does not exist.
        NotFound { user_id: UserId } =>
            "user {user_id} not found upstream",
        /// Network transport failed or the upstream answered with an
        /// unexpected status.
        Transport { message: String } =>
            "upstream transport failed: {message}",
        /// The outbound request exceeded the configured timeout.
        Timeout { message: String } =>
            "upstream timeout: {message}",
        /// The upstream response body could not be decoded.
        Decode { message: String } =>
            "upstream response decode failed: {message}",
    }
}

impl UserPostsSourceError {
    /// Return whether the upstream reported the user as missing.
    ///
    /// # Examples
    /// ```
    /// use user_posts::domain::UserId;
    /// use user_posts::domain::ports::UserPostsSourceError;
    ///
    /// assert!(UserPostsSourceError::not_found(UserId::new(43)).is_not_found());
    /// assert!(!UserPostsSourceError::decode("bad json").is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Short label naming the failure class, used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Transport { .. } => "transport",
            Self::Timeout { .. } => "timeout",
            Self::Decode { .. } => "decode",
        }
    }
}

/// Port for the two upstream reads the aggregate is built from.
///
/// Each call performs exactly one upstream round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPostsSource: Send + Sync {
    /// Fetch the profile of one user.
    ///
    /// Returns [`UserPostsSourceError::NotFound`] when the upstream has no
    /// such user.
    async fn fetch_user(&self, user_id: UserId) -> Result<UserInfo, UserPostsSourceError>;

    /// Fetch every post authored by one user, in upstream order.
    ///
    /// A user without posts yields an empty list, not an error.
    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<PostInfo>, UserPostsSourceError>;
}
