//! Test utilities for the user posts crate.
//!
//! Compiled only with the `test-support` feature so integration tests can
//! drive the full HTTP stack without a network upstream.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{UserPostsSource, UserPostsSourceError};
use crate::domain::{PostInfo, UserId, UserInfo};

/// In-memory [`UserPostsSource`] returning canned responses.
///
/// Unknown users resolve to [`UserPostsSourceError::NotFound`]; users without
/// registered posts resolve to an empty list. Every call is counted.
///
/// # Examples
/// ```
/// use user_posts::domain::{UserId, UserInfo};
/// use user_posts::test_support::StaticUserPostsSource;
///
/// let source = StaticUserPostsSource::new().with_user(
///     UserId::new(1),
///     UserInfo {
///         name: "Leanne Graham".to_owned(),
///         username: "Bret".to_owned(),
///         email: "Sincere@april.biz".to_owned(),
///     },
/// );
/// assert_eq!(source.user_calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct StaticUserPostsSource {
    users: HashMap<UserId, Result<UserInfo, UserPostsSourceError>>,
    posts: HashMap<UserId, Result<Vec<PostInfo>, UserPostsSourceError>>,
    user_calls: AtomicUsize,
    posts_calls: AtomicUsize,
}

impl StaticUserPostsSource {
    /// Create an empty source where every user is unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user profile.
    #[must_use]
    pub fn with_user(mut self, user_id: UserId, info: UserInfo) -> Self {
        self.users.insert(user_id, Ok(info));
        self
    }

    /// Register the posts returned for a user.
    #[must_use]
    pub fn with_posts(mut self, user_id: UserId, posts: Vec<PostInfo>) -> Self {
        self.posts.insert(user_id, Ok(posts));
        self
    }

    /// Make the user lookup for `user_id` fail with `error`.
    #[must_use]
    pub fn with_user_error(mut self, user_id: UserId, error: UserPostsSourceError) -> Self {
        self.users.insert(user_id, Err(error));
        self
    }

    /// Make the posts lookup for `user_id` fail with `error`.
    #[must_use]
    pub fn with_posts_error(mut self, user_id: UserId, error: UserPostsSourceError) -> Self {
        self.posts.insert(user_id, Err(error));
        self
    }

    /// Number of `fetch_user` calls observed so far.
    #[must_use]
    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_posts` calls observed so far.
    #[must_use]
    pub fn posts_calls(&self) -> usize {
        self.posts_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserPostsSource for StaticUserPostsSource {
    async fn fetch_user(&self, user_id: UserId) -> Result<UserInfo, UserPostsSourceError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Err(UserPostsSourceError::not_found(user_id)))
    }

    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<PostInfo>, UserPostsSourceError> {
        self.posts_calls.fetch_add(1, Ordering::SeqCst);
        self.posts
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
