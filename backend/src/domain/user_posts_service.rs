//! Aggregation service for a user's profile and posts.
//!
//! The profile and the post list are fetched on two independently spawned
//! tasks. Both tasks are always awaited, even when one has already failed, so
//! no in-flight upstream request is abandoned. The outcome is then joined by
//! a fixed priority: a profile failure wins over a posts failure regardless
//! of which task finished first.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinError;
use tracing::{debug, error};

use crate::domain::ports::{UserPostsQuery, UserPostsSource, UserPostsSourceError};
use crate::domain::{PostInfo, TraceId, UserAndPostsInfo, UserId, UserInfo};

/// Which of the two upstream reads an outcome belongs to.
#[derive(Debug, Clone, Copy)]
enum Fetch {
    User,
    Posts,
}

impl Fetch {
    const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Posts => "posts",
        }
    }
}

fn flatten_join<T>(
    joined: Result<Result<T, UserPostsSourceError>, JoinError>,
    fetch: Fetch,
    user_id: UserId,
) -> Result<T, UserPostsSourceError> {
    let outcome = joined.unwrap_or_else(|join_error| {
        error!(
            fetch = fetch.label(),
            %user_id,
            error = %join_error,
            "upstream fetch task did not complete"
        );
        Err(UserPostsSourceError::transport(format!(
            "{} fetch task failed: {join_error}",
            fetch.label()
        )))
    });
    if let Err(source_error) = &outcome {
        debug!(
            fetch = fetch.label(),
            %user_id,
            kind = source_error.kind(),
            error = %source_error,
            "upstream fetch failed"
        );
    }
    outcome
}

/// Apply the join policy to both fetch outcomes.
///
/// The profile error takes priority; the posts error is only reported when
/// the profile was fetched successfully.
fn join_outcomes(
    user_id: UserId,
    user: Result<UserInfo, UserPostsSourceError>,
    posts: Result<Vec<PostInfo>, UserPostsSourceError>,
) -> Result<UserAndPostsInfo, UserPostsSourceError> {
    match (user, posts) {
        (Err(user_error), _) => Err(user_error),
        (Ok(_), Err(posts_error)) => Err(posts_error),
        (Ok(user_info), Ok(posts)) => Ok(UserAndPostsInfo::new(user_id, user_info, posts)),
    }
}

/// Fan-out/fan-in service implementing [`UserPostsQuery`].
///
/// # Examples
/// ```rust,ignore
/// use std::sync::Arc;
///
/// let service = UserPostsService::new(Arc::new(source));
/// let aggregate = service.aggregate(UserId::new(42)).await?;
/// assert_eq!(aggregate.user_id(), UserId::new(42));
/// ```
pub struct UserPostsService<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> Clone for UserPostsService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: ?Sized> UserPostsService<S> {
    /// Create a service reading from `source`.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> UserPostsService<S>
where
    S: UserPostsSource + ?Sized + 'static,
{
    /// Fetch the profile and the posts of `user_id` concurrently and combine
    /// them.
    ///
    /// # Errors
    ///
    /// Returns the profile fetch error if it failed, otherwise the posts
    /// fetch error if that failed. Errors are never rewrapped.
    pub async fn aggregate(
        &self,
        user_id: UserId,
    ) -> Result<UserAndPostsInfo, UserPostsSourceError> {
        let user_source = Arc::clone(&self.source);
        let user_task = tokio::spawn(TraceId::propagate(async move {
            user_source.fetch_user(user_id).await
        }));
        let posts_source = Arc::clone(&self.source);
        let posts_task = tokio::spawn(TraceId::propagate(async move {
            posts_source.fetch_posts(user_id).await
        }));

        let (user_joined, posts_joined) = tokio::join!(user_task, posts_task);
        let user = flatten_join(user_joined, Fetch::User, user_id);
        let posts = flatten_join(posts_joined, Fetch::Posts, user_id);
        join_outcomes(user_id, user, posts)
    }
}

#[async_trait]
impl<S> UserPostsQuery for UserPostsService<S>
where
    S: UserPostsSource + ?Sized + 'static,
{
    async fn user_posts(&self, user_id: UserId) -> Result<UserAndPostsInfo, UserPostsSourceError> {
        self.aggregate(user_id).await
    }
}

#[cfg(test)]
#[path = "user_posts_service_tests.rs"]
mod tests;
