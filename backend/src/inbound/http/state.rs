//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserPostsQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Aggregation use-case behind `GET /v1/user-posts/{user_id}`.
    pub user_posts: Arc<dyn UserPostsQuery>,
}

impl HttpState {
    /// Construct state from the aggregation port.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use user_posts::domain::UserPostsService;
    /// use user_posts::inbound::http::state::HttpState;
    /// use user_posts::outbound::upstream::UpstreamHttpSource;
    ///
    /// let base = "https://jsonplaceholder.typicode.com".parse().expect("url");
    /// let source = UpstreamHttpSource::new(base, None).expect("client");
    /// let state = HttpState::new(Arc::new(UserPostsService::new(Arc::new(source))));
    /// let _query = state.user_posts.clone();
    /// ```
    #[must_use]
    pub fn new(user_posts: Arc<dyn UserPostsQuery>) -> Self {
        Self { user_posts }
    }
}
