//! HTTP inbound adapter exposing REST endpoints.
//!
//! ```text
//! GET /v1/user-posts/{user_id}
//! GET /health/ready
//! GET /health/live
//! ```

pub mod error;
pub mod health;
pub mod state;
pub mod user_posts;

use actix_web::{Scope, web};

pub use error::ApiResult;

use self::user_posts::get_user_posts;

/// Versioned API scope with every REST endpoint registered.
///
/// Health probes stay outside the scope so orchestrators can reach them
/// without a version prefix.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_posts::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/v1").service(get_user_posts)
}
