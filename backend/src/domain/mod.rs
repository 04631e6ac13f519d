//! Domain primitives, ports and services.
//!
//! Purpose: define the user posts data model, the ports adapters implement,
//! and the aggregation service. Nothing here depends on HTTP.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `UserId`, `UserInfo`, `PostInfo`, `UserAndPostsInfo`: data model.
//! - `UserPostsService`: concurrent fetch-and-aggregate use-case.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
mod trace_id;
mod user_posts;
mod user_posts_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user_posts::{PostInfo, UserAndPostsInfo, UserId, UserInfo};
pub use self::user_posts_service::UserPostsService;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
