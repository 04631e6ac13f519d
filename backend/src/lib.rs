//! User posts backend library.
//!
//! Serves `GET /v1/user-posts/{user_id}`, which concurrently reads a user's
//! profile and posts from an upstream JSON API and returns them merged.
//!
//! Layout follows ports and adapters:
//! - [`domain`]: data model, ports, and the aggregation service.
//! - [`inbound`]: actix-web handlers translating HTTP into port calls.
//! - [`outbound`]: reqwest adapter implementing the upstream port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
