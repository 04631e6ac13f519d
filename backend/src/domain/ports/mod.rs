//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain expects to interact with adapters. Driven
//! ports expose strongly typed errors so adapters map their failures into
//! predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod user_posts_query;
mod user_posts_source;

#[cfg(test)]
pub use user_posts_query::MockUserPostsQuery;
pub use user_posts_query::UserPostsQuery;
#[cfg(test)]
pub use user_posts_source::MockUserPostsSource;
pub use user_posts_source::{UserPostsSource, UserPostsSourceError};
