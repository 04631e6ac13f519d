//! Upstream user/post service adapters.
//!
//! This module provides a thin HTTP implementation of the `UserPostsSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{UpstreamHttpSource, UpstreamSourceBuildError};
