//! Request middleware.
//!
//! Purpose: define middleware for request lifecycle concerns. Currently only
//! trace identifier propagation.

pub mod trace;

pub use trace::Trace;
