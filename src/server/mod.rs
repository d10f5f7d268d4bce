//! HTTP server exposing the correction endpoint.
//!
//! - [`handler`]: Router, shared state and route handlers
//! - [`error`]: Endpoint errors and their HTTP responses

pub mod error;
pub mod handler;
