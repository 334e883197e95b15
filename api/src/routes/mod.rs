//! API v1 route handlers
//!
//! Every handler is generic over the repository set so the same routes serve
//! the MySQL deployment and the in-memory development server.

pub mod jobs;
pub mod members;
pub mod offerings;
pub mod ratings;
