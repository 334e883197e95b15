//! Reputation service
//!
//! Once a job is COMPLETED its hirer and worker may each rate the other
//! exactly once. The direction stored on a rating is the role the rated
//! member held on the job.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewRating, RatingService};
