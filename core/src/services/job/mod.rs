//! Job lifecycle service
//!
//! Drives a job from SEARCHING through IN_PROGRESS to COMPLETED. Every
//! status change is written with a compare-and-set on the prior status, so
//! of two concurrent selections or completions only one succeeds.

mod service;

#[cfg(test)]
mod tests;

pub use service::JobService;
