//! # Tradepost Core
//!
//! Core business logic and domain layer for the Tradepost backend.
//! This crate contains the transactional rules engine of the marketplace:
//! the job lifecycle, the reputation rules, the offering exchange and the
//! trust gate they share, together with the repository interfaces the
//! rules run against.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Job, JobStatus, Member, Notification, NotificationKind, Offering, Rating, RatingDirection,
    Redemption,
};
pub use domain::value_objects::{Identity, RatingSummary, Standing};
pub use errors::{DomainError, DomainResult};
pub use repositories::{
    JobRepository, MemberRepository, NotificationRepository, OfferingRepository, RatingRepository,
};
pub use services::{JobService, MemberService, OfferingService, RatingService, TrustService};
