//! Repository interfaces and their in-memory implementations.
//!
//! The traits describe the atomic operations the rules engine needs from the
//! store: compare-and-set on job status, a guarded applicant insert, a
//! conditional stock decrement and a unique rating key. The in-memory
//! implementations provide the same guarantees under a lock and back the
//! test suites and the development server.

pub mod job;
pub mod member;
pub mod notification;
pub mod offering;
pub mod rating;

pub use job::{InMemoryJobRepository, JobRepository};
pub use member::{InMemoryMemberRepository, MemberRepository};
pub use notification::{InMemoryNotificationRepository, NotificationRepository};
pub use offering::{InMemoryOfferingRepository, OfferingRepository};
pub use rating::{InMemoryRatingRepository, RatingRepository};
