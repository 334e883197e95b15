//! Business services containing domain logic and use cases.

pub mod job;
pub mod member;
pub mod notification;
pub mod offering;
pub mod rating;
pub mod trust;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use job::JobService;
pub use member::MemberService;
pub use notification::Notifier;
pub use offering::{OfferingService, OwnerOfferings};
pub use rating::{NewRating, RatingService};
pub use trust::{standing, TrustService};
