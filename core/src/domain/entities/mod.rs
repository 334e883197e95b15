//! Domain entities representing core business objects.
//!
//! Entities reference each other by id only; relationships are resolved
//! through the repositories.

pub mod job;
pub mod member;
pub mod notification;
pub mod offering;
pub mod rating;
pub mod redemption;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use job::{Job, JobStatus, NewJob, MAX_DESCRIPTION_CHARS, MAX_LOCATION_CHARS, MAX_TITLE_CHARS};
pub use member::{Member, MemberRole, MAX_CONTACT_INFO_CHARS, MAX_NAME_CHARS};
pub use notification::{Notification, NotificationKind};
pub use offering::{Offering, OfferingDraft, MAX_OFFERING_DESCRIPTION_CHARS};
pub use rating::{Rating, RatingDirection, MAX_RATING_TEXT_CHARS, MAX_RATING_VALUE, MIN_RATING_VALUE};
pub use redemption::Redemption;
