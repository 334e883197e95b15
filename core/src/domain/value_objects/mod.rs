//! Value objects representing immutable domain concepts.

pub mod identity;
pub mod rating_summary;
pub mod standing;

// Re-export commonly used types
pub use identity::Identity;
pub use rating_summary::{RatingSummary, RoleSummary};
pub use standing::Standing;
