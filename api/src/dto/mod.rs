pub mod job;
pub mod member;
pub mod offering;
pub mod rating;

pub use job::*;
pub use member::*;
pub use offering::*;
pub use rating::*;
