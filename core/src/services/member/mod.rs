//! Member directory service
//!
//! Creates members on first authentication, completes onboarding and owns
//! the member's notification preferences and queue.

mod service;

#[cfg(test)]
mod tests;

pub use service::MemberService;
