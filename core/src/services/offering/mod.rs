//! Offering exchange service
//!
//! Members publish offerings priced in credits. Only a member with spender
//! standing towards the owner may redeem them, and stock is taken with a
//! single conditional decrement so a finite offering is never oversold.

mod service;

#[cfg(test)]
mod tests;

pub use service::{OfferingService, OwnerOfferings};
