//! Trust gate
//!
//! Decides the standing of one member towards another. A worker who
//! completed a paid job for a hirer becomes a spender against that hirer's
//! offerings; nothing else confers spending rights.

mod gate;
mod service;

pub use gate::standing;
pub use service::TrustService;
