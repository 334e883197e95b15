//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository implementations for every core repository trait
//! - Embedded schema migrations

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlJobRepository, MySqlMemberRepository, MySqlNotificationRepository,
    MySqlOfferingRepository, MySqlRatingRepository,
};
