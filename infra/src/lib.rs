//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits on MySQL via SQLx,
//! the connection pool, and configuration loading.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration loading
pub mod config;

pub use config::load_config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(e: ::config::ConfigError) -> Self {
        InfrastructureError::Config(e.to_string())
    }
}
