//! # Tradepost API
//!
//! actix-web surface over the marketplace rules engine. Library exports are
//! used by the server binary and the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::{AppState, InMemory, MySql, Repositories};
