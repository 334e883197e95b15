//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response wrapper

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination};
pub use response::ApiResponse;
